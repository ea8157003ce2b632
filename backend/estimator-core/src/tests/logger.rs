// Unit tests for logger initialization.

use crate::logger;

/// Initialization is idempotent: the second call warns and returns Ok
/// instead of fighting over the global logger.
#[test]
fn given_repeated_initialization_then_both_calls_succeed() {
    let dir = tempfile::tempdir().expect("tempdir");

    logger::initialize(dir.path()).expect("first init");
    logger::initialize(dir.path()).expect("second init is a no-op");

    assert!(dir.path().join("estimator.log").exists());
}
