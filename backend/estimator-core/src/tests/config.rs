// Unit tests for config load/save/validate.

use crate::config::EstimatorConfig;
use crate::error::config::ConfigError;

#[test]
fn given_missing_config_file_when_loaded_then_defaults_apply() {
    let dir = tempfile::tempdir().expect("tempdir");

    let config = EstimatorConfig::load(dir.path()).expect("load defaults");

    assert_eq!(config.version, 1);
    assert_eq!(config.server.base_url, crate::PREDICTION_SERVER_BASE_URL);
    assert_eq!(config.server.request_timeout_secs, 30);
    assert_eq!(config.display.error_revert_delay_ms, 3000);
}

#[test]
fn given_saved_config_when_reloaded_then_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut config = EstimatorConfig::default();
    config.server.base_url = "http://localhost:9000".to_string();
    config.display.error_revert_delay_ms = 500;
    config.save(dir.path()).expect("save");

    let reloaded = EstimatorConfig::load(dir.path()).expect("reload");
    assert_eq!(reloaded.server.base_url, "http://localhost:9000");
    assert_eq!(reloaded.display.error_revert_delay_ms, 500);
}

#[test]
fn given_corrupt_config_file_when_loaded_then_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("estimator.json"), "{not json").expect("write");

    let error = EstimatorConfig::load(dir.path()).expect_err("must fail");
    assert!(matches!(error, ConfigError::ParseError { .. }));
}

#[test]
fn given_invalid_values_when_validated_then_rejected() {
    let mut config = EstimatorConfig::default();
    config.server.base_url = "ftp://wrong".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = EstimatorConfig::default();
    config.server.request_timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = EstimatorConfig::default();
    config.version = 0;
    assert!(config.validate().is_err());
}

/// Partial config files pick up defaults for the missing sections.
#[test]
fn given_partial_config_file_when_loaded_then_missing_sections_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("estimator.json"),
        r#"{"server": {"base_url": "http://example.test"}}"#,
    )
    .expect("write");

    let config = EstimatorConfig::load(dir.path()).expect("load");
    assert_eq!(config.server.base_url, "http://example.test");
    assert_eq!(config.server.request_timeout_secs, 30);
    assert_eq!(config.display.error_revert_delay_ms, 3000);
}
