// Unit tests for the static vehicle catalog.

use crate::catalog;

#[test]
fn given_known_make_when_looked_up_then_returns_models_in_catalog_order() {
    let models = catalog::models_for("Toyota");
    assert_eq!(models.first(), Some(&"Prius"));
    assert!(models.contains(&"Land Cruiser Prado"));
    assert_eq!(models.len(), 49);
}

#[test]
fn given_unknown_make_when_looked_up_then_returns_empty_slice() {
    assert!(catalog::models_for("DeLorean").is_empty());
    assert!(catalog::models_for("").is_empty());
    assert!(!catalog::is_known_make("DeLorean"));
    assert!(catalog::is_known_make("Honda"));
}

/// Lookup is exact-key: a make name in the wrong case is unknown.
#[test]
fn given_wrong_case_make_when_looked_up_then_unknown() {
    assert!(catalog::models_for("toyota").is_empty());
}

#[test]
fn given_normalized_city_names_when_tested_then_membership_is_exact() {
    assert!(catalog::is_known_city("New York"));
    assert!(catalog::is_known_city("Salt Lake City"));
    assert!(!catalog::is_known_city("new york"));
    assert!(!catalog::is_known_city("Narnia"));
}

/// The sentinel is an ordinary member of the set, so it is always
/// accepted after normalization.
#[test]
fn given_other_sentinel_when_tested_then_accepted() {
    assert!(catalog::is_known_city("Other"));
}
