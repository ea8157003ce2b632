// Unit tests for the manufacturer → model cascade.

use crate::cascade::{ModelSelector, model_slug};
use crate::catalog;

#[test]
fn given_model_labels_when_slugged_then_lowercase_with_hyphenated_whitespace() {
    assert_eq!(model_slug("Land Cruiser Prado"), "land-cruiser-prado");
    assert_eq!(model_slug("RX 450"), "rx-450");
    assert_eq!(model_slug("Civic"), "civic");
    // Runs of whitespace collapse to a single hyphen.
    assert_eq!(model_slug("Step  Wagon"), "step-wagon");
}

/// **VALUE**: Verifies the core cascade invariant - options are exactly
/// the catalog's list for the selected make.
///
/// **WHY THIS MATTERS**: The model dropdown must mirror
/// `catalog.makes[selected]` in order, with the machine value / display
/// label pairing the submission relies on.
///
/// **BUG THIS CATCHES**: Would catch reordering, dropped models, or the
/// slug drifting from the label.
#[test]
fn given_known_make_when_rebuilt_then_options_mirror_catalog_in_order() {
    // GIVEN: A fresh selector
    let mut selector = ModelSelector::new();

    // WHEN: Selecting a known manufacturer
    selector.rebuild("Toyota");

    // THEN: Enabled, one option per catalog model, in order
    assert!(selector.is_enabled());
    let expected = catalog::models_for("Toyota");
    assert_eq!(selector.options().len(), expected.len());
    for (option, label) in selector.options().iter().zip(expected) {
        assert_eq!(option.label, *label);
        assert_eq!(option.value, model_slug(label));
    }
}

#[test]
fn given_unknown_make_when_rebuilt_then_disabled_with_no_options() {
    let mut selector = ModelSelector::new();
    selector.rebuild("Toyota");

    selector.rebuild("DeLorean");

    assert!(!selector.is_enabled());
    assert!(selector.options().is_empty());
}

#[test]
fn given_empty_make_when_rebuilt_then_disabled() {
    let mut selector = ModelSelector::new();
    selector.rebuild("");
    assert!(!selector.is_enabled());
    assert!(selector.options().is_empty());
}

/// **VALUE**: Verifies re-entrancy - switching makes replaces the list.
///
/// **WHY THIS MATTERS**: The original DOM code rebuilt the option list
/// from a placeholder every time; an implementation that appends would
/// show Toyota and Honda models together after a switch.
///
/// **BUG THIS CATCHES**: Would catch a missing `clear()` before
/// repopulation.
#[test]
fn given_make_switch_when_rebuilt_then_replaces_rather_than_appends() {
    // GIVEN: Selector already populated for Toyota
    let mut selector = ModelSelector::new();
    selector.rebuild("Toyota");
    let toyota_count = selector.options().len();

    // WHEN: Switching to Honda
    selector.rebuild("Honda");

    // THEN: Only Honda models remain
    let honda = catalog::models_for("Honda");
    assert_eq!(selector.options().len(), honda.len());
    assert_ne!(selector.options().len(), toyota_count);
    assert_eq!(selector.options()[0].value, "fit");
    assert_eq!(selector.options()[0].label, "FIT");
}
