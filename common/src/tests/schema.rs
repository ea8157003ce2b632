// Unit tests for the field schema and coercion policy.

use crate::schema::{FieldKind, REQUEST_FIELDS, coerce_float, coerce_int};

#[test]
fn given_numeric_strings_when_coerced_then_parse_with_surrounding_whitespace() {
    assert_eq!(coerce_int(" 2015 "), Some(2015));
    assert_eq!(coerce_int("0"), Some(0));
    assert_eq!(coerce_float("3.5"), Some(3.5));
    assert_eq!(coerce_float(" 0 "), Some(0.0));
}

/// Malformed numerics coerce to `None` (wire `null`) under the uniform
/// fallback policy; there is no prefix-parsing of values like "12abc".
#[test]
fn given_malformed_numeric_strings_when_coerced_then_none() {
    assert_eq!(coerce_int(""), None);
    assert_eq!(coerce_int("abc"), None);
    assert_eq!(coerce_int("12abc"), None);
    assert_eq!(coerce_int("3.5"), None);
    assert_eq!(coerce_float(""), None);
    assert_eq!(coerce_float("n/a"), None);
}

#[test]
fn given_schema_table_then_declares_all_seventeen_fields_with_expected_kinds() {
    assert_eq!(REQUEST_FIELDS.len(), 17);

    let kind_of = |name: &str| {
        REQUEST_FIELDS
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.kind)
    };

    assert_eq!(kind_of("Prod. year"), Some(FieldKind::Int));
    assert_eq!(kind_of("Leather interior"), Some(FieldKind::Bool));
    assert_eq!(kind_of("Engine volume"), Some(FieldKind::Float));
    assert_eq!(kind_of("Turbo"), Some(FieldKind::Float));
    assert_eq!(kind_of("City"), Some(FieldKind::Text));
}
