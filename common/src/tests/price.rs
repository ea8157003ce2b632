// Unit tests for price formatting: currency prefix + thousands separators.

use crate::Price;

/// **VALUE**: Verifies the canonical rendering the result display depends on.
///
/// **WHY THIS MATTERS**: The rendered string is exactly what the user sees as
/// the estimate. `{"price": 12345}` must come out as `$12,345`.
///
/// **BUG THIS CATCHES**: Would catch broken thousands grouping or a missing
/// currency prefix.
#[test]
fn given_whole_price_when_displayed_then_groups_thousands_with_dollar_prefix() {
    assert_eq!(Price(12345.0).to_string(), "$12,345");
    assert_eq!(Price(1_234_567.0).to_string(), "$1,234,567");
}

#[test]
fn given_price_under_one_thousand_when_displayed_then_has_no_separator() {
    assert_eq!(Price(0.0).to_string(), "$0");
    assert_eq!(Price(999.0).to_string(), "$999");
}

#[test]
fn given_exact_thousand_boundaries_when_displayed_then_separators_align() {
    assert_eq!(Price(1000.0).to_string(), "$1,000");
    assert_eq!(Price(100_000.0).to_string(), "$100,000");
}

/// The prediction server rounds to one decimal; the fractional part must
/// survive formatting without trailing zeros.
#[test]
fn given_fractional_price_when_displayed_then_keeps_fraction_without_trailing_zeros() {
    assert_eq!(Price(12345.7).to_string(), "$12,345.7");
    assert_eq!(Price(8_500.25).to_string(), "$8,500.25");
}

#[test]
fn given_fraction_rounding_up_to_next_integer_when_displayed_then_carries_into_integral_part() {
    assert_eq!(Price(999.9999).to_string(), "$1,000");
}
