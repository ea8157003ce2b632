//! Predicted price with display formatting.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Fraction digits kept when rendering, matching `toLocaleString`'s default.
const MAX_FRACTION_DIGITS: u32 = 3;

/// A predicted price in dollars.
///
/// Renders with a currency prefix and thousands separators:
/// `Price(12345.0)` displays as `$12,345`, `Price(12345.7)` as `$12,345.7`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub f64);

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price(value)
    }
}

impl Display for Price {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        let scale = 10u64.pow(MAX_FRACTION_DIGITS) as f64;
        let negative = self.0.is_sign_negative() && self.0 != 0.0;
        let scaled = (self.0.abs() * scale).round() as u64;
        let integral = scaled / scale as u64;
        let fraction = scaled % scale as u64;

        write!(formatter, "$")?;
        if negative {
            write!(formatter, "-")?;
        }
        write!(formatter, "{}", group_thousands(integral))?;

        if fraction > 0 {
            let digits = format!("{fraction:03}");
            write!(formatter, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

/// Insert a comma between every group of three digits, right to left.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
