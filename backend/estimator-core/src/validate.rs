//! Blur-time field validators.
//!
//! Each validator is a pure function of the raw field value (and, for the
//! production year, the current date). Results are recomputed on every
//! call - the year bound moves with the calendar, so nothing here may be
//! memoized. Visual side effects (error styling, inline messages) are the
//! UI layer's job; the contract is the validity flag plus, for the city
//! field, the normalized form.

use crate::catalog;

use std::ops::RangeInclusive;

use chrono::Datelike;

pub const AIRBAGS_RANGE: RangeInclusive<i64> = 0..=20;
pub const MILEAGE_RANGE: RangeInclusive<i64> = 0..=300_000;
pub const MIN_PRODUCTION_YEAR: i64 = 1990;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Canonical form of the input, when the validator normalizes
    /// (currently only the city field). Returned on mismatch too, so the
    /// normalized spelling can be reported back.
    pub normalized: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            normalized: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            normalized: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Airbag count: integer in `0..=20`.
pub fn airbags(raw: &str) -> ValidationResult {
    integer_in_range(raw, AIRBAGS_RANGE)
}

/// Mileage: integer in `0..=300000`.
pub fn mileage(raw: &str) -> ValidationResult {
    integer_in_range(raw, MILEAGE_RANGE)
}

/// Production year: integer in `1990..=current calendar year`.
///
/// The upper bound is read from the local clock at every call, so a
/// session that spans a year boundary starts accepting the new year
/// without a reload.
pub fn year(raw: &str) -> ValidationResult {
    year_with_current(raw, i64::from(chrono::Local::now().year()))
}

/// Year check against an explicit upper bound. Split out so tests can pin
/// the calendar.
pub fn year_with_current(raw: &str, current_year: i64) -> ValidationResult {
    integer_in_range(raw, MIN_PRODUCTION_YEAR..=current_year)
}

/// City: trimmed, title-cased, then checked against the catalog's city
/// set (which includes the always-accepted `"Other"`).
///
/// Empty or all-whitespace input is invalid with no normalization
/// attempt. Otherwise the normalized form is returned whether or not it
/// matched.
pub fn city(raw: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid();
    }

    let normalized = title_case(trimmed);
    ValidationResult {
        valid: catalog::is_known_city(&normalized),
        normalized: Some(normalized),
    }
}

fn integer_in_range(raw: &str, range: RangeInclusive<i64>) -> ValidationResult {
    match raw.trim().parse::<i64>() {
        Ok(value) if range.contains(&value) => ValidationResult::valid(),
        _ => ValidationResult::invalid(),
    }
}

/// Lowercase the whole string, then uppercase the first letter of each
/// whitespace-separated word. Interior whitespace is preserved verbatim.
fn title_case(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    let mut at_word_start = true;
    for character in value.to_lowercase().chars() {
        if character.is_whitespace() {
            at_word_start = true;
            normalized.push(character);
        } else if at_word_start {
            normalized.extend(character.to_uppercase());
            at_word_start = false;
        } else {
            normalized.push(character);
        }
    }
    normalized
}
