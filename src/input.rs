//! Input normalization for the three numeric form fields.
//!
//! Each normalizer runs on every text change and returns the string that
//! should replace the field's displayed text: characters the field does not
//! accept are stripped, and the amount is re-rendered with thousands
//! grouping. A minus sign is never accepted, so downstream values are
//! non-negative by construction.

use thiserror::Error;

use crate::format::group_digits;

/// Error returned when a normalized field value does not convert to a number.
#[derive(Debug, Error)]
#[error("'{0}' is not a valid number")]
pub struct ParseFieldError(String);

/// Normalizes the loan amount: digits only, re-rendered with comma grouping.
/// Input with no digits at all normalizes to the empty string.
pub fn normalize_amount(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    // Re-rendering as an integer drops leading zeros; keep a lone "0".
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() {
        "0"
    } else {
        significant
    };
    group_digits(significant)
}

/// Normalizes the term: digits only, no further transformation.
pub fn normalize_term(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalizes the interest rate: digits and at most one decimal point.
/// When several points appear, the first one wins and every later digit
/// group joins the fractional run: "1.2.3" -> "1.23".
pub fn normalize_rate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            out.push(c);
        }
    }
    out
}

/// Parses a normalized amount back to its numeric value, stripping the
/// grouping commas first.
pub fn parse_amount(normalized: &str) -> Result<f64, ParseFieldError> {
    normalized
        .replace(',', "")
        .parse()
        .map_err(|_| ParseFieldError(normalized.to_string()))
}

/// Parses a normalized term into whole years.
pub fn parse_term(normalized: &str) -> Result<u32, ParseFieldError> {
    normalized
        .parse()
        .map_err(|_| ParseFieldError(normalized.to_string()))
}

/// Parses a normalized annual rate (percent).
pub fn parse_rate(normalized: &str) -> Result<f64, ParseFieldError> {
    normalized
        .parse()
        .map_err(|_| ParseFieldError(normalized.to_string()))
}
