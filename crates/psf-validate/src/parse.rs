//! Fallible value parsers used by the validity checks.
//!
//! Conversion failures are modeled as `Result` values so the engine can turn
//! them into issues; nothing here panics on malformed data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized date format: {0}")]
    Date(String),
    #[error("not a numeric value: {0}")]
    Numeric(String),
}

/// Date-only formats accepted for PSF date columns: ISO and the common
/// US month/day/year conventions, with either separator, plus compact ISO.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%Y%m%d"];

/// Datetime formats: the date formats above with a time-of-day suffix.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a calendar date from any of the accepted conventional formats.
///
/// The check that uses this cares only about parseability, not about a
/// canonical output form; the parsed date is returned for callers that
/// want it.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    Err(ParseError::Date(trimmed.to_string()))
}

/// Parse a double-precision float, accepting exponent notation and signs.
pub fn parse_number(value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::Numeric(value.trim().to_string()))
}

/// True when `value` is non-empty and contains only ASCII digits.
///
/// Signs, decimal points, and embedded whitespace all fail; callers trim
/// before checking.
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
