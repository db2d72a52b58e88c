//! Shared field value cleanup and the `sent` date reformatting rule

use crate::error::{ParseError, Result};
use chrono::NaiveDateTime;

/// Fallback emitted when a `sent` value does not parse as a date
pub const EPOCH_FALLBACK: &str = "1970-01-01 00:00:00";

const SENT_INPUT_FORMAT: &str = "%m-%d-%Y %H:%M:%S";
pub(crate) const SENT_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalize a raw field key: trim, spaces to underscores, lower-case
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_lowercase()
}

/// Normalize a raw field value: trim, strip one pair of surrounding quotes
#[must_use]
pub fn normalize_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a raw `sent` value into a date/time
///
/// The tool appends a parenthesized annotation after the timestamp; only the
/// part before the first `(` is parsed. Slashes are accepted as date
/// separators.
pub fn parse_sent_date(raw: &str) -> Result<NaiveDateTime> {
    let cleaned = raw.split('(').next().unwrap_or(raw).trim().replace('/', "-");
    NaiveDateTime::parse_from_str(&cleaned, SENT_INPUT_FORMAT)
        .map_err(|_| ParseError::InvalidDate(raw.to_string()))
}

/// Reformat a raw `sent` value to `YYYY-MM-DD HH:MM:SS`
///
/// An unparseable value yields the epoch fallback rather than an error; the
/// message parser counts that outcome separately.
#[must_use]
pub fn reformat_sent_date(raw: &str) -> String {
    parse_sent_date(raw).map_or_else(
        |_| EPOCH_FALLBACK.to_string(),
        |dt| dt.format(SENT_OUTPUT_FORMAT).to_string(),
    )
}
