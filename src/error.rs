//! Error types for dump parsing

use thiserror::Error;

/// Errors that can occur while normalizing dump fields
///
/// The parsers themselves are total: malformed lines are dropped or produce
/// partially-populated records, never an error. The only recoverable error
/// path is date normalization, and the message parser maps it to an epoch
/// fallback value.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A `Sent` field value did not parse as a date/time
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
}

/// Result type for dump parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
