//! Line classification for modem dump output
//!
//! One primitive shared by both parsing pipelines: given a single line of
//! tool output, decide its role. Check order is significant — a record
//! header always wins over the generic `key: value` pattern, even when the
//! header text happens to contain a colon.

use regex::Regex;

/// Role of a single line within a dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `Location <loc>, folder "<name>"` — starts a new message record
    MessageHeader { location: String, folder: String },

    /// `Memory <bank>, Location <loc>` — starts a new phonebook record
    ContactHeader { bank: String, location: String },

    /// Concatenated (multi-part) message marker
    LinkMarker {
        coding: String,
        id: String,
        part: String,
    },

    /// Generic `key: value` detail line (raw, not yet normalized)
    Field { key: String, value: String },

    /// Free text belonging to the current record's body (pre-trimmed)
    Unstructured(String),

    /// Blank line or listing banner; carries no data
    Ignored,
}

static MESSAGE_HEADER: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r#"^Location\s+(\S+),\s*folder\s+"([^"]*)""#).unwrap()
});

static CONTACT_HEADER: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^Memory\s+(\w*),\s*Location\s+(\S+)").unwrap());

// The third token is an opaque per-message value, not a true message id,
// but it is what the tool exposes and what `LinkMarker::id` carries.
static LINK_MARKER: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"Concatenated \(linked\) message, ID \((\w+)\) (\S+) part (\d+) of (\d+)").unwrap()
});

// Dot-all so a value keeps any embedded line breaks the caller passed through.
static FIELD: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?s)^([^:]+):(.*)$").unwrap());

static BANNER: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^SMS message").unwrap());

/// Classify one line of dump output
#[must_use]
pub fn classify(line: &str) -> LineClass {
    if line.trim().is_empty() || BANNER.is_match(line) {
        return LineClass::Ignored;
    }

    if let Some(caps) = MESSAGE_HEADER.captures(line) {
        return LineClass::MessageHeader {
            location: caps[1].to_string(),
            folder: caps[2].to_string(),
        };
    }

    if let Some(caps) = CONTACT_HEADER.captures(line) {
        return LineClass::ContactHeader {
            bank: caps[1].to_string(),
            location: caps[2].to_string(),
        };
    }

    if let Some(caps) = LINK_MARKER.captures(line) {
        return LineClass::LinkMarker {
            coding: caps[1].to_string(),
            id: caps[2].to_string(),
            part: caps[3].to_string(),
        };
    }

    if let Some(caps) = FIELD.captures(line) {
        return LineClass::Field {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
        };
    }

    LineClass::Unstructured(line.trim().to_string())
}
