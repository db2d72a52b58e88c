//! Memory (phonebook) dump parser
//!
//! Same single-pass shape as the message parser, over the memory-listing
//! command's output. Repeated email fields accumulate into a list instead of
//! overwriting each other.

use crate::classify::{LineClass, classify};
use crate::normalize::{normalize_key, normalize_value};
use crate::types::{ContactDump, ContactRecord, ParseStats};
use tracing::debug;

/// Parse the full captured output of the memory-listing command
#[must_use]
pub fn parse_contact_dump(output: &str) -> ContactDump {
    parse_contact_lines(output.lines())
}

/// Parse an already-split sequence of memory-listing output lines
#[must_use]
pub fn parse_contact_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> ContactDump {
    let mut parser = ContactParser::new();
    for line in lines {
        parser.feed(line);
    }
    parser.finish()
}

/// Per-invocation parse state
struct ContactParser {
    contacts: Vec<ContactRecord>,
    current: Option<usize>,
    stats: ParseStats,
}

impl ContactParser {
    fn new() -> Self {
        Self {
            contacts: Vec::new(),
            current: None,
            stats: ParseStats::default(),
        }
    }

    fn feed(&mut self, line: &str) {
        match classify(line) {
            LineClass::ContactHeader { bank, location } => self.start_record(&bank, location),
            LineClass::Field { key, value } => self.store_field(line, &key, &value),
            // Message headers, link markers and free text carry nothing for
            // the phonebook pipeline.
            LineClass::MessageHeader { .. }
            | LineClass::LinkMarker { .. }
            | LineClass::Unstructured(_)
            | LineClass::Ignored => {}
        }
    }

    fn start_record(&mut self, bank: &str, location: String) {
        if bank.trim().is_empty() {
            // An empty bank name acts as a separator: no record, no index
            // advance, and the previous record stops accepting fields.
            debug!("skipping header with empty memory bank: location {location}");
            self.current = None;
            return;
        }

        self.contacts.push(ContactRecord::new(location, bank));
        self.current = Some(self.contacts.len() - 1);
    }

    fn store_field(&mut self, line: &str, raw_key: &str, raw_value: &str) {
        let key = normalize_key(raw_key);
        let value = normalize_value(raw_value);

        if key.is_empty() || value.is_empty() {
            self.stats.fields_dropped += 1;
            debug!("dropped field with empty key or value: {line:?}");
            return;
        }

        let Some(record) = self.current.and_then(|index| self.contacts.get_mut(index)) else {
            self.stats.lines_dropped += 1;
            debug!("dropped field outside any record: {line:?}");
            return;
        };

        if key.starts_with("email") {
            record.emails.push(value);
        } else {
            record.fields.insert(key, value);
        }
    }

    fn finish(self) -> ContactDump {
        debug!("parsed {} contacts", self.contacts.len());
        ContactDump {
            contacts: self.contacts,
            stats: self.stats,
        }
    }
}
