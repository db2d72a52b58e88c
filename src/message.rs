//! Message dump parser
//!
//! Single pass over the captured output of the message-listing command. A
//! header line opens a record; every following line mutates that record
//! until the next header or end of input.

use crate::classify::{LineClass, classify};
use crate::normalize::{
    EPOCH_FALLBACK, SENT_OUTPUT_FORMAT, normalize_key, normalize_value, parse_sent_date,
};
use crate::types::{FolderMap, LinkInfo, MessageDump, MessageFolders, MessageRecord, ParseStats};
use std::collections::BTreeMap;
use tracing::debug;

/// Parse the full captured output of the message-listing command
#[must_use]
pub fn parse_message_dump(output: &str) -> MessageDump {
    parse_message_lines(output.lines())
}

/// Parse an already-split sequence of message-listing output lines
pub fn parse_message_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> MessageDump {
    let mut parser = MessageParser::new();
    for line in lines {
        parser.feed(line);
    }
    parser.finish()
}

/// Per-invocation parse state; no counters survive across calls
struct MessageParser {
    folders: FolderMap,
    next_index: BTreeMap<String, u32>,
    current: Option<(String, u32)>,
    stats: ParseStats,
}

impl MessageParser {
    fn new() -> Self {
        Self {
            folders: FolderMap::new(),
            next_index: BTreeMap::new(),
            current: None,
            stats: ParseStats::default(),
        }
    }

    fn feed(&mut self, line: &str) {
        match classify(line) {
            LineClass::Ignored | LineClass::ContactHeader { .. } => {}
            LineClass::MessageHeader { location, folder } => self.start_record(location, &folder),
            LineClass::LinkMarker { coding, id, part } => {
                self.mutate_current(line, |record| {
                    record.link = Some(LinkInfo { coding, id, part });
                });
            }
            LineClass::Field { key, value } => self.store_field(line, &key, &value),
            LineClass::Unstructured(text) => {
                self.mutate_current(line, |record| record.body.push_str(&text));
            }
        }
    }

    fn start_record(&mut self, location: String, folder: &str) {
        // Every folder name gets its own counter, fresh per parse call.
        let folder = folder.to_lowercase();
        let counter = self.next_index.entry(folder.clone()).or_insert(0);
        let index = *counter;
        *counter += 1;

        self.folders
            .entry(folder.clone())
            .or_default()
            .insert(index, MessageRecord::new(location, index));
        self.current = Some((folder, index));
    }

    fn store_field(&mut self, line: &str, raw_key: &str, raw_value: &str) {
        let key = normalize_key(raw_key);
        let value = if key == "sent" {
            self.reformat_sent(raw_value)
        } else {
            normalize_value(raw_value)
        };

        if key.is_empty() || value.is_empty() {
            self.stats.fields_dropped += 1;
            debug!("dropped field with empty key or value: {line:?}");
            return;
        }

        self.mutate_current(line, |record| {
            record.fields.insert(key, value);
        });
    }

    fn reformat_sent(&mut self, raw_value: &str) -> String {
        let value = normalize_value(raw_value);
        match parse_sent_date(&value) {
            Ok(date) => date.format(SENT_OUTPUT_FORMAT).to_string(),
            Err(err) => {
                self.stats.dates_unparseable += 1;
                debug!("sent date fallback: {err}");
                EPOCH_FALLBACK.to_string()
            }
        }
    }

    /// Apply a mutation to the current record and refresh its fingerprint,
    /// or count the line as dropped if no record is open
    fn mutate_current(&mut self, line: &str, apply: impl FnOnce(&mut MessageRecord)) {
        let record = self
            .current
            .as_ref()
            .and_then(|(folder, index)| self.folders.get_mut(folder)?.get_mut(index));

        if let Some(record) = record {
            apply(record);
            record.refresh_id();
        } else {
            self.stats.lines_dropped += 1;
            debug!("dropped line outside any record: {line:?}");
        }
    }

    fn finish(self) -> MessageDump {
        let no_inbox = self.folders.get("inbox").is_none_or(BTreeMap::is_empty);
        let folders = if no_inbox {
            debug!("no inbox messages; collapsing to sentinel");
            MessageFolders::EmptyInbox
        } else {
            debug!("parsed {} folders", self.folders.len());
            MessageFolders::Folders(self.folders)
        };

        MessageDump {
            folders,
            stats: self.stats,
        }
    }
}
