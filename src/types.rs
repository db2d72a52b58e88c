//! Core types for parsed dumps

use md5::{Digest, Md5};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel value standing in for an inbox with no messages
pub const EMPTY_INBOX: &str = "empty";

/// Messages grouped by folder, keyed by per-folder sequence index
pub type FolderMap = BTreeMap<String, BTreeMap<u32, MessageRecord>>;

/// Content-derived fingerprint of a message record's field snapshot
///
/// Recomputed after every line that mutates the record, so intermediate
/// values reflect only the fields seen so far. The digest covers the sorted
/// field map; body and link changes trigger a recomputation but do not feed
/// the hash.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub String);

impl Fingerprint {
    /// Compute the fingerprint of a field snapshot
    #[must_use]
    pub fn of_fields(fields: &BTreeMap<String, String>) -> Self {
        let mut hasher = Md5::new();
        for (key, value) in fields {
            hasher.update(key.as_bytes());
            hasher.update(b":");
            hasher.update(value.as_bytes());
            hasher.update(b"\n");
        }
        let digest: [u8; 16] = hasher.finalize().into();
        Self(digest.iter().map(|byte| format!("{byte:02x}")).collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Linkage data for one part of a concatenated multi-part message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkInfo {
    /// Coding scheme of the concatenated message
    pub coding: String,

    /// Opaque per-message token emitted by the tool (not a true message id)
    pub id: String,

    /// Part number within the concatenated message
    pub part: String,
}

/// One SMS message, or one part of a concatenated message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    /// Device storage slot identifier
    pub location: String,

    /// Zero-based position within the record's folder
    pub sequence_index: u32,

    /// Normalized field name to value, populated as detail lines arrive
    ///
    /// Well-known keys include `number`, `sender`, `sent`, `state`; unknown
    /// keys pass through untouched.
    pub fields: BTreeMap<String, String>,

    /// Present only for parts of a concatenated message
    pub link: Option<LinkInfo>,

    /// Unstructured lines, individually trimmed, joined with no separator
    pub body: String,

    /// Fingerprint of the fields seen so far
    pub id: Fingerprint,
}

impl MessageRecord {
    /// Start a record for a freshly seen header line
    #[must_use]
    pub fn new(location: impl Into<String>, sequence_index: u32) -> Self {
        let mut record = Self {
            location: location.into(),
            sequence_index,
            fields: BTreeMap::new(),
            link: None,
            body: String::new(),
            id: Fingerprint::default(),
        };
        record.refresh_id();
        record
    }

    pub(crate) fn refresh_id(&mut self) {
        self.id = Fingerprint::of_fields(&self.fields);
    }
}

/// Result body of a message dump parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFolders {
    /// At least one inbox message was present
    Folders(FolderMap),

    /// The dump held no inbox messages; replaces the whole result
    EmptyInbox,
}

impl Serialize for MessageFolders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Folders(folders) => folders.serialize(serializer),
            Self::EmptyInbox => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("inbox", EMPTY_INBOX)?;
                map.end()
            }
        }
    }
}

/// Parsed message dump with observable parse outcomes
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageDump {
    /// Folder to sequence-index to record, or the empty-inbox sentinel
    pub folders: MessageFolders,

    /// Counters for dropped lines, dropped fields and date fallbacks
    pub stats: ParseStats,
}

impl MessageDump {
    /// Look up a record by folder name and sequence index
    #[must_use]
    pub fn get(&self, folder: &str, index: u32) -> Option<&MessageRecord> {
        match &self.folders {
            MessageFolders::Folders(folders) => folders.get(folder)?.get(&index),
            MessageFolders::EmptyInbox => None,
        }
    }

    /// Whether the dump collapsed to the empty-inbox sentinel
    #[must_use]
    pub const fn is_empty_inbox(&self) -> bool {
        matches!(self.folders, MessageFolders::EmptyInbox)
    }
}

/// One phonebook entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Slot identifier within the memory bank
    pub location: String,

    /// Memory bank name the entry lives in
    pub memory_bank: String,

    /// Normalized field name to value; later duplicates overwrite earlier
    pub fields: BTreeMap<String, String>,

    /// All email values seen for this entry, in encounter order
    pub emails: Vec<String>,
}

impl ContactRecord {
    #[must_use]
    pub fn new(location: impl Into<String>, memory_bank: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            memory_bank: memory_bank.into(),
            fields: BTreeMap::new(),
            emails: Vec::new(),
        }
    }
}

/// Parsed memory dump with observable parse outcomes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDump {
    /// Contacts in header-encounter order
    pub contacts: Vec<ContactRecord>,

    /// Counters for dropped lines and dropped fields
    pub stats: ParseStats,
}

/// Observable non-fatal outcomes of one parse call
///
/// None of these abort parsing; the parsers are total over any input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines with no record to attach to
    pub lines_dropped: usize,

    /// Fields whose normalized key or value was empty
    pub fields_dropped: usize,

    /// `sent` values that took the epoch fallback
    pub dates_unparseable: usize,
}
