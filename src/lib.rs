// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! SMS and Phonebook Dump Parser
//!
//! A strongly-typed parsing library that turns the free-form, colon-delimited
//! text dumps of a modem-control tool into structured records.
//!
//! # Features
//!
//! - Record-boundary detection over irregular, non-tabular output
//! - Per-folder sequential message indexing
//! - Concatenated (multi-part) message linkage
//! - Body accumulation for unstructured lines
//! - Phonebook contacts with repeated email fields
//! - Field normalization (key casing, quote stripping, date reformatting)
//!
//! # Example
//!
//! ```rust
//! use sms_extract::parse_message_dump;
//!
//! let output = "Location 1, folder \"Inbox\"\n\
//!               Number: +1234567890\n\
//!               Sent: 01/02/2023 10:00:00\n\
//!               Hello World";
//! let dump = parse_message_dump(output);
//!
//! let message = dump.get("inbox", 0).unwrap();
//! assert_eq!(message.fields["number"], "+1234567890");
//! assert_eq!(message.fields["sent"], "2023-01-02 10:00:00");
//! assert_eq!(message.body, "Hello World");
//! ```

mod classify;
mod contact;
mod error;
mod message;
mod normalize;
mod types;

pub use classify::{LineClass, classify};
pub use contact::{parse_contact_dump, parse_contact_lines};
pub use error::{ParseError, Result};
pub use message::{parse_message_dump, parse_message_lines};
pub use normalize::{normalize_key, normalize_value, parse_sent_date, reformat_sent_date};
pub use types::*;
