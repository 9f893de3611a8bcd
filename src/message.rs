//! Parsed chat message type.
//!
//! This module provides [`Message`], one entry of the chat timeline. Every
//! supported export line shape is normalized into this structure by the
//! [`parsing`](crate::parsing) module.
//!
//! # Examples
//!
//! ```
//! use chatpulse::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//!
//! let mut msg = Message::new(ts, "Alice", "first line");
//! msg.append_line("second line");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.text(), "first line\nsecond line");
//! ```
//!
//! ## Serialization
//!
//! Timestamps serialize as ISO-8601 without an offset (exports carry no
//! timezone), and the body is emitted under the `message` key:
//!
//! ```
//! use chatpulse::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let json = serde_json::to_string(&Message::new(ts, "Alice", "hi"))?;
//!
//! assert_eq!(
//!     json,
//!     r#"{"timestamp":"2024-01-01T10:00:00","sender":"Alice","message":"hi"}"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single chat message assembled from one header line and any number of
/// continuation lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the export.
    #[serde(with = "iso_timestamp")]
    pub timestamp: NaiveDateTime,

    /// Display name of the author, trimmed.
    pub sender: String,

    /// Body text. Multi-line messages are joined with `\n`.
    #[serde(rename = "message")]
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Appends a continuation line to the body, newline-separated.
    pub fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}

/// Serde adapter writing timestamps as `YYYY-MM-DDTHH:MM:SS`.
pub mod iso_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Format string shared by every timestamp in the report.
    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Formats a timestamp the way the report does.
    pub fn format(ts: &NaiveDateTime) -> String {
        ts.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
