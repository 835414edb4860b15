//! The typed form of one transcript message line.
//!
//! [`ParsedMessage`] is produced by [`parse_line`](crate::parser::parse_line)
//! for every line that matches the message grammar and is consumed right away
//! by the [`Aggregator`](crate::aggregator::Aggregator).
//!
//! # Example
//!
//! ```
//! use chatstats::ParsedMessage;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .and_then(|d| d.and_hms_opt(9, 0, 0))
//!     .unwrap();
//! let msg = ParsedMessage::new(ts, "Alice", "hello there");
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.body(), "hello there");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single chat message recovered from a transcript line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Minute-precision send time, local to the export |
/// | `author` | `String` | Display name, never empty |
/// | `body` | `String` | Text after the first `": "` |
///
/// Transcripts carry no time zone, so timestamps stay naive. Gaps between two
/// messages are plain wall-clock differences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub author: String,

    /// Text content of the message line.
    ///
    /// Continuation lines of multi-line messages are not part of the body;
    /// they never match the grammar and are skipped.
    pub body: String,
}

impl ParsedMessage {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author's display name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Seconds elapsed since `earlier`. Negative when `earlier` is later.
    pub fn seconds_since(&self, earlier: NaiveDateTime) -> i64 {
        (self.timestamp - earlier).num_seconds()
    }
}
