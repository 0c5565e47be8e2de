//! The normalized transcript record.
//!
//! Every line group recognized by the tokenizer becomes one [`Message`]:
//! a parsed timestamp, a trimmed speaker and a trimmed body.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 2)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "hello there");
//!
//! assert_eq!(msg.formatted_time(), "09:05:00 PM");
//! assert_eq!(msg.formatted_date(), "January 02, 2024");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display pattern for the time column of a messages table.
pub const TIME_DISPLAY_FORMAT: &str = "%I:%M:%S %p";

/// Display pattern for the date column of a messages table.
pub const DATE_DISPLAY_FORMAT: &str = "%B %d, %Y";

/// One message from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local time written in the export |
/// | `speaker` | `String` | Sender name, or the system speaker for notices |
/// | `body` | `String` | Trimmed message text, may span lines or be empty |
///
/// Timestamps carry no timezone: exports are written in the device's local
/// time and nothing in the file says which zone that was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Sender name.
    pub speaker: String,

    /// Message text.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        speaker: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            speaker: speaker.into(),
            body: body.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the speaker name.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Time of day as `HH:MM:SS AM/PM`.
    pub fn formatted_time(&self) -> String {
        self.timestamp.format(TIME_DISPLAY_FORMAT).to_string()
    }

    /// Calendar date as `Month DD, YYYY`.
    pub fn formatted_date(&self) -> String {
        self.timestamp.format(DATE_DISPLAY_FORMAT).to_string()
    }

    /// Returns `true` if the body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(ts(9, 5), "Alice", "Hello");
        assert_eq!(msg.speaker(), "Alice");
        assert_eq!(msg.body(), "Hello");
        assert_eq!(msg.timestamp(), ts(9, 5));
        assert!(!msg.is_empty());
    }

    #[test]
    fn test_formatted_time() {
        assert_eq!(Message::new(ts(0, 30), "A", "").formatted_time(), "12:30:00 AM");
        assert_eq!(Message::new(ts(12, 0), "A", "").formatted_time(), "12:00:00 PM");
        assert_eq!(Message::new(ts(23, 59), "A", "").formatted_time(), "11:59:00 PM");
    }

    #[test]
    fn test_formatted_date() {
        let msg = Message::new(ts(9, 5), "Alice", "Hello");
        assert_eq!(msg.formatted_date(), "June 15, 2024");
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(ts(9, 5), "Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""speaker":"Alice""#));
        assert!(json.contains("2024-06-15T09:05:00"));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
