//! Turns raw segments into typed [`Message`]s.

use chrono::NaiveDateTime;

use crate::Message;
use crate::error::{ChatlensError, Result};
use crate::parsing::tokenizer::RawSegment;

/// chrono pattern for segment timestamps (`1/2/24, 9:05 AM`).
///
/// `%y` only takes two digits, so a four-digit year is rejected.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y, %I:%M %p";

/// Parses a segment timestamp.
///
/// # Errors
///
/// Returns a [`BadTimestamp`](crate::error::ParseErrorKind::BadTimestamp)
/// parse error carrying the original text.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let normalized = text.replace('\u{202F}', " ");
    NaiveDateTime::parse_from_str(normalized.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| ChatlensError::bad_timestamp(text))
}

/// Splits a segment body at its first `:` into `(speaker, body)`, both trimmed.
///
/// Without a colon the whole body belongs to `system_speaker`. A system
/// notice that happens to contain a colon is attributed to whatever precedes
/// it; exports carry nothing else to go on.
pub fn split_speaker<'a>(body_text: &'a str, system_speaker: &'a str) -> (&'a str, &'a str) {
    match body_text.split_once(':') {
        Some((speaker, body)) => (speaker.trim(), body.trim()),
        None => (system_speaker, body_text.trim()),
    }
}

/// Normalizes one segment.
pub fn normalize(segment: &RawSegment<'_>, system_speaker: &str) -> Result<Message> {
    let timestamp = parse_timestamp(segment.timestamp_text)?;
    let (speaker, body) = split_speaker(segment.body_text, system_speaker);
    Ok(Message::new(timestamp, speaker, body))
}
