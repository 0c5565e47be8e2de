//! Splits transcript text into timestamped segments.
//!
//! A segment starts at every line beginning with
//! `M/D/YY(YY), H:MM AM|PM - ` and runs up to the line break before the next
//! such line (or end of input). Bodies keep their embedded newlines.
//!
//! A body line that itself starts with the full boundary grammar is read as a
//! new message. Exports give no way to tell the two apart.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ChatlensError, Result};

/// Line-anchored message boundary.
///
/// Capture 1 is the timestamp text. Recent exports put U+202F (narrow
/// no-break space) where older ones have a plain space.
pub const BOUNDARY_PATTERN: &str =
    r"(?mi)^(\d{1,2}/\d{1,2}/\d{2,4},[ \x{202F}]\d{1,2}:\d{2}[ \x{202F}][ap]m) - ";

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BOUNDARY_PATTERN).expect("boundary pattern is valid"));

/// One `(timestamp, body)` unit, borrowed from the transcript text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// Text of the timestamp, e.g. `1/2/24, 9:05 AM`.
    pub timestamp_text: &'a str,
    /// Everything after the ` - ` separator, possibly spanning lines.
    pub body_text: &'a str,
}

/// Returns `true` if `line` starts with a message boundary.
pub fn is_boundary_line(line: &str) -> bool {
    BOUNDARY.find(line).is_some_and(|m| m.start() == 0)
}

/// Splits `text` into segments, in file order.
///
/// Text before the first boundary (an export preamble, a BOM) is ignored.
///
/// # Errors
///
/// Returns a [`NoMessagesFound`](crate::error::ParseErrorKind::NoMessagesFound)
/// parse error when no line matches the boundary grammar.
pub fn tokenize(text: &str) -> Result<Vec<RawSegment<'_>>> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let boundaries: Vec<_> = BOUNDARY.captures_iter(text).collect();

    let Some(first) = boundaries.first() else {
        return Err(ChatlensError::no_messages(None));
    };

    let preamble_end = first.get(0).map_or(0, |m| m.start());
    if !text[..preamble_end].trim().is_empty() {
        debug!(bytes = preamble_end, "ignoring text before first message");
    }

    let mut segments = Vec::with_capacity(boundaries.len());
    for (i, caps) in boundaries.iter().enumerate() {
        let (Some(whole), Some(stamp)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let body_end = boundaries
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());

        segments.push(RawSegment {
            timestamp_text: stamp.as_str(),
            body_text: strip_line_break(&text[whole.end()..body_end]),
        });
    }

    debug!(segments = segments.len(), "tokenized transcript");
    Ok(segments)
}

/// Drops the single line terminator that separates a body from the next boundary.
fn strip_line_break(body: &str) -> &str {
    let body = body.strip_suffix('\n').unwrap_or(body);
    body.strip_suffix('\r').unwrap_or(body)
}
