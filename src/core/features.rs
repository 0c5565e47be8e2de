//! Per-message feature extraction.
//!
//! [`FeatureRow::from_message`] derives everything the aggregates need from a
//! single [`Message`]: its [`Category`], character length, emojis and time
//! buckets. Extraction never fails.
//!
//! # Example
//!
//! ```
//! use chatlens::Message;
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::core::features::{Category, FeatureRow, Month};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(21, 5, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "see www.example.org 🎉");
//! let row = FeatureRow::from_message(&msg, &AnalyzerConfig::default());
//!
//! assert_eq!(row.category, Category::Link);
//! assert_eq!(row.emojis, vec!["🎉"]);
//! assert_eq!((row.hour, row.day_of_week, row.month), (21, 0, Month::March));
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::Message;
use crate::config::AnalyzerConfig;

/// Day names indexed by `day_of_week` (Monday = 0).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Closed classification of a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Attachment left out of the export
    Media,
    /// Body mentions a URL
    Link,
    /// "Missed voice call" notice
    MissedCall,
    /// "This message was deleted" notice
    Deleted,
    /// Anything else with content
    Text,
    /// Empty body
    Empty,
}

impl Category {
    /// Returns all categories.
    pub fn all() -> &'static [Category] {
        &[
            Category::Media,
            Category::Link,
            Category::MissedCall,
            Category::Deleted,
            Category::Text,
            Category::Empty,
        ]
    }

    /// Human-readable label, as shown in legends.
    pub fn label(self) -> &'static str {
        match self {
            Category::Media => "Media",
            Category::Link => "Link",
            Category::MissedCall => "Missed Call",
            Category::Deleted => "Deleted",
            Category::Text => "Text",
            Category::Empty => "Empty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a body. Rules are checked in order and the first match wins,
/// so the media placeholder is never a link and a deleted notice is never text.
pub fn classify(body: &str, media_placeholder: &str) -> Category {
    let body = body.trim();
    if body.is_empty() {
        return Category::Empty;
    }
    if body == media_placeholder {
        return Category::Media;
    }

    let lower = body.to_lowercase();
    if lower.contains("http") || lower.contains("www.") {
        Category::Link
    } else if lower.contains("missed voice call") {
        Category::MissedCall
    } else if lower.contains("this message was deleted") {
        Category::Deleted
    } else {
        Category::Text
    }
}

/// Calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Returns all months, January first.
    pub fn all() -> &'static [Month] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }

    /// Month from its 1-based number.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::all().get(index).copied()
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// English month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    fn of(timestamp: NaiveDateTime) -> Self {
        Self::all()[timestamp.month0() as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if `grapheme` is an emoji.
///
/// Exports are inconsistent about variation selectors (`❤` vs `❤️`), so a
/// cluster also counts when adding or removing U+FE0F finds it in the table.
/// A skin tone modifier standing on its own is an emoji too.
pub fn is_emoji(grapheme: &str) -> bool {
    if emojis::get(grapheme).is_some() {
        return true;
    }

    let mut chars = grapheme.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if SKIN_TONES.contains(&c) {
            return true;
        }
    }

    let stripped: String = grapheme
        .chars()
        .filter(|c| !matches!(c, '\u{FE0E}' | '\u{FE0F}'))
        .collect();
    if stripped.is_empty() {
        return false;
    }
    if stripped != grapheme && emojis::get(&stripped).is_some() {
        return true;
    }
    stripped.chars().count() == 1 && emojis::get(&format!("{stripped}\u{FE0F}")).is_some()
}

/// Emojis in `body`, one entry per occurrence, in order.
///
/// Works on extended grapheme clusters, so `👨‍👩‍👧` or `👍🏽` count once.
pub fn extract_emojis(body: &str) -> Vec<String> {
    body.graphemes(true)
        .filter(|g| is_emoji(g))
        .map(str::to_string)
        .collect()
}

/// Fitzpatrick modifiers, U+1F3FB..=U+1F3FF.
const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// A message paired with its features.
pub type Featured<'a> = (&'a Message, FeatureRow);

/// Derived, read-only view of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    /// Body classification
    pub category: Category,
    /// Body length in characters, not bytes
    pub length: usize,
    /// Emojis in order of occurrence (a multiset)
    pub emojis: Vec<String>,
    /// Hour of day, 0..=23
    pub hour: u32,
    /// Day of week, Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
    /// Calendar month
    pub month: Month,
}

impl FeatureRow {
    /// Extracts the features of one message.
    pub fn from_message(msg: &Message, config: &AnalyzerConfig) -> Self {
        Self {
            category: classify(&msg.body, &config.media_placeholder),
            length: msg.body.chars().count(),
            emojis: extract_emojis(&msg.body),
            hour: msg.timestamp.hour(),
            day_of_week: msg.timestamp.weekday().num_days_from_monday(),
            month: Month::of(msg.timestamp),
        }
    }

    /// Name of the day of week.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.day_of_week as usize]
    }
}
