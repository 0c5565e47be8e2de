//! Filter a corpus by date range and speaker.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing a [`Corpus`] before aggregation.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Speaker | [`with_speaker`](FilterConfig::with_speaker) | Messages from one speaker |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let corpus = TranscriptParser::new().parse_str(
//!     "1/1/24, 9:00 AM - Alice: Old\n\
//!      6/15/24, 9:00 AM - Alice: New\n\
//!      6/15/24, 9:01 AM - Bob: Hi",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_speaker("alice");
//!
//! let filtered = apply_filters(&corpus, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.messages()[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive whole days in transcript-local time
//! - Speaker matching is case-insensitive
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Message;
use crate::corpus::Corpus;
use crate::error::{ChatlensError, Result};

/// Configuration for filtering messages by date and speaker.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Keep only messages on or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Keep only messages on or before this instant.
    pub before: Option<NaiveDateTime>,

    /// Keep only messages from this speaker (case-insensitive).
    pub speaker: Option<String>,
}

impl FilterConfig {
    /// Creates a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(parse_date(date_str)?.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the speaker filter.
    ///
    /// ```
    /// use chatlens::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_speaker("Alice");
    /// assert!(config.is_active());
    /// ```
    #[must_use]
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Sets the start instant directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end instant directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.speaker.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if let Some(ref speaker) = self.speaker {
            if msg.speaker.to_lowercase() != speaker.to_lowercase() {
                return false;
            }
        }
        if self.after.is_some_and(|after| msg.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| msg.timestamp > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Returns a new corpus with only the messages matching `config`, in order.
pub fn apply_filters(corpus: &Corpus, config: &FilterConfig) -> Corpus {
    if !config.is_active() {
        return corpus.clone();
    }
    corpus.iter().filter(|m| config.matches(m)).cloned().collect()
}
