//! Export writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - messages table with semicolon delimiter - requires `csv-output` feature
//! - [`write_emoji_csv`] / [`emoji_table_to_csv`] - emoji table, one column per speaker - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - full report with messages and tables - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one message per line - requires `json-output` feature
//!
//! Every writer takes a finished [`Analysis`](crate::parser::Analysis), so
//! exports always agree with the printed summary.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::{AnalyzerConfig, OutputConfig};
//! use chatlens::core::output::{to_csv, write_json};
//! use chatlens::parser::analyze;
//!
//! let analysis = analyze("chat.txt", &AnalyzerConfig::default())?;
//!
//! write_json(&analysis, "report.json", &OutputConfig::new())?;
//! let csv_string = to_csv(&analysis, &OutputConfig::new().with_features())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{emoji_table_to_csv, to_csv, write_csv, write_emoji_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::Message;
use crate::config::{AnalyzerConfig, OutputConfig};
use crate::core::features::{Category, FeatureRow};

/// One row of the messages table, shared by every writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord<'a> {
    pub user: &'a str,
    pub message: &'a str,
    /// `HH:MM:SS AM/PM`
    pub time: String,
    /// `Month DD, YYYY`
    pub date: String,
    pub timestamp: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl<'a> MessageRecord<'a> {
    /// Builds the row for `msg`, with feature columns when enabled.
    pub fn new(msg: &'a Message, output: &OutputConfig, analyzer: &AnalyzerConfig) -> Self {
        let (category, length) = if output.include_features {
            let row = FeatureRow::from_message(msg, analyzer);
            (Some(row.category), Some(row.length))
        } else {
            (None, None)
        };

        Self {
            user: &msg.speaker,
            message: &msg.body,
            time: msg.formatted_time(),
            date: msg.formatted_date(),
            timestamp: msg.timestamp,
            category,
            length,
        }
    }
}
