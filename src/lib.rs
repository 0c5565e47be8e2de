//! # Chatlens
//!
//! A Rust library for parsing exported chat transcripts and deriving
//! who-talks-when statistics from them.
//!
//! ## Overview
//!
//! A transcript is plain text where every message starts on a line like
//! `1/2/24, 9:05 AM - Alice: hello`. Chatlens turns that text into an ordered
//! [`Corpus`](corpus::Corpus) of [`Message`]s, derives per-message features
//! (category, length, emojis, time buckets) and builds summary tables:
//!
//! - messages per speaker
//! - message types (text, media, links, deleted, missed calls) per speaker
//! - hourly activity, monthly activity and a day x hour heatmap
//! - message length distributions
//! - emoji usage per speaker
//! - a cleaned word corpus
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let corpus = TranscriptParser::new().parse_str(
//!         "1/2/24, 9:05 AM - Alice: hello there\n\
//!          1/2/24, 9:06 AM - <Media omitted>\n\
//!          1/2/24, 9:07 AM - Bob: check http://x.com",
//!     )?;
//!
//!     let analysis = Analysis::new(corpus, AnalyzerConfig::default());
//!     assert_eq!(analysis.tables.count_by_user["Alice"], 1);
//!     assert_eq!(analysis.tables.count_by_user["System"], 1);
//!     Ok(())
//! }
//! ```
//!
//! For a file on disk, [`analyze`](parser::analyze) does parse and
//! aggregation in one call and either returns everything or an error.
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), [`analyze`](parser::analyze), [`Analysis`](parser::Analysis)
//! - [`parsing`] - Tokenizer and normalizer stages
//! - [`corpus`] - [`Corpus`](corpus::Corpus), the ordered message collection
//! - [`core`] - Features, aggregates, filters and export writers
//!   - [`core::features`] - [`Category`](core::Category), [`FeatureRow`](core::FeatureRow)
//!   - [`core::aggregate`] - [`AggregateTables`](core::AggregateTables) and friends
//!   - [`core::filter`] - [`FilterConfig`](core::FilterConfig), [`apply_filters`](core::apply_filters)
//!   - [`core::output`] - CSV, JSON and JSONL writers
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig), [`OutputConfig`](config::OutputConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::Message;
    pub use crate::corpus::Corpus;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing and analysis
    pub use crate::parser::{Analysis, TranscriptParser, analyze};

    // Configuration
    pub use crate::config::{AnalyzerConfig, OutputConfig};

    // Features and tables
    pub use crate::core::aggregate::AggregateTables;
    pub use crate::core::features::{Category, FeatureRow, Month};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
