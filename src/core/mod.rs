//! Feature extraction, aggregation, filtering and exports.
//!
//! This module contains:
//! - [`features`] - Per-message category, length, emojis and time buckets
//! - [`aggregate`] - Summary tables over a whole corpus
//! - [`filter`] - Corpus filtering by date and speaker
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::core::{AggregateTables, Category, FilterConfig, apply_filters};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let corpus = TranscriptParser::new().parse_str(
//!     "1/2/24, 9:05 AM - Alice: https://example.com\n1/2/24, 9:06 AM - Bob: nice",
//! )?;
//! let corpus = apply_filters(&corpus, &FilterConfig::new().with_speaker("alice"));
//! let tables = AggregateTables::build(&corpus, &AnalyzerConfig::default());
//!
//! assert_eq!(tables.category_by_user.get(&"Alice".to_string(), &Category::Link), 1);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod features;
pub mod filter;
pub mod output;

pub use aggregate::{
    AggregateTables, CrossTab, EmojiTable, LengthSummary, WordCorpus, count_by_user,
};
pub use features::{Category, FeatureRow, Month, classify, extract_emojis};
pub use filter::{FilterConfig, apply_filters};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{emoji_table_to_csv, to_csv, write_csv, write_emoji_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
