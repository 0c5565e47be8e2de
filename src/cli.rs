//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Export format options
//!
//! `Args` converts itself into the library's plain config types, so the
//! binary never builds them by hand:
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--from", "alice", "--features"]);
//! let filter = args.filter_config().unwrap();
//!
//! assert!(filter.is_active());
//! assert!(args.output_config().include_features);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, OutputConfig};
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Parse an exported chat transcript and summarize who talks, when, how
/// much and with which emojis.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -o messages.csv --features
    chatlens chat.txt -o report.json --after 2024-01-01
    chatlens chat.txt --from Alice --top 20
    chatlens chat.txt --emoji-table emojis.csv")]
pub struct Args {
    /// Path to the exported transcript (.txt)
    pub input: String,

    /// Write the messages table (or JSON report) to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export format (default: from the output extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from one speaker only (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Add category and length columns to exported messages
    #[arg(long)]
    pub features: bool,

    /// Write the emoji table (CSV) to this file
    #[arg(long, value_name = "PATH")]
    pub emoji_table: Option<String>,

    /// How many emojis and words to list in the summary
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Body text that marks an omitted attachment
    #[arg(long, value_name = "TEXT")]
    pub media_placeholder: Option<String>,

    /// Show debug logs (overrides CHATLENS_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Analyzer settings from the flags.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        match self.media_placeholder {
            Some(ref placeholder) => AnalyzerConfig::new().with_media_placeholder(placeholder),
            None => AnalyzerConfig::new(),
        }
    }

    /// Filters from `--after`, `--before` and `--from`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate`](crate::ChatlensError::InvalidDate) for a
    /// malformed date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_speaker(from.clone());
        }
        Ok(filter)
    }

    /// Export settings from the flags.
    pub fn output_config(&self) -> OutputConfig {
        if self.features {
            OutputConfig::new().with_features()
        } else {
            OutputConfig::new()
        }
    }

    /// Format for `--output`: the explicit flag, else the file extension,
    /// else CSV.
    pub fn resolved_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        self.output
            .as_deref()
            .and_then(|path| crate::format::OutputFormat::from_path(path).ok())
            .unwrap_or_default()
    }
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Messages table with semicolon delimiter (default)
    #[default]
    Csv,

    /// Full report: messages plus every aggregate table
    Json,

    /// One message per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
