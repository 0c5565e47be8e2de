//! Transcript parsing and the one-call analysis pipeline.
//!
//! [`TranscriptParser`] runs tokenize -> normalize and returns a [`Corpus`].
//! [`analyze`] goes one step further and builds every aggregate table,
//! returning a complete [`Analysis`] or an error, never a partial result.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::{Analysis, TranscriptParser};
//! use chatlens::config::AnalyzerConfig;
//!
//! # fn main() -> chatlens::Result<()> {
//! let corpus = TranscriptParser::new().parse_str(
//!     "1/2/24, 9:05 AM - Alice: hello there\n\
//!      1/2/24, 9:06 AM - <Media omitted>\n\
//!      1/2/24, 9:07 AM - Bob: check http://x.com",
//! )?;
//!
//! let analysis = Analysis::new(corpus, AnalyzerConfig::default());
//! assert_eq!(analysis.tables.count_by_user["System"], 1);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::core::aggregate::AggregateTables;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::corpus::Corpus;
use crate::error::{ChatlensError, Result};
use crate::parsing::{normalize, tokenize};

/// Parser for exported chat transcripts.
///
/// Holds an [`AnalyzerConfig`] so the system speaker name is configurable;
/// everything else about the grammar is fixed.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: AnalyzerConfig,
}

impl TranscriptParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Parses a transcript file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Io`] if the file cannot be read
    /// - [`ChatlensError::Utf8`] if it is not valid UTF-8
    /// - [`ChatlensError::Parse`] (carrying `path`) for grammar failures
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Corpus> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: format!("reading transcript {}", path.display()),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read transcript");

        self.parse_str(&content).map_err(|e| e.with_path(path))
    }

    /// Parses transcript text already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Parse`] if no message boundary is found or any
    /// timestamp is outside the grammar. The first bad timestamp aborts the
    /// whole parse.
    pub fn parse_str(&self, content: &str) -> Result<Corpus> {
        let segments = tokenize(content)?;
        let messages = segments
            .iter()
            .map(|segment| normalize(segment, &self.config.system_speaker))
            .collect::<Result<Vec<_>>>()?;
        debug!(messages = messages.len(), "normalized segments");
        Ok(Corpus::new(messages))
    }
}

/// A parsed corpus together with every aggregate table built from it.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Configuration the tables were built with.
    #[serde(skip)]
    pub config: AnalyzerConfig,
    pub corpus: Corpus,
    pub tables: AggregateTables,
}

impl Analysis {
    /// Builds all tables for `corpus`.
    pub fn new(corpus: Corpus, config: AnalyzerConfig) -> Self {
        let tables = AggregateTables::build(&corpus, &config);
        Self {
            config,
            corpus,
            tables,
        }
    }

    /// Re-runs aggregation over the messages matching `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &FilterConfig) -> Self {
        Self::new(apply_filters(&self.corpus, filter), self.config.clone())
    }
}

/// Parses `path` and builds every aggregate table.
///
/// # Errors
///
/// Same as [`TranscriptParser::parse`].
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::config::AnalyzerConfig;
/// use chatlens::parser::analyze;
///
/// let analysis = analyze("chat.txt", &AnalyzerConfig::default())?;
/// println!("{} messages", analysis.corpus.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn analyze(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<Analysis> {
    let corpus = TranscriptParser::with_config(config.clone()).parse(path.as_ref())?;
    let analysis = Analysis::new(corpus, config.clone());
    info!(
        messages = analysis.corpus.len(),
        speakers = analysis.tables.speakers.len(),
        "analysis complete"
    );
    Ok(analysis)
}
