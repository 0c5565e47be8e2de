//! Errors for the whole pipeline.
//!
//! Every failure is fatal for the run: the caller either gets a complete
//! [`Corpus`](crate::corpus::Corpus) or one [`ChatlensError`], whose
//! `Display` output can be shown to a user as-is.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// `Result` with [`ChatlensError`] as the error.
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// Anything that can stop an analysis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// Reading the transcript or writing an export failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The text is not a transcript, or one of its timestamps is invalid.
    #[error("Failed to parse transcript{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        #[source]
        source: ParseErrorKind,
        /// Set by [`TranscriptParser::parse`](crate::parser::TranscriptParser::parse)
        path: Option<PathBuf>,
    },

    /// A `--after`/`--before` date is not `YYYY-MM-DD`.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        input: String,
        expected: &'static str,
    },

    /// The transcript, or a rendered export, is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        context: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Unrecognized export extension, or a writer compiled out by features.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        format: &'static str,
        message: String,
    },

    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of transcript parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// No line in the input starts with a message timestamp.
    #[error("no messages found: unrecognized transcript format")]
    NoMessagesFound,

    /// A segment's timestamp did not match `M/D/YY, H:MM AM|PM`.
    #[error("unparsable timestamp '{0}'")]
    BadTimestamp(String),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

impl ChatlensError {
    /// Creates a parse error for an input without any message boundary.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatlensError::Parse {
            source: ParseErrorKind::NoMessagesFound,
            path,
        }
    }

    /// Creates a parse error for a timestamp outside the fixed grammar.
    pub fn bad_timestamp(text: impl Into<String>) -> Self {
        ChatlensError::Parse {
            source: ParseErrorKind::BadTimestamp(text.into()),
            path: None,
        }
    }

    /// Creates a filter date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an export format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format: "output",
            message: message.into(),
        }
    }

    /// Attaches the input path to a parse error. Other variants pass through.
    #[must_use]
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            ChatlensError::Parse { source, .. } => ChatlensError::Parse {
                source,
                path: Some(new_path.into()),
            },
            other => other,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if the input contained no recognizable message.
    pub fn is_no_messages(&self) -> bool {
        matches!(
            self,
            ChatlensError::Parse {
                source: ParseErrorKind::NoMessagesFound,
                ..
            }
        )
    }

    /// Returns `true` if a timestamp failed to parse.
    pub fn is_bad_timestamp(&self) -> bool {
        matches!(
            self,
            ChatlensError::Parse {
                source: ParseErrorKind::BadTimestamp(_),
                ..
            }
        )
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}
