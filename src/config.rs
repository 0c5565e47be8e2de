//! Configuration types for analysis and output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_media_placeholder("<Медиа отсутствуют>")
//!     .with_stop_word("lol");
//!
//! assert!(config.is_stop_word("lol"));
//! assert!(config.is_stop_word("media"));
//! ```

use serde::{Deserialize, Serialize};

/// Body text WhatsApp writes in place of an attachment in exports without media.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Speaker name assigned to lines without a `name:` delimiter.
pub const DEFAULT_SYSTEM_SPEAKER: &str = "System";

/// Tokens dropped from the word corpus regardless of frequency.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "media", "omitted", "message", "deleted", "http", "https", "www", "com",
];

/// Configuration for feature extraction and aggregation.
///
/// The defaults reproduce the stock behavior exactly; changing them produces
/// output that is no longer comparable across runs with different settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Exact body that marks a media message (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Speaker used for lines without a `name:` prefix (default: `System`)
    pub system_speaker: String,

    /// Words excluded from the word corpus (default: [`DEFAULT_STOP_WORDS`])
    pub stop_words: Vec<String>,

    /// Tokens must be strictly longer than this many characters (default: 2)
    pub min_token_len: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            system_speaker: DEFAULT_SYSTEM_SPEAKER.to_string(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            min_token_len: 2,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the speaker name used for system lines.
    #[must_use]
    pub fn with_system_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.system_speaker = speaker.into();
        self
    }

    /// Adds one stop word (stored lowercased).
    #[must_use]
    pub fn with_stop_word(mut self, word: impl Into<String>) -> Self {
        let word = word.into().to_lowercase();
        if !self.stop_words.contains(&word) {
            self.stop_words.push(word);
        }
        self
    }

    /// Sets the token length threshold.
    #[must_use]
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Returns `true` if `word` (already lowercased) is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }
}

/// Configuration for message exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Add category and length columns to message exports
    pub include_features: bool,
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the category and length columns.
    #[must_use]
    pub fn with_features(mut self) -> Self {
        self.include_features = true;
        self
    }
}
