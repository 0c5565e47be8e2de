//! The ordered, immutable collection of messages from one transcript.

use serde::Serialize;

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::core::features::FeatureRow;

/// Messages of one transcript in file order.
///
/// A corpus is built once per analysis and never modified; filtering
/// produces a new corpus.
///
/// # Example
///
/// ```rust
/// use chatlens::parser::TranscriptParser;
///
/// let corpus = TranscriptParser::new()
///     .parse_str("1/2/24, 9:05 AM - Alice: hi\n1/2/24, 9:06 AM - Bob: hey")?;
///
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.speakers(), vec!["Alice", "Bob"]);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    messages: Vec<Message>,
}

impl Corpus {
    /// Wraps already-normalized messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Returns the messages in file order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterates over the messages in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Distinct speakers in order of first appearance.
    pub fn speakers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for msg in &self.messages {
            if !seen.contains(&msg.speaker.as_str()) {
                seen.push(&msg.speaker);
            }
        }
        seen
    }

    /// Computes the feature row of every message, paired with the message.
    pub fn features<'a>(
        &'a self,
        config: &'a AnalyzerConfig,
    ) -> impl Iterator<Item = (&'a Message, FeatureRow)> + 'a {
        self.messages
            .iter()
            .map(move |msg| (msg, FeatureRow::from_message(msg, config)))
    }

    /// Consumes the corpus, returning its messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl FromIterator<Message> for Corpus {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
