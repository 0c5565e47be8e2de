//! Summary tables derived from a [`Corpus`].
//!
//! Every table is a pure function of the corpus. Per-message tables read the
//! [`FeatureRow`]s produced by [`featured`], never the raw bodies, so a
//! table always agrees with the feature stage. Nothing here mutates its input
//! or another table; [`AggregateTables::build`] extracts features once and
//! calls each builder once.
//!
//! | Table | Builder | Typical rendering |
//! |-------|---------|-------------------|
//! | [`CountByUser`] | [`count_by_user`] | pie |
//! | speaker x [`Category`] | [`category_by_user`] | stacked bar |
//! | [`HourlySeries`] | [`hourly_series`] | multi-line |
//! | [`Month`] x speaker | [`month_by_user`] | grouped bar |
//! | day x hour | [`day_by_hour`] | heatmap |
//! | [`LengthDistribution`] | [`length_distribution`] | box plot |
//! | [`EmojiTable`] | [`emoji_table`] | table |
//! | [`WordCorpus`] | [`word_corpus`] | word cloud |

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::core::features::{Category, FeatureRow, Featured, Month};
use crate::corpus::Corpus;

/// Hours in a day; length of every [`HourlySeries`] entry.
pub const HOURS: usize = 24;

/// Days in a week; rows of a [`Heatmap`].
pub const DAYS: usize = 7;

/// Speaker -> message count.
pub type CountByUser = BTreeMap<String, usize>;

/// Speaker -> messages per hour of day, always 24 entries.
pub type HourlySeries = BTreeMap<String, [usize; HOURS]>;

/// Speaker -> message lengths in file order.
pub type LengthDistribution = BTreeMap<String, Vec<usize>>;

/// Dense day-of-week x hour counts (Monday first).
pub type Heatmap = [[usize; HOURS]; DAYS];

// ============================================================================
// CrossTab
// ============================================================================

/// Generic two-key count table.
///
/// Only observed pairs are stored; [`get`](Self::get) reads missing pairs as 0.
///
/// # Example
///
/// ```
/// use chatlens::core::aggregate::CrossTab;
///
/// let tab = CrossTab::from_pairs([("Alice", 9), ("Alice", 9), ("Bob", 21)]);
/// assert_eq!(tab.get(&"Alice", &9), 2);
/// assert_eq!(tab.get(&"Bob", &9), 0);
/// assert_eq!(tab.total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTab<A: Ord, B: Ord> {
    cells: BTreeMap<A, BTreeMap<B, usize>>,
}

impl<A: Ord, B: Ord> Default for CrossTab<A, B> {
    fn default() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }
}

impl<A: Ord, B: Ord> CrossTab<A, B> {
    /// Counts every `(a, b)` pair.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (A, B)>) -> Self {
        let mut tab = Self::default();
        for (a, b) in pairs {
            *tab.cells.entry(a).or_default().entry(b).or_insert(0) += 1;
        }
        tab
    }

    /// Count for one pair.
    pub fn get(&self, a: &A, b: &B) -> usize {
        self.cells
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// Observed counts for one row key.
    pub fn row(&self, a: &A) -> Option<&BTreeMap<B, usize>> {
        self.cells.get(a)
    }

    /// Row keys in order.
    pub fn rows(&self) -> impl Iterator<Item = &A> {
        self.cells.keys()
    }

    /// Column keys observed in any row, in order.
    pub fn columns(&self) -> Vec<&B> {
        let columns: BTreeSet<&B> = self.cells.values().flat_map(BTreeMap::keys).collect();
        columns.into_iter().collect()
    }

    /// Sum of one row.
    pub fn row_total(&self, a: &A) -> usize {
        self.cells.get(a).map_or(0, |row| row.values().sum())
    }

    /// Sum of one column.
    pub fn column_total(&self, b: &B) -> usize {
        self.cells.values().filter_map(|row| row.get(b)).sum()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.values().flat_map(BTreeMap::values).sum()
    }

    /// Returns `true` if no pair was counted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Dense labeled view with rows and columns in key order.
    pub fn to_matrix(&self) -> Matrix
    where
        A: Display,
        B: Display,
    {
        let columns = self.columns();
        Matrix {
            rows: self.rows().map(ToString::to_string).collect(),
            columns: columns.iter().map(ToString::to_string).collect(),
            counts: self
                .rows()
                .map(|a| columns.iter().map(|b| self.get(a, b)).collect())
                .collect(),
        }
    }
}

impl<A: Ord + Clone, B: Ord + Clone> CrossTab<A, B> {
    /// Swaps rows and columns.
    pub fn transpose(&self) -> CrossTab<B, A> {
        let mut tab = CrossTab::default();
        for (a, row) in &self.cells {
            for (b, count) in row {
                tab.cells
                    .entry(b.clone())
                    .or_default()
                    .insert(a.clone(), *count);
            }
        }
        tab
    }
}

impl<A: Ord + Display, B: Ord + Display> Serialize for CrossTab<A, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_matrix().serialize(serializer)
    }
}

/// Labeled dense matrix, the serialized form of a [`CrossTab`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    /// Row labels
    pub rows: Vec<String>,
    /// Column labels
    pub columns: Vec<String>,
    /// `counts[row][column]`
    pub counts: Vec<Vec<usize>>,
}

// ============================================================================
// Length summary
// ============================================================================

/// Five-number summary plus mean, for box-style rendering.
///
/// Quartiles interpolate linearly between closest ranks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthSummary {
    pub count: usize,
    pub min: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: usize,
    pub mean: f64,
}

impl LengthSummary {
    /// Summarizes `lengths`; `None` when empty.
    pub fn from_lengths(lengths: &[usize]) -> Option<Self> {
        let mut sorted = lengths.to_vec();
        sorted.sort_unstable();
        let (&min, &max) = (sorted.first()?, sorted.last()?);

        Some(Self {
            count: sorted.len(),
            min,
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q3: percentile(&sorted, 0.75),
            max,
            mean: sorted.iter().sum::<usize>() as f64 / sorted.len() as f64,
        })
    }
}

fn percentile(sorted: &[usize], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let (a, b) = (sorted[lo] as f64, sorted[hi] as f64);
    a + (b - a) * (pos - lo as f64)
}

// ============================================================================
// Emoji table
// ============================================================================

/// Emoji -> (speaker -> count), over emojis actually used.
///
/// Pairs that never occur are not stored and read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmojiTable {
    counts: BTreeMap<String, BTreeMap<String, usize>>,
}

/// One emoji with a count per requested speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiRow {
    pub emoji: String,
    pub counts: Vec<usize>,
}

impl EmojiTable {
    /// Count of `emoji` sent by `speaker`.
    pub fn get(&self, emoji: &str, speaker: &str) -> usize {
        self.counts
            .get(emoji)
            .and_then(|by_speaker| by_speaker.get(speaker))
            .copied()
            .unwrap_or(0)
    }

    /// Distinct emojis, in code point order.
    pub fn emojis(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Observed counts per speaker for one emoji.
    pub fn by_speaker(&self, emoji: &str) -> Option<&BTreeMap<String, usize>> {
        self.counts.get(emoji)
    }

    /// Total uses of `emoji` across speakers.
    pub fn total(&self, emoji: &str) -> usize {
        self.counts.get(emoji).map_or(0, |m| m.values().sum())
    }

    /// The `n` most used emojis, ties broken by code point order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut totals: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(emoji, m)| (emoji.as_str(), m.values().sum()))
            .collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        totals.truncate(n);
        totals
    }

    /// Dense rows with one count column per entry of `speakers`.
    pub fn rows(&self, speakers: &[&str]) -> Vec<EmojiRow> {
        self.counts
            .keys()
            .map(|emoji| EmojiRow {
                emoji: emoji.clone(),
                counts: speakers.iter().map(|s| self.get(emoji, s)).collect(),
            })
            .collect()
    }

    /// Number of distinct emojis.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no emoji was used.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// ============================================================================
// Word corpus
// ============================================================================

/// Cleaned token multiset over all message bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordCorpus {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl WordCorpus {
    /// Builds the corpus from already joined text.
    ///
    /// Lowercases, removes ASCII punctuation, splits on whitespace and drops
    /// stop words and tokens no longer than `config.min_token_len`.
    pub fn from_text(text: &str, config: &AnalyzerConfig) -> Self {
        let mut corpus = Self::default();
        for token in clean_tokens(text, config) {
            *corpus.counts.entry(token).or_insert(0) += 1;
            corpus.total += 1;
        }
        corpus
    }

    /// Occurrences of `token`.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Iterates over `(token, count)` in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// The `n` most frequent tokens, ties broken alphabetically.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut tokens: Vec<(&str, usize)> = self.iter().collect();
        tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tokens.truncate(n);
        tokens
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Total tokens kept, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if nothing survived cleaning.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Tokens of `text` that survive cleaning, in order.
pub fn clean_tokens(text: &str, config: &AnalyzerConfig) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > config.min_token_len && !config.is_stop_word(w))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Builders
// ============================================================================

/// Messages per speaker.
pub fn count_by_user(corpus: &Corpus) -> CountByUser {
    let mut counts = CountByUser::new();
    for msg in corpus {
        *counts.entry(msg.speaker.clone()).or_insert(0) += 1;
    }
    counts
}

/// Speaker x category.
pub fn category_by_user(rows: &[Featured<'_>]) -> CrossTab<String, Category> {
    CrossTab::from_pairs(rows.iter().map(|(msg, row)| (msg.speaker.clone(), row.category)))
}

/// Speaker x hour of day (sparse).
pub fn hour_by_user(rows: &[Featured<'_>]) -> CrossTab<String, u32> {
    CrossTab::from_pairs(rows.iter().map(|(msg, row)| (msg.speaker.clone(), row.hour)))
}

/// Month x speaker.
pub fn month_by_user(rows: &[Featured<'_>]) -> CrossTab<Month, String> {
    CrossTab::from_pairs(rows.iter().map(|(msg, row)| (row.month, msg.speaker.clone())))
}

/// Day of week (Monday = 0) x hour of day.
pub fn day_by_hour(rows: &[Featured<'_>]) -> CrossTab<u32, u32> {
    CrossTab::from_pairs(rows.iter().map(|(_, row)| (row.day_of_week, row.hour)))
}

/// Dense 24-hour series per speaker.
pub fn hourly_series(rows: &[Featured<'_>]) -> HourlySeries {
    let mut series = HourlySeries::new();
    for (msg, row) in rows {
        let hours = series.entry(msg.speaker.clone()).or_insert([0; HOURS]);
        hours[row.hour as usize] += 1;
    }
    series
}

/// Message lengths per speaker, in file order.
pub fn length_distribution(rows: &[Featured<'_>]) -> LengthDistribution {
    let mut lengths = LengthDistribution::new();
    for (msg, row) in rows {
        lengths.entry(msg.speaker.clone()).or_default().push(row.length);
    }
    lengths
}

/// Emoji usage per speaker.
pub fn emoji_table(rows: &[Featured<'_>]) -> EmojiTable {
    let mut table = EmojiTable::default();
    for (msg, row) in rows {
        for emoji in &row.emojis {
            *table
                .counts
                .entry(emoji.clone())
                .or_default()
                .entry(msg.speaker.clone())
                .or_insert(0) += 1;
        }
    }
    table
}

/// Word corpus over every body, joined with single spaces.
pub fn word_corpus(corpus: &Corpus, config: &AnalyzerConfig) -> WordCorpus {
    let joined = corpus
        .iter()
        .map(|msg| msg.body.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    WordCorpus::from_text(&joined, config)
}

/// Dense 7 x 24 view of a day x hour table. Out-of-range keys are ignored.
pub fn heatmap(day_by_hour: &CrossTab<u32, u32>) -> Heatmap {
    let mut grid = [[0; HOURS]; DAYS];
    for (day, row) in grid.iter_mut().enumerate() {
        for (hour, cell) in row.iter_mut().enumerate() {
            *cell = day_by_hour.get(&(day as u32), &(hour as u32));
        }
    }
    grid
}

/// Every table for one corpus.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateTables {
    /// Speakers in order of first appearance
    pub speakers: Vec<String>,
    pub count_by_user: CountByUser,
    pub category_by_user: CrossTab<String, Category>,
    pub hour_by_user: CrossTab<String, u32>,
    pub month_by_user: CrossTab<Month, String>,
    pub day_by_hour: CrossTab<u32, u32>,
    pub hourly_series: HourlySeries,
    pub length_distribution: LengthDistribution,
    pub emoji_table: EmojiTable,
    pub word_corpus: WordCorpus,
}

impl AggregateTables {
    /// Builds every table from `corpus`. Features are extracted once and
    /// every per-message table reads them.
    pub fn build(corpus: &Corpus, config: &AnalyzerConfig) -> Self {
        let rows = featured(corpus, config);
        let tables = Self {
            speakers: corpus.speakers().into_iter().map(str::to_string).collect(),
            count_by_user: count_by_user(corpus),
            category_by_user: category_by_user(&rows),
            hour_by_user: hour_by_user(&rows),
            month_by_user: month_by_user(&rows),
            day_by_hour: day_by_hour(&rows),
            hourly_series: hourly_series(&rows),
            length_distribution: length_distribution(&rows),
            emoji_table: emoji_table(&rows),
            word_corpus: word_corpus(corpus, config),
        };
        debug!(
            speakers = tables.speakers.len(),
            emojis = tables.emoji_table.len(),
            words = tables.word_corpus.len(),
            "built aggregate tables"
        );
        tables
    }

    /// Dense day x hour grid.
    pub fn heatmap(&self) -> Heatmap {
        heatmap(&self.day_by_hour)
    }

    /// Length summary per speaker, in first-appearance order.
    pub fn length_summaries(&self) -> Vec<(&str, LengthSummary)> {
        self.speakers
            .iter()
            .filter_map(|s| {
                let lengths = self.length_distribution.get(s)?;
                LengthSummary::from_lengths(lengths).map(|summary| (s.as_str(), summary))
            })
            .collect()
    }

    /// Speakers borrowed as `&str`, for [`EmojiTable::rows`].
    pub fn speaker_refs(&self) -> Vec<&str> {
        self.speakers.iter().map(String::as_str).collect()
    }
}

/// Every message paired with its features; input of the per-message builders.
pub fn featured<'a>(corpus: &'a Corpus, config: &'a AnalyzerConfig) -> Vec<Featured<'a>> {
    corpus.features(config).collect()
}

/// Features of every message, for callers that want per-row data.
pub fn feature_rows(corpus: &Corpus, config: &AnalyzerConfig) -> Vec<FeatureRow> {
    corpus.features(config).map(|(_, row)| row).collect()
}
