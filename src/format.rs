//! Export format selection and dispatch.
//!
//! Kept separate from [`cli`](crate::cli) so library users can pick a format
//! without pulling in clap.
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::config::{AnalyzerConfig, OutputConfig};
//! use chatlens::format::{OutputFormat, write_to_format};
//! use chatlens::parser::analyze;
//!
//! let analysis = analyze("chat.txt", &AnalyzerConfig::default())?;
//! let format = OutputFormat::from_path("report.json")?;
//! write_to_format(&analysis, "report.json", format, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;
use crate::error::ChatlensError;
use crate::parser::Analysis;

/// Where an [`Analysis`] can be exported.
///
/// | Variant | Contents | Needs feature |
/// |---------|----------|---------------|
/// | `Csv` | messages table, `;`-delimited | `csv-output` |
/// | `Json` | messages plus every aggregate table | `json-output` |
/// | `Jsonl` | one message object per line (NDJSON) | `json-output` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Jsonl,
}

impl OutputFormat {
    /// Canonical file extension, without the dot.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Every accepted name, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Every format, in the order they are documented.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Picks the format from a path's extension (case-insensitive).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("report.xlsx").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit_once('.').map_or("", |(_, ext)| ext);
        Self::from_name(ext).ok_or_else(|| {
            ChatlensError::invalid_format(format!(
                "can't tell the format of '{path}' from its extension (expected one of: {})",
                Self::all_names().join(", ")
            ))
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }

    fn feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Jsonl => "JSONL",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!(
                "unknown format '{s}' (expected one of: {})",
                Self::all_names().join(", ")
            )
        })
    }
}

/// Writes `analysis` to `path` as `format`.
///
/// # Errors
///
/// Fails when the writer for `format` was compiled out, or on any IO or
/// encoding error while writing.
#[allow(unused_variables)]
pub fn write_to_format(
    analysis: &Analysis,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(analysis, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(analysis, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(analysis, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders `analysis` as `format` in memory; same bytes [`write_to_format`] writes.
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn main() -> chatlens::Result<()> {
/// use chatlens::config::{AnalyzerConfig, OutputConfig};
/// use chatlens::format::{OutputFormat, to_format_string};
/// use chatlens::parser::{Analysis, TranscriptParser};
///
/// let corpus = TranscriptParser::new().parse_str("1/2/24, 9:05 AM - Alice: Hello!")?;
/// let analysis = Analysis::new(corpus, AnalyzerConfig::default());
///
/// let csv = to_format_string(&analysis, OutputFormat::Csv, &OutputConfig::new())?;
/// assert!(csv.starts_with("User;Message;Time;Date"));
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "csv-output"))]
/// # fn main() {}
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    analysis: &Analysis,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(analysis, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(analysis, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(analysis, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(format!(
        "{format} export needs the '{}' feature",
        format.feature()
    ))
}
