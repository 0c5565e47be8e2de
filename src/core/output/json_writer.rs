//! JSON report writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::config::OutputConfig;
use crate::core::aggregate::AggregateTables;
use crate::core::output::MessageRecord;
use crate::error::Result;
use crate::parser::Analysis;

/// The whole analysis as one document.
#[derive(Serialize)]
struct Report<'a> {
    messages: Vec<MessageRecord<'a>>,
    tables: &'a AggregateTables,
}

impl<'a> Report<'a> {
    fn new(analysis: &'a Analysis, config: &OutputConfig) -> Self {
        Self {
            messages: analysis
                .corpus
                .iter()
                .map(|m| MessageRecord::new(m, config, &analysis.config))
                .collect(),
            tables: &analysis.tables,
        }
    }
}

/// Writes the full report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "messages": [{"user": "Alice", "message": "Hello", "time": "09:05:00 AM", ...}],
///   "tables": {"speakers": ["Alice"], "count_by_user": {"Alice": 1}, ...}
/// }
/// ```
///
/// Cross-tabs serialize as `{"rows": [..], "columns": [..], "counts": [[..]]}`.
pub fn write_json(analysis: &Analysis, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(analysis, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the full report to a pretty-printed JSON string.
pub fn to_json(analysis: &Analysis, config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::new(analysis, config))?)
}
