//! JSON Lines (JSONL) output writer.
//!
//! One message object per line, for tools that ingest records one at a time.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::OutputConfig;
use crate::core::output::MessageRecord;
use crate::error::Result;
use crate::parser::Analysis;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"user":"Alice","message":"Hello","time":"09:05:00 AM","date":"January 02, 2024","timestamp":"2024-01-02T09:05:00"}
/// ```
pub fn write_jsonl(analysis: &Analysis, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(analysis, config, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(analysis: &Analysis, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(analysis, config, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_lines<W: Write>(analysis: &Analysis, config: &OutputConfig, out: &mut W) -> Result<()> {
    for msg in &analysis.corpus {
        let record = MessageRecord::new(msg, config, &analysis.config);
        let line = serde_json::to_string(&record)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
