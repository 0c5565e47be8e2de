//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::config::OutputConfig;
use crate::core::aggregate::AggregateTables;
use crate::core::output::MessageRecord;
use crate::error::Result;
use crate::parser::Analysis;

/// Writes the messages table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `User`, `Message`, `Time`, `Date`
///   (+ `Category`, `Length` with [`OutputConfig::include_features`])
/// - Encoding: UTF-8
pub fn write_csv(analysis: &Analysis, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_messages(analysis, config, file)
}

/// Converts the messages table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(analysis: &Analysis, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_messages(analysis, config, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Writes the emoji table: one row per emoji, one column per speaker in
/// first-appearance order.
pub fn write_emoji_csv(tables: &AggregateTables, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_emojis(tables, file)
}

/// Converts the emoji table to a CSV string.
pub fn emoji_table_to_csv(tables: &AggregateTables) -> Result<String> {
    let mut buf = Vec::new();
    write_emojis(tables, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_messages<W: Write>(analysis: &Analysis, config: &OutputConfig, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in &analysis.corpus {
        let record = MessageRecord::new(msg, config, &analysis.config);
        writer.write_record(build_record(&record))?;
    }

    writer.flush()?;
    Ok(())
}

fn write_emojis<W: Write>(tables: &AggregateTables, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    let speakers = tables.speaker_refs();

    let mut header = vec!["Emoji"];
    header.extend(speakers.iter().copied());
    writer.write_record(&header)?;

    for row in tables.emoji_table.rows(&speakers) {
        let mut record = vec![row.emoji];
        record.extend(row.counts.iter().map(ToString::to_string));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["User", "Message", "Time", "Date"];
    if config.include_features {
        header.push("Category");
        header.push("Length");
    }
    header
}

fn build_record(record: &MessageRecord<'_>) -> Vec<String> {
    let mut fields = vec![
        record.user.to_string(),
        record.message.to_string(),
        record.time.clone(),
        record.date.clone(),
    ];
    if let Some(category) = record.category {
        fields.push(category.label().to_string());
    }
    if let Some(length) = record.length {
        fields.push(length.to_string());
    }
    fields
}
