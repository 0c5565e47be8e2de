//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::aggregate::{DAYS, HOURS};
use chatlens::core::features::{Category, WEEKDAY_NAMES};
use chatlens::core::output::write_emoji_csv;
use chatlens::format::write_to_format;
use chatlens::parser::{Analysis, analyze};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CHATLENS_LOG";

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chatlens=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let filter_config = args.filter_config()?;

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {output} ({})", args.resolved_format());
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {from}");
    }
    println!();

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let mut analysis = analyze(&args.input, &args.analyzer_config())?;
    let original_count = analysis.corpus.len();
    println!(
        "   Found {} messages from {} speakers ({:.2}s)",
        original_count,
        analysis.tables.speakers.len(),
        parse_start.elapsed().as_secs_f64()
    );

    if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        analysis = analysis.filtered(&filter_config);
        println!("   {} messages after filtering", analysis.corpus.len());
    }

    println!();
    print_summary(&analysis, args.top);

    if let Some(ref output) = args.output {
        let format = args.resolved_format();
        println!("💾 Writing {format}...");
        write_to_format(&analysis, output, format, &args.output_config())?;
        println!("   Saved to {output}");
    }
    if let Some(ref path) = args.emoji_table {
        println!("💾 Writing emoji table...");
        write_emoji_csv(&analysis.tables, path)?;
        println!("   Saved to {path}");
    }

    println!();
    println!(
        "✅ Done in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_summary(analysis: &Analysis, top: usize) {
    let tables = &analysis.tables;
    let total = analysis.corpus.len();

    if total == 0 {
        println!("📭 No messages to summarize");
        println!();
        return;
    }

    println!("👥 Messages per user:");
    for speaker in &tables.speakers {
        let count = tables.count_by_user.get(speaker).copied().unwrap_or(0);
        println!(
            "   {speaker:<20} {count:>6} ({:.1}%)",
            count as f64 * 100.0 / total as f64
        );
    }
    println!();

    println!("🏷️  Message types:");
    for speaker in &tables.speakers {
        let parts: Vec<String> = Category::all()
            .iter()
            .filter_map(|category| {
                let n = tables.category_by_user.get(speaker, category);
                (n > 0).then(|| format!("{category} {n}"))
            })
            .collect();
        println!("   {speaker:<20} {}", parts.join(", "));
    }
    println!();

    println!("🕐 Busiest hour:");
    for speaker in &tables.speakers {
        if let Some(hours) = tables.hourly_series.get(speaker) {
            let (hour, count) = busiest(hours.iter().copied());
            println!("   {speaker:<20} {hour:02}:00 ({count} messages)");
        }
    }
    println!();

    println!("📅 Messages per month:");
    for month in tables.month_by_user.rows() {
        println!(
            "   {:<20} {:>6}",
            month.to_string(),
            tables.month_by_user.row_total(month)
        );
    }
    println!();

    let heatmap = tables.heatmap();
    let (slot, count) = busiest(heatmap.iter().flatten().copied());
    println!(
        "🔥 Busiest slot: {} {:02}:00 ({} messages)",
        WEEKDAY_NAMES[(slot / HOURS) % DAYS],
        slot % HOURS,
        count
    );
    println!();

    println!("📏 Message length (chars):");
    for (speaker, summary) in tables.length_summaries() {
        println!(
            "   {speaker:<20} median {:.1}, mean {:.1}, max {}",
            summary.median, summary.mean, summary.max
        );
    }
    println!();

    let emojis = tables.emoji_table.top(top);
    if !emojis.is_empty() {
        println!("😀 Top emojis:");
        for (emoji, count) in emojis {
            println!("   {emoji}  x{count}");
        }
        println!();
    }

    let words = tables.word_corpus.top(top);
    if !words.is_empty() {
        println!("💬 Top words:");
        for (word, count) in words {
            println!("   {word:<20} {count:>6}");
        }
        println!();
    }
}

/// Index and value of the largest count; the earliest index wins ties.
fn busiest(counts: impl Iterator<Item = usize>) -> (usize, usize) {
    counts
        .enumerate()
        .fold((0, 0), |best, (i, n)| if n > best.1 { (i, n) } else { best })
}
