//! Benchmarks for chatlens parsing, aggregation and export.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- tokenize`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::config::{AnalyzerConfig, OutputConfig};
use chatlens::core::aggregate::{AggregateTables, emoji_table, featured, word_corpus};
use chatlens::core::features::FeatureRow;
use chatlens::core::filter::{FilterConfig, apply_filters};
use chatlens::core::output::{to_csv, to_json};
use chatlens::corpus::Corpus;
use chatlens::parser::{Analysis, TranscriptParser};
use chatlens::parsing::tokenize;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let bodies = [
        "hello there, dinner tonight?",
        "<Media omitted>",
        "look https://example.com 😂",
        "This message was deleted",
        "Missed voice call",
        "sounds great 👍🏽🎉\nsee you at 10:30",
    ];
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let speaker = if i % 2 == 0 { "Alice" } else { "Bob" };
        let month = (i / 600) % 12 + 1;
        let day = (i / 24) % 28 + 1;
        let hour = i % 12 + 1;
        let meridiem = if (i / 12) % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "{}/{}/24, {}:{:02} {} - {}: {}",
            month,
            day,
            hour,
            i % 60,
            meridiem,
            speaker,
            bodies[i % bodies.len()]
        ));
    }
    lines.join("\n")
}

fn generate_corpus(count: usize) -> Corpus {
    TranscriptParser::new()
        .parse_str(&generate_transcript(count))
        .unwrap()
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let segments = tokenize(black_box(text)).unwrap();
                black_box(segments.len())
            });
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = TranscriptParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let corpus = parser.parse_str(black_box(text)).unwrap();
                black_box(corpus)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Feature and Aggregation Benchmarks
// =============================================================================

fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("features");
    let config = AnalyzerConfig::default();

    for size in [1_000_usize, 10_000] {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let rows: Vec<FeatureRow> = corpus
                    .iter()
                    .map(|m| FeatureRow::from_message(black_box(m), &config))
                    .collect();
                black_box(rows)
            });
        });
    }
    group.finish();
}

fn bench_emoji_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_table");
    let config = AnalyzerConfig::default();

    for size in [1_000_usize, 10_000] {
        let corpus = generate_corpus(size);
        let rows = featured(&corpus, &config);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| black_box(emoji_table(black_box(rows))));
        });
    }
    group.finish();
}

fn bench_word_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_corpus");
    let config = AnalyzerConfig::default();

    for size in [1_000_usize, 10_000] {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| black_box(word_corpus(black_box(corpus), &config)));
        });
    }
    group.finish();
}

fn bench_aggregate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_all");
    let config = AnalyzerConfig::default();

    for size in [1_000_usize, 10_000, 50_000] {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| black_box(AggregateTables::build(black_box(corpus), &config)));
        });
    }
    group.finish();
}

fn bench_filter_by_speaker(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_speaker");
    let config = FilterConfig::new().with_speaker("alice");

    for size in [1_000_usize, 10_000, 100_000] {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| black_box(apply_filters(black_box(corpus), &config)));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::new().with_features();

    for size in [1_000_usize, 10_000] {
        let analysis = Analysis::new(generate_corpus(size), AnalyzerConfig::default());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &analysis, |b, analysis| {
            b.iter(|| black_box(to_csv(black_box(analysis), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("json", size), &analysis, |b, analysis| {
            b.iter(|| black_box(to_json(black_box(analysis), &config).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = TranscriptParser::new();

    for size in [1_000_usize, 10_000] {
        let text = generate_transcript(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                // parse -> aggregate -> CSV
                let corpus = parser.parse_str(black_box(text)).unwrap();
                let analysis = Analysis::new(corpus, AnalyzerConfig::default());
                black_box(to_csv(&analysis, &OutputConfig::new()).unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_features,
    bench_emoji_table,
    bench_word_corpus,
    bench_aggregate_all,
    bench_filter_by_speaker,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
