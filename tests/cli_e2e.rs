//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary against small transcripts and check
//! the printed summary, the exported files and the exit status.
//!
//! # Test Categories
//!
//! - **Summary**: Every section of the printed summary
//! - **Exports**: CSV, JSON, JSONL and emoji table files
//! - **Filters**: Date and speaker filtering
//! - **Error handling**: Proper error messages and exit codes for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "Messages and calls are end-to-end encrypted.\n\
1/2/24, 9:05 AM - Alice: hello there 😂\n\
1/2/24, 9:06 AM - <Media omitted>\n\
1/2/24, 9:07 AM - Bob: check http://x.com\n\
2/3/24, 8:30 PM - Alice: dinner tonight dinner\n\
2/3/24, 8:31 PM - Bob: Missed voice call\n\
2/4/24, 7:00 AM - Carol: 😂😂\n";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    let special = "1/2/24, 9:05 AM - Alice: Hello; with; semicolons\n\
1/2/24, 9:06 AM - Bob: Quotes \"inside\" text\n\
1/2/24, 9:07 AM - Иван: Line 1\nLine 2\n";
    fs::write(dir.path().join("special.txt"), special).unwrap();

    fs::write(dir.path().join("notes.txt"), "just some notes\nnothing else\n").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(
        dir.path().join("bad_date.txt"),
        "1/2/24, 9:05 AM - Alice: ok\n2/31/24, 9:05 AM - Bob: no such day\n",
    )
    .unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let mut cmd = Command::from_std(std::process::Command::new(env!("CARGO_BIN_EXE_chatlens")));
    cmd.env_remove("CHATLENS_LOG");
    cmd
}

fn input_path(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Summary
// ============================================================================

mod summary {
    use super::*;

    #[test]
    fn test_summary_sections() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 6 messages from 4 speakers"))
            .stdout(predicate::str::contains("Messages per user:"))
            .stdout(predicate::str::contains("Message types:"))
            .stdout(predicate::str::contains("Busiest hour:"))
            .stdout(predicate::str::contains("Messages per month:"))
            .stdout(predicate::str::contains("January"))
            .stdout(predicate::str::contains("February"))
            .stdout(predicate::str::contains("Message length (chars):"))
            .stdout(predicate::str::contains("Done"));
    }

    #[test]
    fn test_summary_counts_system_lines() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"System\s+1 \(16\.7%\)").unwrap())
            .stdout(predicate::str::is_match(r"Alice\s+2 \(33\.3%\)").unwrap())
            .stdout(predicate::str::contains("Media 1"))
            .stdout(predicate::str::contains("Link 1"))
            .stdout(predicate::str::contains("Missed Call 1"));
    }

    #[test]
    fn test_busiest_slot() {
        let fixtures = setup_fixtures();

        // 2024-01-02 was a Tuesday
        chatlens_cmd()
            .arg(input_path(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Busiest slot: Tuesday 09:00 (3 messages)"));
    }

    #[test]
    fn test_top_emojis_and_words() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "--top", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Top emojis:"))
            .stdout(predicate::str::contains("😂  x3"))
            .stdout(predicate::str::contains("Top words:"))
            .stdout(predicate::str::contains("dinner"))
            .stdout(predicate::str::contains("tonight").not());
    }

    #[test]
    fn test_no_logs_by_default() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "-v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("analysis complete"));
    }
}

// ============================================================================
// Exports
// ============================================================================

mod exports {
    use super::*;

    #[test]
    fn test_csv_output() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Writing CSV"));

        let content = fs::read_to_string(&output).unwrap();
        let first = content.lines().next().unwrap();
        assert_eq!(first, "User;Message;Time;Date");
        assert!(content.contains("Alice;hello there 😂;09:05:00 AM;January 02, 2024"));
        assert!(content.contains("System;<Media omitted>"));
    }

    #[test]
    fn test_csv_with_features() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--features",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("User;Message;Time;Date;Category;Length"));
        assert!(content.contains(";Missed Call;"));
        assert!(content.contains(";Media;15"));
    }

    #[test]
    fn test_csv_escaping() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "special.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "special.txt"),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"Hello; with; semicolons\""));
        assert!(content.contains("\"Quotes \"\"inside\"\" text\""));
        assert!(content.contains("\"Line 1\nLine 2\""));
        assert!(content.contains("Иван"));
    }

    #[test]
    fn test_json_output_from_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "report.json");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Writing JSON"));

        let content = fs::read_to_string(&output).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(report["messages"].as_array().unwrap().len(), 6);
        assert_eq!(report["tables"]["count_by_user"]["Bob"], 2);
        assert_eq!(report["tables"]["word_corpus"]["counts"]["dinner"], 2);
    }

    #[test]
    fn test_jsonl_output_with_explicit_format() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "messages.out");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "ndjson",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 6);
        for line in content.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["user"].is_string());
        }
    }

    #[test]
    fn test_emoji_table() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "emojis.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "--emoji-table",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Writing emoji table"));

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["Emoji;Alice;System;Bob;Carol", "😂;1;0;0;2"]);
    }

    #[test]
    fn test_custom_media_placeholder() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-o",
                output.to_str().unwrap(),
                "--features",
                "--media-placeholder",
                "<attached>",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains(";Media;"));
    }
}

// ============================================================================
// Filters
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_filter_by_speaker() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "--from",
                "alice",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 messages after filtering"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(!content.contains("Bob"));
    }

    #[test]
    fn test_filter_by_date_range() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "--after",
                "2024-02-01",
                "--before",
                "2024-02-03",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 messages after filtering"))
            .stdout(predicate::str::contains("January").not());
    }

    #[test]
    fn test_filter_to_nothing() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "--from",
                "nobody",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("No messages to summarize"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_file() {
        chatlens_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("❌ Error"))
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_not_a_transcript() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "notes.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("no messages found"))
            .stderr(predicate::str::contains("notes.txt"));
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "empty.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("no messages found"));
    }

    #[test]
    fn test_bad_timestamp() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .arg(input_path(&fixtures, "bad_date.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("unparsable timestamp '2/31/24, 9:05 AM'"));
    }

    #[test]
    fn test_invalid_filter_date() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "--after", "2024/01/01"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date '2024/01/01'"))
            .stdout(predicate::str::contains("Parsing").not());
    }

    #[test]
    fn test_unknown_format_flag() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([&input_path(&fixtures, "chat.txt"), "-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    #[test]
    fn test_unwritable_output() {
        let fixtures = setup_fixtures();

        chatlens_cmd()
            .args([
                &input_path(&fixtures, "chat.txt"),
                "-o",
                "/nonexistent/dir/out.csv",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }
}

// ============================================================================
// Help and version
// ============================================================================

mod meta {
    use super::*;

    #[test]
    fn test_help() {
        chatlens_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("--emoji-table"));
    }

    #[test]
    fn test_version() {
        chatlens_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
