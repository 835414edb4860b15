//! Tests for the report writers: JSON shape, CSV table and text summary.

use chatstats::output::{to_csv, to_json, to_text, write_csv, write_json, write_text};
use chatstats::prelude::*;
use tempfile::tempdir;

const CHAT: &str = "01.01.23, 09:00 - Alice: hello there friend\n\
                    01.01.23, 09:05 - Bob: özür dilerim, kusura bakma\n\
                    01.01.23, 13:10 - Alice: ok no problem ❤️";

fn sample() -> AnalysisReport {
    analyze(CHAT).unwrap()
}

// =========================================================================
// JSON
// =========================================================================

#[test]
fn test_json_top_level_keys() {
    let value: serde_json::Value = serde_json::from_str(&to_json(&sample()).unwrap()).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "total_messages",
        "most_active",
        "most_apology",
        "most_love",
        "slowest",
        "user_msg_count",
        "user_apology_count",
        "user_love_count",
        "avg_response",
        "hourly_activity",
        "weekday_activity",
        "month_activity",
        "top_active_days",
        "common_words",
        "emoji_counts",
        "conversation_starters",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object.len(), 16);
}

#[test]
fn test_json_preserves_table_order() {
    let json = to_json(&sample()).unwrap();

    // Canonical hour order, not alphabetical or by count
    let h00 = json.find("\"00:00\"").unwrap();
    let h09 = json.find("\"09:00\"").unwrap();
    let h23 = json.find("\"23:00\"").unwrap();
    assert!(h00 < h09 && h09 < h23);

    let monday = json.find("\"Pazartesi\"").unwrap();
    let sunday = json.find("\"Pazar\":").unwrap();
    assert!(monday < sunday);
}

#[test]
fn test_json_empty_report() {
    let value: serde_json::Value =
        serde_json::from_str(&to_json(&analyze("").unwrap()).unwrap()).unwrap();

    assert_eq!(value["total_messages"], 0);
    assert!(value["most_active"]["user"].is_null());
    assert_eq!(value["most_active"]["count"], 0);
    assert!(value["slowest"]["user"].is_null());
    assert_eq!(value["hourly_activity"].as_object().unwrap().len(), 24);
    assert!(value["common_words"].as_object().unwrap().is_empty());
}

#[test]
fn test_json_unicode_not_escaped() {
    let json = to_json(&sample()).unwrap();
    assert!(json.contains("❤️"));
    assert!(json.contains("özür"));
}

// =========================================================================
// CSV
// =========================================================================

#[test]
fn test_csv_parses_with_semicolon_reader() {
    let csv_text = to_csv(&sample()).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 6);
    assert_eq!(&headers[4], "AvgResponseSeconds");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Alice");
    assert_eq!(&rows[0][5], "1");
    assert_eq!(&rows[1][0], "Bob");
    assert_eq!(&rows[1][2], "1");
}

#[test]
fn test_csv_empty_report_has_header_only() {
    let csv_text = to_csv(&analyze("").unwrap()).unwrap();
    assert_eq!(csv_text.lines().count(), 1);
}

// =========================================================================
// Text
// =========================================================================

#[test]
fn test_text_mentions_every_author() {
    let text = to_text(&sample());
    assert!(text.contains("Alice: 2 messages"));
    assert!(text.contains("Bob: 1 messages"));
    assert!(text.contains("friend"));
}

// =========================================================================
// Files and format dispatch
// =========================================================================

#[test]
fn test_writers_agree_with_dispatch() {
    let report = sample();
    let dir = tempdir().unwrap();

    let json_path = dir.path().join("r.json");
    let csv_path = dir.path().join("r.csv");
    let text_path = dir.path().join("r.txt");

    write_json(&report, json_path.to_str().unwrap()).unwrap();
    write_csv(&report, csv_path.to_str().unwrap()).unwrap();
    write_text(&report, text_path.to_str().unwrap()).unwrap();

    let json = std::fs::read_to_string(&json_path).unwrap();
    assert_eq!(json.trim_end(), to_format_string(&report, OutputFormat::Json).unwrap());
    assert_eq!(
        std::fs::read_to_string(&csv_path).unwrap(),
        to_format_string(&report, OutputFormat::Csv).unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(&text_path).unwrap(),
        to_format_string(&report, OutputFormat::Text).unwrap()
    );
}

#[test]
fn test_write_report_uses_requested_format() {
    let report = sample();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.out");

    write_report(&report, path.to_str().unwrap(), OutputFormat::Csv).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Author;Messages"));
}

#[test]
fn test_write_to_missing_directory_fails() {
    let err = write_report(&sample(), "/nonexistent/dir/report.json", OutputFormat::Json)
        .unwrap_err();
    assert!(err.is_io());
}
