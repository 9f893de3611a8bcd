//! Edge case tests for chatpulse
//!
//! These tests cover boundary conditions of parsing and analysis
//! that regular unit and integration tests do not reach.

use chatpulse::parsing::{AssemblyOptions, LineClassifier, assemble, decode_lossy};
use chatpulse::prelude::*;

fn parse(text: &str) -> Vec<Message> {
    chatpulse::logging::init_test();
    assemble(text, LineClassifier::standard(), AssemblyOptions::default()).messages
}

// =========================================================================
// Empty and unrecognized input
// =========================================================================

#[test]
fn test_empty_input_is_unprocessable() {
    let err = analyze(b"").unwrap_err();
    assert!(err.is_no_messages());
    assert_eq!(err.status_code(), 422);
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.to_string(), "Could not parse any messages.");
}

#[test]
fn test_whitespace_only_input() {
    assert!(analyze(b"   \n\n\t\n").unwrap_err().is_no_messages());
}

#[test]
fn test_unrecognized_lines_only() {
    let text = "Hello there\nthis is not a chat export\n2024-01-01 Alice: hi";
    assert!(analyze(text.as_bytes()).unwrap_err().is_no_messages());
}

#[test]
fn test_only_invalid_dates() {
    let text = "[2024-13-45, 10:00:00] Alice: hi\n[2024-02-30, 10:00:00] Bob: hey";
    assert!(analyze(text.as_bytes()).unwrap_err().is_no_messages());
}

// =========================================================================
// Assembly boundaries
// =========================================================================

#[test]
fn test_leading_garbage_discarded() {
    let messages = parse("Chat export\n---\n[2024-01-01, 10:00:00] Alice: hi");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text(), "hi");
}

#[test]
fn test_blank_lines_never_extend() {
    let messages = parse("[2024-01-01, 10:00:00] Alice: hi\n\n   \n\nstill Alice");
    assert_eq!(messages[0].text(), "hi\nstill Alice");
}

#[test]
fn test_bad_date_does_not_finalize_current() {
    let text = "\
[2024-01-01, 10:00:00] Alice: first
[2024-99-99, 10:01:00] Bob: broken
continued
[2024-01-01, 10:02:00] Bob: second";
    let messages = parse(text);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender(), "Alice");
    assert_eq!(messages[0].text(), "first\ncontinued");
    assert_eq!(messages[1].text(), "second");
}

#[test]
fn test_continuation_lines_are_trimmed() {
    let messages = parse("[2024-01-01, 10:00:00] Alice:   padded  \n    indented   ");
    assert_eq!(messages[0].text(), "padded\nindented");
}

#[test]
fn test_sender_is_trimmed() {
    let messages = parse("[2024-01-01, 10:00:00]    Alice   : hi");
    assert_eq!(messages[0].sender(), "Alice");
}

#[test]
fn test_colon_in_body_kept() {
    let messages = parse("[2024-01-01, 10:00:00] Alice: meet at 10:30: ok?");
    assert_eq!(messages[0].sender(), "Alice");
    assert_eq!(messages[0].text(), "meet at 10:30: ok?");
}

#[test]
fn test_empty_body() {
    let messages = parse("[2024-01-01, 10:00:00] Alice:");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text(), "");
}

#[test]
fn test_crlf_line_endings() {
    let messages = parse("[2024-01-01, 10:00:00] Alice: hi\r\nmore\r\n[2024-01-01, 10:01:00] Bob: yo\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text(), "hi\nmore");
    assert_eq!(messages[1].text(), "yo");
}

#[test]
fn test_us_date_without_meridiem_is_dropped() {
    // The US rule requires AM/PM; a 24-hour time cannot be parsed
    let messages = parse("1/15/24, 14:05 - Alice: hi\n[2024-01-01, 10:00:00] Bob: hey");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender(), "Bob");
}

#[test]
fn test_four_digit_us_year_is_dropped() {
    let messages = parse("1/15/2024, 9:05 AM - Alice: hi");
    assert!(messages.is_empty());
}

#[test]
fn test_glued_meridiem_is_dropped() {
    let messages = parse("1/15/24, 9:05PM - Alice: hi\n1/15/24, 9:06 PM - Bob: hey");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender(), "Bob");
}

// =========================================================================
// Decoding
// =========================================================================

#[test]
fn test_invalid_utf8_ignored() {
    let mut bytes = b"[2024-01-01, 10:00:00] Alice: h".to_vec();
    bytes.extend_from_slice(&[0xc3, 0x28, 0xff]);
    bytes.extend_from_slice(b"i");

    let report = analyze(&bytes).unwrap();
    assert_eq!(report.messages[0].message.text(), "h(i");
}

#[test]
fn test_bom_stripped() {
    let decoded = decode_lossy("\u{feff}[2024-01-01, 10:00:00] Alice: hi".as_bytes());
    assert!(decoded.text.starts_with('['));
    assert_eq!(parse(&decoded.text).len(), 1);
}

// =========================================================================
// Unicode
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let text = "\
[2024-01-01, 10:00:00] Иван Петров: Привет мир!
[2024-01-01, 10:01:00] 田中太郎: こんにちは世界！
[2024-01-01, 10:02:00] محمد: مرحبا بالعالم";
    let report = Analyzer::new().analyze_str(text).unwrap();

    assert_eq!(
        report.metadata.participants,
        vec!["Иван Петров", "田中太郎", "محمد"]
    );
    let words: Vec<_> = report
        .additional_metrics
        .word_cloud
        .iter()
        .map(|w| w.text.as_str())
        .collect();
    assert!(words.contains(&"привет"));
    assert!(!words.contains(&"иван"));
    assert!(!words.contains(&"петров"));
}

#[test]
fn test_zwj_emoji_counts_components() {
    let text = "[2024-01-01, 10:00:00] Alice: 👨‍👩‍👧";
    let report = Analyzer::new().analyze_str(text).unwrap();
    let emojis = &report.additional_metrics.emojis;
    assert!(emojis.iter().any(|e| e.emoji == "👨"));
    assert!(emojis.iter().all(|e| e.emoji != "\u{200d}"));
}

#[test]
fn test_flag_only_chat_reports_emoji() {
    let text = "[2024-01-01, 10:00:00] Alice: 🇺🇸🇺🇸\n[2024-01-01, 10:01:00] Bob: 🇫🇷";
    let report = Analyzer::new().analyze_str(text).unwrap();
    let emojis = &report.additional_metrics.emojis;
    assert_eq!(emojis[0].emoji, "🇺");
    assert_eq!(emojis[0].count, 2);
    assert!(emojis.iter().any(|e| e.emoji == "🇫"));
}

// =========================================================================
// Small timelines
// =========================================================================

#[test]
fn test_single_message_report() {
    let report = Analyzer::new()
        .analyze_str("[2024-01-01, 10:00:00] Alice: hi")
        .unwrap();

    assert_eq!(report.metadata.start_date, report.metadata.end_date);
    assert!(report.additional_metrics.sentiment_shifts.is_empty());
    assert!(report.additional_metrics.avg_response_times.is_empty());
    assert_eq!(report.additional_metrics.starters.len(), 1);
    assert_eq!(report.additional_metrics.starters[0].count, 1);
}

#[test]
fn test_monologue_has_no_response_times() {
    let text = "[2024-01-01, 10:00:00] Alice: a\n[2024-01-01, 10:05:00] Alice: b";
    let report = Analyzer::new().analyze_str(text).unwrap();
    assert!(report.additional_metrics.avg_response_times.is_empty());
}

#[test]
fn test_out_of_order_timestamps_are_not_reordered() {
    let text = "[2024-01-02, 10:00:00] Alice: later\n[2024-01-01, 10:00:00] Bob: earlier";
    let report = Analyzer::new().analyze_str(text).unwrap();
    assert_eq!(report.messages[0].message.text(), "later");
    assert_eq!(
        report.metadata.start_date.format("%Y-%m-%d").to_string(),
        "2024-01-02"
    );
}
