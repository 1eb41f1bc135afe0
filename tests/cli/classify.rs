//! Classify command integration tests

use crate::cli::support::{convo_notes, stdout_json, Workspace, SURICATA_CHAT, TLS_CHAT};
use predicates::prelude::*;

#[test]
fn test_classify_file_human() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .arg("classify")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Tuning Suricata for a home lab"))
        .stdout(predicate::str::contains("Date: 2024-02-10"))
        .stdout(predicate::str::contains("Source: General"))
        .stdout(predicate::str::contains("Domains: network-security"))
        .stdout(predicate::str::contains("Activity: learning"))
        .stdout(predicate::str::contains("Topics: Nmap, Suricata"));
}

#[test]
fn test_classify_date_from_file_name() {
    let ws = Workspace::new();
    let input = ws.write_input("chat_2024-03-15.md", TLS_CHAT);

    let output = convo_notes()
        .args(["--format", "json", "classify"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["date"], "2024-03-15");
    assert_eq!(json["domains"], serde_json::json!(["cryptography"]));
    assert_eq!(json["source_type"], "general");
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 16);
}

#[test]
fn test_classify_stdin() {
    let output = convo_notes()
        .args(["--format", "json", "classify"])
        .write_stdin("User: I got an error, how do I fix my kubernetes pod?\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["activity"], "problem-solving");
    assert_eq!(json["domains"], serde_json::json!(["cloud-security"]));
    assert_eq!(json["topics"], serde_json::json!([]));
}

#[test]
fn test_classify_unmatched_text_falls_back() {
    convo_notes()
        .arg("classify")
        .write_stdin("Chat Session\n\nhello there\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Conversation"))
        .stdout(predicate::str::contains("Domains: general"))
        .stdout(predicate::str::contains("Activity: reference"))
        .stdout(predicate::str::contains("Topics: (none)"));
}

#[test]
fn test_classify_missing_file() {
    let ws = Workspace::new();

    convo_notes()
        .arg("classify")
        .arg(ws.input().join("absent.md"))
        .assert()
        .code(3);
}
