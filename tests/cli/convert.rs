//! Convert command integration tests
//!
//! Tests for batch and single-file conversion, duplicate rejection,
//! dry runs and the exit codes for bad input.

use crate::cli::support::{
    convo_notes, frontmatter, notes_in, stdout_json, Workspace, SURICATA_CHAT, TLS_CHAT,
};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Batch conversion
// ============================================================================

#[test]
fn test_convert_directory() {
    let ws = Workspace::new().with_sample_chats();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 2"))
        .stdout(predicate::str::contains("Duplicates: 0"))
        .stdout(predicate::str::contains("network-security: 1"))
        .stdout(predicate::str::contains("cryptography: 1"));

    let notes = notes_in(&ws.output());
    assert_eq!(notes.len(), 2);

    let names: Vec<String> = notes
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert!(names[0].starts_with("2024-02-10_tuning_suricata_for_a_home_lab_"));
    assert!(names[1].starts_with("2024-03-15_rotating_tls_certificates_"));
}

#[test]
fn test_converted_note_contents() {
    let ws = Workspace::new();
    ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success();

    let notes = notes_in(&ws.output());
    let note = fs::read_to_string(&notes[0]).unwrap();

    let fm = frontmatter(&note);
    assert_eq!(fm["title"].as_str(), Some("Tuning Suricata for a home lab"));
    assert_eq!(fm["type"].as_str(), Some("conversation"));
    assert_eq!(fm["domain"].as_str(), Some("conversations/network-security"));
    assert_eq!(fm["source_file"].as_str(), Some("suricata.md"));
    assert_eq!(fm["created"].as_str(), Some("2024-02-10"));
    assert_eq!(fm["status"].as_str(), Some("converted"));

    assert!(note.contains("**User**: how to write suricata rules for nmap scans?"));
    assert!(note.contains("## Related Topics\n\n- [[Network Security]]\n- [[Nmap]]\n- [[Suricata]]\n"));
}

#[test]
fn test_second_run_skips_existing_notes() {
    let ws = Workspace::new().with_sample_chats();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 0"))
        .stdout(predicate::str::contains("Skipped: 2"));

    assert_eq!(notes_in(&ws.output()).len(), 2);
}

#[test]
fn test_no_skip_overwrites_existing_notes() {
    let ws = Workspace::new();
    ws.write_input("suricata.md", SURICATA_CHAT);

    let run = |extra: &[&str]| {
        convo_notes()
            .arg("convert")
            .arg("--input-dir")
            .arg(ws.input())
            .arg("--output-dir")
            .arg(ws.output())
            .args(extra)
            .assert()
            .success()
    };

    run(&[]);
    let note = notes_in(&ws.output())[0].clone();
    fs::write(&note, "stale").unwrap();

    run(&["--no-skip"]).stdout(predicate::str::contains("Converted: 1"));
    assert!(fs::read_to_string(&note).unwrap().contains("# Tuning Suricata"));
}

// ============================================================================
// Duplicate detection
// ============================================================================

#[test]
fn test_duplicate_within_one_run() {
    let ws = Workspace::new();
    ws.write_input("a.md", SURICATA_CHAT);
    ws.write_input("b.md", SURICATA_CHAT);

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 1"))
        .stdout(predicate::str::contains("Duplicates: 1"))
        .stdout(predicate::str::contains("duplicate "));

    assert_eq!(notes_in(&ws.output()).len(), 1);
}

#[test]
fn test_duplicate_of_existing_corpus_note() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.output()).unwrap();
    fs::write(
        ws.output().join("existing.md"),
        "---\ntitle: Old\n---\n\n## Conversation\n\nUser: how do I harden sshd?\n\n---\n\nfooter\n",
    )
    .unwrap();
    ws.write_input(
        "export.md",
        "# Exported chat\n\n## Conversation\n\nUser: how do I harden sshd?\n\n---\n\nexported by a tool\n",
    );

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("existing.md"))
        .stdout(predicate::str::contains("Duplicates: 1"));

    assert_eq!(notes_in(&ws.output()).len(), 1);
}

#[test]
fn test_force_converts_duplicates() {
    let ws = Workspace::new();
    ws.write_input("a.md", SURICATA_CHAT);
    ws.write_input("b.md", SURICATA_CHAT);

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 2"));

    assert_eq!(notes_in(&ws.output()).len(), 2);
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_dry_run_writes_nothing() {
    let ws = Workspace::new().with_sample_chats();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would create"))
        .stdout(predicate::str::contains("Would convert: 2"));

    assert!(notes_in(&ws.output()).is_empty());
}

#[test]
fn test_no_recursive_ignores_subdirectories() {
    let ws = Workspace::new();
    ws.write_input("suricata.md", SURICATA_CHAT);
    ws.write_input("nested/chat_2024-03-15.md", TLS_CHAT);

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .arg("--no-recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 1"));
}

#[test]
fn test_pattern_filters_file_names() {
    let ws = Workspace::new().with_sample_chats();
    ws.write_input("notes.txt", "User: what is a firewall?");

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .args(["--pattern", "chat_*.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 1"))
        .stdout(predicate::str::contains("suricata").not());
}

#[test]
fn test_single_file() {
    let ws = Workspace::new();
    let input = ws.write_input("chat_2024-03-15.md", TLS_CHAT);

    convo_notes()
        .arg("convert")
        .arg("--input-file")
        .arg(&input)
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("converted"));

    assert_eq!(notes_in(&ws.output()).len(), 1);
}

#[test]
fn test_json_report() {
    let ws = Workspace::new().with_sample_chats();
    ws.write_input("copy.md", SURICATA_CHAT);

    let output = convo_notes()
        .args(["--format", "json"])
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["converted"].as_array().unwrap().len(), 2);
    assert_eq!(json["duplicates"].as_array().unwrap().len(), 1);
    assert_eq!(json["domain_counts"]["cryptography"], 1);
    assert_eq!(json["domain_counts"]["network-security"], 1);
    assert_eq!(json["interrupted"], false);
    assert!(json["index_diagnostics"].as_array().unwrap().is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_input_dir_is_data_error() {
    let ws = Workspace::new();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.dir.path().join("absent"))
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_missing_input_file_json_envelope() {
    let ws = Workspace::new();

    let output = convo_notes()
        .args(["--format", "json"])
        .arg("convert")
        .arg("--input-file")
        .arg(ws.input().join("absent.md"))
        .arg("--output-dir")
        .arg(ws.output())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "input_not_found");
}

#[test]
fn test_invalid_pattern_is_usage_error() {
    let ws = Workspace::new().with_sample_chats();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .args(["--pattern", "["])
        .assert()
        .code(2);
}

#[test]
fn test_empty_pattern_is_usage_error() {
    let ws = Workspace::new().with_sample_chats();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .args(["--pattern", ""])
        .assert()
        .code(2);
}

#[test]
fn test_undecodable_file_is_reported_not_fatal() {
    let ws = Workspace::new();
    ws.write_input("suricata.md", SURICATA_CHAT);
    fs::write(ws.input().join("broken.md"), [0xff, 0xfe, 0x00]).unwrap();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: 1"))
        .stdout(predicate::str::contains("Failed: 1"))
        .stderr(predicate::str::contains("broken.md"));
}
