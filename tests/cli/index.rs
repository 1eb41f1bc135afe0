//! Index command integration tests

use crate::cli::support::{convo_notes, stdout_json, Workspace};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_index_empty_dir() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.output()).unwrap();

    convo_notes()
        .arg("index")
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 0 note(s)"));
}

#[test]
fn test_index_after_convert() {
    let ws = Workspace::new().with_sample_chats();

    convo_notes()
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success();

    let output = convo_notes()
        .args(["--format", "json", "index", "--output-dir"])
        .arg(ws.output())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["notes_scanned"], 2);
    assert_eq!(json["fingerprints"], 2);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert!(json["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn test_index_collapses_shared_bodies() {
    let ws = Workspace::new();
    let out = ws.output();
    fs::create_dir_all(&out).unwrap();
    let note = "## Conversation\n\nUser: same body\n\n---\n";
    fs::write(out.join("a.md"), note).unwrap();
    fs::write(out.join("b.md"), format!("# Different header\n\n{}", note)).unwrap();

    let output = convo_notes()
        .args(["--format", "json", "index", "--output-dir"])
        .arg(&out)
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["notes_scanned"], 2);
    assert_eq!(json["fingerprints"], 1);
    // last scanned wins
    let path = json["entries"][0]["path"].as_str().unwrap();
    assert!(path.ends_with("b.md"), "{}", path);
}

#[test]
fn test_index_reports_undecodable_notes() {
    let ws = Workspace::new();
    let out = ws.output();
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("good.md"), "## Conversation\n\nUser: hi\n").unwrap();
    fs::write(out.join("bad.md"), [0xc3, 0x28]).unwrap();

    convo_notes()
        .arg("index")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 1 note(s)"))
        .stdout(predicate::str::contains("Skipped 1 unreadable file(s)"))
        .stdout(predicate::str::contains("bad.md"));
}

#[test]
fn test_index_missing_dir() {
    let ws = Workspace::new();

    convo_notes()
        .arg("index")
        .arg("--output-dir")
        .arg(ws.dir.path().join("absent"))
        .assert()
        .code(3);
}
