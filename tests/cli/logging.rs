use crate::cli::support::{convo_notes, Workspace, SURICATA_CHAT};
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .env_remove("RUST_LOG")
        .env_remove("CONVO_NOTES_LOG")
        .args(["--log-level", "debug", "classify"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("analyzed"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .env_remove("RUST_LOG")
        .env_remove("CONVO_NOTES_LOG")
        .arg("classify")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_enables_debug() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .env_remove("RUST_LOG")
        .env_remove("CONVO_NOTES_LOG")
        .args(["--verbose", "classify"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("read_input"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .env_remove("RUST_LOG")
        .env_remove("CONVO_NOTES_LOG")
        .args(["--log-json", "--log-level", "debug", "classify"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_env_filter_overrides_flags() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);

    convo_notes()
        .env_remove("RUST_LOG")
        .env("CONVO_NOTES_LOG", "convo_notes=debug")
        .arg("classify")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
