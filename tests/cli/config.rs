//! Configuration file integration tests

use crate::cli::support::{convo_notes, notes_in, Workspace, SURICATA_CHAT};
use predicates::prelude::*;
use std::fs;

const HOMELAB_CONFIG: &str = r#"
[[domains]]
label = "homelab"
keywords = ["suricata", "home lab"]
page = "Home Lab"

[[topics]]
kind = "tools"
names = ["suricata"]

[note]
footer = "*Imported from chat history*"
"#;

#[test]
fn test_explicit_config_replaces_taxonomy() {
    let ws = Workspace::new();
    let input = ws.write_input("suricata.md", SURICATA_CHAT);
    let config = ws.dir.path().join("config.toml");
    fs::write(&config, HOMELAB_CONFIG).unwrap();

    convo_notes()
        .arg("--config")
        .arg(&config)
        .arg("classify")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Domains: homelab"))
        .stdout(predicate::str::contains("Topics: Suricata"))
        // activities were not overridden
        .stdout(predicate::str::contains("Activity: learning"));
}

#[test]
fn test_config_dir_env_var_is_used() {
    let ws = Workspace::new();
    ws.write_input("suricata.md", SURICATA_CHAT);
    let config_dir = ws.dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), HOMELAB_CONFIG).unwrap();

    convo_notes()
        .env("CONVO_NOTES_CONFIG_DIR", &config_dir)
        .arg("convert")
        .arg("--input-dir")
        .arg(ws.input())
        .arg("--output-dir")
        .arg(ws.output())
        .assert()
        .success()
        .stdout(predicate::str::contains("homelab: 1"));

    let note = fs::read_to_string(&notes_in(&ws.output())[0]).unwrap();
    assert!(note.contains("- [[Home Lab]]\n- [[Suricata]]\n"));
    assert!(note.ends_with("*Imported from chat history*\n"));
}

#[test]
fn test_missing_explicit_config_is_data_error() {
    let ws = Workspace::new();

    convo_notes()
        .arg("--config")
        .arg(ws.dir.path().join("absent.toml"))
        .arg("classify")
        .write_stdin("hello")
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_is_data_error() {
    let ws = Workspace::new();
    let config = ws.dir.path().join("config.toml");
    fs::write(&config, "[[activities]]\nlabel = \"\"\nkeywords = [\"x\"]\n").unwrap();

    convo_notes()
        .arg("--config")
        .arg(&config)
        .arg("classify")
        .write_stdin("hello")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid configuration"));
}
