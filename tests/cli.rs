//! Integration tests for the savemore CLI surface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn savemore(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("savemore").unwrap();
    cmd.env("SAVEMORE_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    savemore(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("savemore"));
}

#[test]
fn test_help_mentions_subcommands() {
    let temp_dir = TempDir::new().unwrap();
    savemore(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_shows_resolved_paths() {
    let temp_dir = TempDir::new().unwrap();
    savemore(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("SaveMore Configuration"))
        .stdout(predicate::str::contains(
            temp_dir.path().to_str().unwrap(),
        ))
        .stdout(predicate::str::contains("Currency symbol: $"));
}

#[test]
fn test_config_reports_missing_icons() {
    let temp_dir = TempDir::new().unwrap();
    savemore(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("money.png"))
        .stdout(predicate::str::contains("receipt.png"));
}

#[test]
fn test_config_reports_found_icons() {
    let temp_dir = TempDir::new().unwrap();
    let assets_dir = temp_dir.path().join("assets");
    std::fs::create_dir_all(&assets_dir).unwrap();
    std::fs::write(assets_dir.join("money.png"), b"png").unwrap();
    std::fs::write(assets_dir.join("receipt.png"), b"png").unwrap();

    savemore(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Icon assets: all found"));
}

#[test]
fn test_config_honors_saved_settings() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"currency_symbol": "£", "confirm_exit": false}"#,
    )
    .unwrap();

    savemore(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: £"))
        .stdout(predicate::str::contains("Confirm exit:    false"));
}
