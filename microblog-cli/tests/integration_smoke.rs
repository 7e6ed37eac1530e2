//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("microblog").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_initdb_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("microblog.db");

    let mut cmd = Command::cargo_bin("microblog").unwrap();
    cmd.env_remove("MICROBLOG_SETTINGS")
        .arg("initdb")
        .arg("--db-path")
        .arg(&db_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialized the database."));
    assert!(db_path.exists());
}

#[test]
fn test_initdb_uses_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("from-settings.db");
    let settings_path = dir.path().join("settings.toml");
    std::fs::write(
        &settings_path,
        format!("database = {:?}\n", db_path.display().to_string()),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("microblog").unwrap();
    cmd.env("MICROBLOG_SETTINGS", &settings_path).arg("initdb");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Initialized the database."));
    assert!(db_path.exists());
}

#[test]
fn test_malformed_settings_fail() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings.toml");
    std::fs::write(&settings_path, "debug = \"maybe\"\n").unwrap();

    let mut cmd = Command::cargo_bin("microblog").unwrap();
    cmd.arg("--settings").arg(&settings_path).arg("initdb");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}
