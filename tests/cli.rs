//! CLI smoke tests
//!
//! These exercise argument parsing and the offline failure paths; no API
//! server is required.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn simplebudget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("simplebudget").unwrap();
    cmd.env("SIMPLEBUDGET_DATA_DIR", data_dir.path());
    cmd.env_remove("SIMPLEBUDGET_TOKEN");
    cmd.env_remove("SIMPLEBUDGET_API_URL");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    simplebudget(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("budget"))
        .stdout(predicate::str::contains("expense"));
}

#[test]
fn bare_invocation_prints_hint() {
    let dir = TempDir::new().unwrap();
    simplebudget(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("simplebudget tui"));
}

#[test]
fn authenticated_command_requires_token() {
    let dir = TempDir::new().unwrap();
    simplebudget(&dir)
        .args(["budget", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no API token provided"));
}

#[test]
fn config_shows_base_url() {
    let dir = TempDir::new().unwrap();
    simplebudget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8000/api/v1"));
}

#[test]
fn api_url_flag_overrides_default() {
    let dir = TempDir::new().unwrap();
    simplebudget(&dir)
        .args(["--api-url", "http://budget.example.com/api/v1", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://budget.example.com/api/v1"));
}
