//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn contactdesk() -> Command {
    let mut cmd = Command::cargo_bin("contactdesk").unwrap();
    cmd.env_remove("DATABASE_URL")
        .env_remove("CONTACTDESK_ENV")
        .env_remove("CONTACTDESK_TZ")
        .env_remove("CONTACTDESK_BIND");
    cmd
}

#[test]
fn test_top_level_help_lists_commands() {
    contactdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_serve_help() {
    contactdesk()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--memory"));
}

#[test]
fn test_list_help() {
    contactdesk()
        .arg("list")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output as JSON"));
}

#[test]
fn test_serve_requires_database_url() {
    contactdesk()
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_list_requires_database_url() {
    contactdesk()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_unknown_mode() {
    contactdesk()
        .args(["serve", "--memory", "--mode", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown runtime mode"));
}

#[test]
fn test_serve_rejects_unknown_timezone() {
    contactdesk()
        .args(["serve", "--memory", "--display-tz", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--display-tz"));
}
