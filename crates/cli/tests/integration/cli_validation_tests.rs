//! CLI argument validation tests.

use predicates::prelude::*;

use super::helpers::realloc_cmd;

#[test]
fn test_help_output() {
    realloc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("realloc"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_run_help_output() {
    realloc_cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--params"))
        .stdout(predicate::str::contains("--cohort"));
}

#[test]
fn test_invalid_command() {
    realloc_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_run_missing_snapshot() {
    realloc_cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_run_missing_snapshot_file() {
    realloc_cmd()
        .args(["run", "no_such_file.json", "--params", "also_missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_file.json"));
}
