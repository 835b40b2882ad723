//! CLI surface tests for ngr.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the ngr binary.
fn ngr() -> Command {
    cargo_bin_cmd!("ngr")
}

#[test]
fn test_help_output() {
    ngr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick an npm script"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("NGR_NPM"))
        .stdout(predicate::str::contains("NGR_GUM"));
}

#[test]
fn test_version_output() {
    ngr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ngr"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_rejects_arguments() {
    ngr()
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_rejects_unknown_flag() {
    ngr()
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--list"));
}
