// Integration tests for the riskscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the riskscore binary.
fn riskscore() -> Command {
    let mut cmd = Command::cargo_bin("riskscore").expect("binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    riskscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("riskscore"));
}

#[test]
fn cli_help_flag() {
    riskscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("risk scoring"));
}

#[test]
fn tier_requires_score() {
    riskscore()
        .arg("tier")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn tier_boundaries() {
    for (score, tier) in [
        ("721", "Low Risk"),
        ("720", "Medium Risk"),
        ("600", "Medium Risk"),
        ("599", "High Risk"),
    ] {
        riskscore()
            .args(["tier", score])
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("{tier}\n")));
    }
}

#[test]
fn quiet_conflicts_with_verbose() {
    riskscore()
        .args(["-q", "-v", "score"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_format_is_rejected() {
    riskscore()
        .args(["score", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
