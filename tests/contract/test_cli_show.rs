// Contract test for `semverx show` command

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_show_mixed_version() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "1.stable", "4.experimental", "2.stable"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Version: 1.stable.4.experimental.2.stable"))
        .stdout(predicate::str::contains("Coherence score: 0.85"))
        .stdout(predicate::str::contains("Weakest component state: experimental"));
}

#[test]
fn test_show_plain_numbers_are_stable() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "3", "0", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Version: 3.stable.0.stable.1.stable"))
        .stdout(predicate::str::contains("Coherence score: 1"))
        .stdout(predicate::str::contains("Weakest").not());
}

#[test]
fn test_show_json_output() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "0.legacy", "0.legacy", "0.legacy", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["version"], "0.legacy.0.legacy.0.legacy");
    assert_eq!(json["score"], 0.1);
    assert_eq!(json["weakest_state"], "legacy");
    assert_eq!(json["components"].as_array().unwrap().len(), 3);
    assert_eq!(json["components"][0]["slot"], "major");
}

#[test]
fn test_show_unknown_state_word_is_stable() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "2.bogus", "0", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2.stable.0.stable.0.stable"));
}

#[test]
fn test_show_unknown_state_word_is_logged() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["show", "2.bogus", "0", "0"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unrecognized state descriptor"));
}

#[test]
fn test_show_non_integer_fails() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "x.stable", "0.stable", "0.stable"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse 'x.stable'"));
}

#[test]
fn test_show_requires_three_components() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "1.stable"]);

    cmd.assert().failure();
}

#[test]
fn test_show_accepts_negative_values() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["show", "-1", "0", "-2.legacy", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["version"], "-1.stable.0.stable.-2.legacy");
    assert_eq!(json["components"][0]["value"], -1);
}

#[test]
fn test_verbose_logs_are_plain_when_piped() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["-v", "show", "1.stable", "0", "0"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("INFO"))
        .stderr(predicate::str::contains("\x1b[").not());
}
