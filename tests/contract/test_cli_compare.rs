// Contract test for `semverx compare` command

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_compare_orders_states() {
    let cases = [
        ("legacy", "stable", "legacy < stable"),
        ("stable", "experimental", "stable > experimental"),
        ("Experimental", "experimental", "experimental = experimental"),
    ];

    for (left, right, expected) in cases {
        let mut cmd = Command::cargo_bin("semverx").unwrap();
        cmd.args(["compare", left, right]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }
}

#[test]
fn test_compare_json_output() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["compare", "experimental", "legacy", "--json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["left"], "experimental");
    assert_eq!(json["right"], "legacy");
    assert_eq!(json["ordering"], ">");
}

#[test]
fn test_compare_rejects_unknown_state() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.args(["compare", "bogus", "stable"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown state 'bogus'"));
}
