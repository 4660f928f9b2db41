// Contract test for `semverx demo` command

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_demo_prints_examples() {
    let mut cmd = Command::cargo_bin("semverx").unwrap();
    cmd.arg("demo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Version created: 1.stable.4.experimental.2.stable"))
        .stdout(predicate::str::contains("Coherence score: 0.85"))
        .stdout(predicate::str::contains("Version created: 0.legacy.0.legacy.0.legacy"))
        .stdout(predicate::str::contains("Coherence score: 0.1"))
        .stdout(predicate::str::contains("Resolved path: A -> B1 -> C1"));
}
