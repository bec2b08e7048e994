//! E2E tests for judging JSON suites

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn revint() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("revint").unwrap()
}

fn suite_file(contents: &str) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, contents).unwrap();
    temp_file
}

const REVERSE_SUITE: &str = r#"{
    "name": "reverse-integer",
    "testCases": [
        { "input": "123", "expectedOutput": "321" },
        { "input": "-123", "expectedOutput": "-321" },
        { "input": "120", "expectedOutput": "21" },
        { "input": "0", "expectedOutput": "0" },
        { "input": "1534236469", "expectedOutput": "0", "isHidden": true },
        { "input": "-2147483648", "expectedOutput": 0, "isHidden": true }
    ]
}"#;

#[test]
fn test_suite_accepted() {
    let temp_file = suite_file(REVERSE_SUITE);

    revint()
        .arg("--suite")
        .arg(temp_file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "reverse-integer: accepted (6/6 passed)",
        ))
        .stdout(predicate::str::contains("case 6 (hidden): accepted"));
}

#[test]
fn test_suite_wrong_answer() {
    let temp_file = suite_file(
        r#"[
            { "input": "123", "expectedOutput": "321" },
            { "input": "120", "expectedOutput": "210" },
            { "input": "0", "expectedOutput": "0" }
        ]"#,
    );

    revint()
        .arg("--suite")
        .arg(temp_file.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("wrong_answer (1/3 passed)"))
        .stdout(predicate::str::contains("expected 210, got 21"))
        .stdout(predicate::str::contains("case 3").not());
}

#[test]
fn test_suite_keep_going_json() {
    let temp_file = suite_file(
        r#"[
            { "input": "1 2", "expectedOutput": "0" },
            { "input": "120", "expectedOutput": "21" }
        ]"#,
    );

    let output = revint()
        .args(["--json", "--keep-going", "--suite"])
        .arg(temp_file.path())
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["status"], "runtime_error");
    assert_eq!(report["passed"], 1);
    assert_eq!(report["results"].as_array().unwrap().len(), 2);
}

#[test]
fn test_suite_missing_file() {
    revint()
        .args(["--suite", "nonexistent_suite_12345.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load suite"));
}
