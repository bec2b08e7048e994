//! E2E tests for reversing values through the command line

use assert_cmd::Command;
use predicates::prelude::*;

fn revint() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("revint").unwrap()
}

#[test]
fn test_reverse_arguments() {
    revint()
        .args(["123", "-123", "120"])
        .assert()
        .success()
        .stdout("321\n-321\n21\n");
}

#[test]
fn test_overflow_prints_zero() {
    revint()
        .args(["1534236469", "-2147483648"])
        .assert()
        .success()
        .stdout("0\n0\n");
}

#[test]
fn test_zero() {
    revint().arg("0").assert().success().stdout("0\n");
}

#[test]
fn test_reverse_from_stdin() {
    revint()
        .write_stdin("123\n-45\n\n1000\n")
        .assert()
        .success()
        .stdout("321\n-54\n1\n");
}

#[test]
fn test_reverse_input_list_as_json() {
    revint()
        .args(["--json", "--input", "[123,-123,120]"])
        .assert()
        .success()
        .stdout("[321,-321,21]\n");
}

#[test]
fn test_syntax_error_reports_position() {
    revint()
        .write_stdin("12\n3x\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("revint:<stdin>:2:2: ERR_SYNTAX"));
}

#[test]
fn test_strict_mode() {
    revint()
        .args(["--strict", "4294967296"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERR_RANGE"));

    revint()
        .args(["--strict", "2147483647"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_literal_too_large() {
    revint()
        .arg("123456789012345678901234567890")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERR_LITERAL"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    revint()
        .args(["-vv", "21"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("12\n")
        .stderr(predicate::str::contains("reversed"));
}

#[test]
fn test_help() {
    revint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--suite"))
        .stdout(predicate::str::contains("--strict"));
}
