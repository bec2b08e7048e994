//! Integration tests for parser + judge pipeline
//! Tests suite loading, verdicts and reports

use revint::{Judge, ParseMode, Suite, TestCase, Verdict};
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_judge_reverse_integer_suite_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        &temp_file,
        r#"{
            "name": "reverse-integer",
            "testCases": [
                { "input": "123", "expectedOutput": "321" },
                { "input": "-123", "expectedOutput": "-321" },
                { "input": "120", "expectedOutput": 21 },
                { "input": 1534236469, "expectedOutput": "0", "isHidden": true }
            ]
        }"#,
    )
    .unwrap();

    let suite = Suite::load(temp_file.path()).unwrap();
    let report = Judge::new().run_suite(&suite);

    assert_eq!(report.name, "reverse-integer");
    assert_eq!(report.status, Verdict::Accepted);
    assert_eq!(report.passed, 4);
    assert!(report.results.iter().all(|result| result.passed));
}

#[test]
fn test_verdict_of_first_failure_wins() {
    let suite = Suite::new(
        "mixed",
        vec![
            TestCase::new("123", "321"),
            TestCase::new("120", "210"),
            TestCase::new("[1", "1"),
        ],
    );

    let report = Judge::new().keep_going(true).run_suite(&suite);

    assert_eq!(report.status, Verdict::WrongAnswer);
    assert_eq!(report.results[1].verdict, Verdict::WrongAnswer);
    assert_eq!(report.results[2].verdict, Verdict::RuntimeError);
    assert_eq!(report.failure_reason.as_deref(), Some("Test case 2 failed"));
}

#[test]
fn test_bracketed_single_argument() {
    let result = Judge::new().run_case(0, &TestCase::new("[-120]", "-21"));

    assert_eq!(result.verdict, Verdict::Accepted);
}

#[test]
fn test_strict_judge_on_wide_input() {
    let case = TestCase::new("-8463847412", "-2147483648");

    assert_eq!(Judge::new().run_case(0, &case).verdict, Verdict::Accepted);
    assert_eq!(
        Judge::new().mode(ParseMode::Strict).run_case(0, &case).verdict,
        Verdict::RuntimeError
    );
}

#[test]
fn test_report_round_trips_through_json_fields() {
    let suite = Suite::new("one", vec![TestCase::new("0", "1").hidden()]);
    let report = Judge::new().run_suite(&suite);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["name"], "one");
    assert_eq!(json["status"], "wrong_answer");
    assert_eq!(json["results"][0]["isHidden"], true);
    assert_eq!(json["results"][0]["expectedOutput"], "1");
    assert_eq!(json["failureReason"], "Test case 1 failed");
}
