//! revint judge
//!
//! Runs integer reversal against test cases and reports a verdict per case
//! and per suite, in the manner of a practice-problem judge.

use revint_core::{RevintError, reverse_wide};
use revint_parser::{ParseMode, Parser};
use serde::Serialize;
use tracing::{debug, info, warn};

pub mod compare;
pub mod suite;

pub use compare::outputs_equal;
pub use suite::{Suite, TestCase};

/// Errors raised while loading suites or reading input
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid suite: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Input(#[from] RevintError),
}

/// Outcome of a case or a whole suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    RuntimeError,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::RuntimeError => "runtime_error",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseResult {
    pub index: usize,
    pub input: String,
    pub expected_output: String,
    pub actual_output: String,
    pub passed: bool,
    pub verdict: Verdict,
    pub error: Option<String>,
    #[serde(rename = "isHidden")]
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    pub name: String,
    pub status: Verdict,
    pub results: Vec<CaseResult>,
    pub failure_reason: Option<String>,
    pub passed: usize,
    pub total: usize,
}

impl SuiteReport {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.status == Verdict::Accepted
    }
}

/// Judges reversal results against expected outputs
#[derive(Debug, Clone, Copy, Default)]
pub struct Judge {
    mode: ParseMode,
    keep_going: bool,
}

impl Judge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Keep judging after the first failing case
    #[must_use]
    pub const fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Parse `text` as any number of integers and reverse each one
    ///
    /// # Errors
    ///
    /// Returns `RevintError` if the text is not a valid argument list
    pub fn reverse_input(&self, text: &str, filename: &str) -> Result<Vec<i32>, RevintError> {
        let arguments = Parser::new_with_filename(text, filename)?
            .with_mode(self.mode)
            .parse()?;

        Ok(arguments
            .iter()
            .map(|value| {
                let reversed = reverse_wide(value);
                debug!(value, reversed, "reversed");
                reversed
            })
            .collect())
    }

    /// Judge a single case; `index` is zero-based
    #[must_use]
    pub fn run_case(&self, index: usize, case: &TestCase) -> CaseResult {
        let filename = format!("<case {}>", index + 1);

        let (actual_output, verdict, error) = match self.evaluate(&case.input, &filename) {
            Ok(actual) => {
                let verdict = if outputs_equal(&case.expected_output, &actual) {
                    Verdict::Accepted
                } else {
                    Verdict::WrongAnswer
                };
                (actual, verdict, None)
            }
            Err(e) => (String::new(), Verdict::RuntimeError, Some(e.to_string())),
        };

        debug!(case = index + 1, %verdict, "case judged");

        CaseResult {
            index,
            input: case.input.clone(),
            expected_output: case.expected_output.clone(),
            actual_output,
            passed: verdict == Verdict::Accepted,
            verdict,
            error,
            hidden: case.hidden,
        }
    }

    /// Judge every case in order, stopping at the first failure unless
    /// `keep_going` is set. The suite status is the verdict of the first
    /// failing case; an empty suite is accepted.
    #[must_use]
    pub fn run_suite(&self, suite: &Suite) -> SuiteReport {
        info!(suite = %suite.name, cases = suite.test_cases.len(), "judging suite");

        let mut results = Vec::with_capacity(suite.test_cases.len());
        let mut status = Verdict::Accepted;
        let mut failure_reason = None;

        for (index, case) in suite.test_cases.iter().enumerate() {
            let result = self.run_case(index, case);
            let failed = !result.passed;

            if failed && status == Verdict::Accepted {
                status = result.verdict;
                failure_reason = Some(match &result.error {
                    Some(error) => error.clone(),
                    None => format!("Test case {} failed", index + 1),
                });
                warn!(suite = %suite.name, case = index + 1, verdict = %status, "case failed");
            }
            results.push(result);

            if failed && !self.keep_going {
                break;
            }
        }

        let passed = results.iter().filter(|result| result.passed).count();
        info!(suite = %suite.name, %status, passed, total = suite.test_cases.len(), "suite judged");

        SuiteReport {
            name: suite.name.clone(),
            status,
            results,
            failure_reason,
            passed,
            total: suite.test_cases.len(),
        }
    }

    fn evaluate(&self, input: &str, filename: &str) -> Result<String, RevintError> {
        let value = Parser::new_with_filename(input, filename)?
            .with_mode(self.mode)
            .parse()?
            .single()?;
        Ok(reverse_wide(value).to_string())
    }
}
