//! Test suites as stored on disk
//!
//! Field names follow the practice-problem JSON (`testCases`,
//! `expectedOutput`, `isHidden`). Inputs and expected outputs may be
//! written as strings or as bare JSON numbers; an input array puts one
//! argument per line.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::HarnessError;

/// One input/expected-output pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(deserialize_with = "input_text")]
    pub input: String,
    #[serde(deserialize_with = "output_text")]
    pub expected_output: String,
    #[serde(default, rename = "isHidden")]
    pub hidden: bool,
}

impl TestCase {
    #[must_use]
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
            hidden: false,
        }
    }

    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Named collection of test cases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suite {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "cases")]
    pub test_cases: Vec<TestCase>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SuiteFile {
    Suite(Suite),
    Cases(Vec<TestCase>),
}

impl Suite {
    #[must_use]
    pub fn new(name: impl Into<String>, test_cases: Vec<TestCase>) -> Self {
        Self {
            name: name.into(),
            test_cases,
        }
    }

    /// Parse a suite object, or a bare array of test cases
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::Json` if the text is not a valid suite
    pub fn from_json(text: &str) -> Result<Self, HarnessError> {
        Ok(match serde_json::from_str(text)? {
            SuiteFile::Suite(suite) => suite,
            SuiteFile::Cases(test_cases) => Self {
                name: String::new(),
                test_cases,
            },
        })
    }

    /// Read and parse a suite file; an unnamed suite takes the file stem
    ///
    /// # Errors
    ///
    /// Returns `HarnessError` if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut suite = Self::from_json(&text)?;
        if suite.name.is_empty() {
            if let Some(stem) = path.file_stem() {
                suite.name = stem.to_string_lossy().into_owned();
            }
        }
        Ok(suite)
    }
}

fn scalar_text(value: Value) -> Result<String, String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(format!("expected a string or number, found {other}")),
    }
}

fn input_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(scalar_text)
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| lines.join("\n"))
            .map_err(serde::de::Error::custom),
        value => scalar_text(value).map_err(serde::de::Error::custom),
    }
}

fn output_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        value => Ok(value.to_string()),
    }
}
