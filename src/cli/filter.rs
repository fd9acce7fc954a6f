//! Run sift queries against JSON input

use super::CliError;
use crate::{SiftOptions, Sifter, Value};

/// Options shared by the `filter` and `test` commands
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// The JSON query
    pub query: String,
    /// JSON documents (`filter`) or document (`test`)
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Maximum query nesting depth
    pub max_depth: Option<usize>,
}

impl FilterOptions {
    fn sifter(&self) -> Sifter {
        Sifter::new(SiftOptions {
            max_depth: self.max_depth,
        })
    }

    fn decode(&self) -> Result<(Value, Value), CliError> {
        let input = self.input.as_deref().ok_or(CliError::NoInput)?;
        let query = Value::from_json_str(&self.query)?;
        let documents = Value::from_json_str(input)?;
        Ok((query, documents))
    }
}

/// Result of the `test` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Match,
    NoMatch,
}

impl TestOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            TestOutcome::Match => "true",
            TestOutcome::NoMatch => "false",
        }
    }
}

/// Filter the input documents, returning the matches as a JSON array
pub fn execute_filter(options: &FilterOptions) -> Result<serde_json::Value, CliError> {
    let (query, documents) = options.decode()?;
    let matches = options.sifter().sift(&query, &documents);
    Ok(serde_json::Value::Array(
        matches.into_iter().map(serde_json::Value::from).collect(),
    ))
}

/// Test a single input document against the query
pub fn execute_test(options: &FilterOptions) -> Result<TestOutcome, CliError> {
    let (query, document) = options.decode()?;
    if options.sifter().compare(&query, &document) {
        Ok(TestOutcome::Match)
    } else {
        Ok(TestOutcome::NoMatch)
    }
}
