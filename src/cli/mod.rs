//! CLI support for sift-query
//!
//! Provides programmatic access to the `sift` command-line functionality so
//! other tools can embed it.

mod docs;
mod filter;

pub use docs::{get_operator_doc, get_operators_overview};
pub use filter::{execute_filter, execute_test, FilterOptions, TestOutcome};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Query or documents were not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading stdin failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No documents provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    /// `sift op` was asked about an operator that does not exist
    #[error("Unknown operator: '{0}'\nRun 'sift ops' to see available operators.")]
    UnknownOperator(String),
}
