//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors from misusing the formula API
///
/// These are caller mistakes. Bad user input never produces one of these;
/// it produces a [`FormulaValue::Error`](crate::FormulaValue::Error).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// Invalid argument
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}
