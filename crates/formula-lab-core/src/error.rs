//! Error types for formula-lab-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in formula-lab-core
///
/// Evaluation outcomes such as an unparseable number or a lookup miss are
/// not errors; they are carried as [`CellError`](crate::CellError) values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input field name not recognised
    #[error("Unknown input field: {0}")]
    UnknownField(String),

    /// Pivot grouping field not recognised
    #[error("Unknown pivot field: {0} (expected category, region or product)")]
    UnknownPivotField(String),

    /// Malformed `field=value` assignment
    #[error("Invalid assignment '{0}': expected field=value")]
    InvalidAssignment(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
