//! Unified error type for tabgrid operations.
use thiserror::Error;

/// Main error type for tabgrid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A cell span references grid indices outside the table dimensions
    #[error("Malformed span: {0}")]
    MalformedSpan(String),

    /// A cell carries an empty row or column span
    #[error("Empty span: {0}")]
    EmptySpan(String),

    /// Assembled grid left positions uncovered (strict coverage mode)
    #[error("Incomplete grid: {0}")]
    IncompleteGrid(String),

    /// JSON parsing error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for tabgrid operations.
pub type Result<T> = std::result::Result<T, Error>;
