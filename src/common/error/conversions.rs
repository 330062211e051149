//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::table::TableError;

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        match err {
            TableError::EmptySpan { .. } => Error::EmptySpan(err.to_string()),
            TableError::RowOutOfBounds { .. } | TableError::ColOutOfBounds { .. } => {
                Error::MalformedSpan(err.to_string())
            },
            TableError::IncompleteGrid { .. } => Error::IncompleteGrid(err.to_string()),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
