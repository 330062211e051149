//! Error types for table reconstruction.
use thiserror::Error;

/// Result type for table reconstruction.
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors that can occur while reconstructing a dense table.
///
/// All errors are local to a single table's reconstruction; one malformed
/// table never blocks reconstruction of the others in a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A cell has an empty row or column span
    #[error("cell has an empty {what} span")]
    EmptySpan {
        /// Which span was empty, `"row"` or `"column"`
        what: &'static str,
    },

    /// A cell's row span reaches outside the grid
    #[error("cell row {row} is outside the table grid (num_rows = {num_rows})")]
    RowOutOfBounds {
        /// Offending row index
        row: u32,
        /// Number of rows in the grid
        num_rows: u32,
    },

    /// A cell's column span reaches outside the grid
    #[error("cell column {col} is outside the table grid (num_cols = {num_cols})")]
    ColOutOfBounds {
        /// Offending column index
        col: u32,
        /// Number of columns in the grid
        num_cols: u32,
    },

    /// The cell set left a grid position uncovered (strict coverage mode)
    #[error("no cell covers grid position ({row}, {col})")]
    IncompleteGrid {
        /// Row of the first uncovered position
        row: u32,
        /// Column of the first uncovered position
        col: u32,
    },
}
