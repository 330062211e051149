//! Input data model: annotated cells and the tables that contain them.
//!
//! The field names mirror the table structures emitted by document
//! partitioning services (`num_rows`, `num_cols`, `cells`, each cell with
//! `rows`, `cols`, `content`, `is_header`), so both types deserialize
//! directly out of a response element.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A contiguous, ascending run of grid indices covered by one cell.
///
/// Spans are short in practice (merged cells rarely cover more than a
/// handful of rows or columns), so they live inline up to 8 entries.
pub type Span = SmallVec<[u32; 8]>;

/// One annotated rectangular region of a table grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Grid row indices the cell spans (0-based, contiguous, ascending)
    pub rows: Span,
    /// Grid column indices the cell spans (0-based, contiguous, ascending)
    pub cols: Span,
    /// Text content of the cell
    pub content: String,
    /// Whether the cell is part of the table's header.
    ///
    /// Partitioning services omit this field for plain data cells, so it
    /// defaults to `false` when absent.
    #[serde(default)]
    pub is_header: bool,
}

impl Cell {
    /// Create a data cell covering the given row and column spans.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabgrid::Cell;
    ///
    /// // A cell merged across columns 0..=1 of row 2
    /// let cell = Cell::data(&[2], &[0, 1], "Alice");
    /// assert!(!cell.is_header);
    /// ```
    pub fn data(rows: &[u32], cols: &[u32], content: &str) -> Self {
        Cell {
            rows: Span::from_slice(rows),
            cols: Span::from_slice(cols),
            content: content.to_string(),
            is_header: false,
        }
    }

    /// Create a header cell covering the given row and column spans.
    pub fn header(rows: &[u32], cols: &[u32], content: &str) -> Self {
        Cell {
            is_header: true,
            ..Cell::data(rows, cols, content)
        }
    }
}

/// A table as delivered by the upstream producer: grid dimensions plus an
/// unordered collection of span-annotated cells.
///
/// The cell set is expected to tile the grid `[0, num_rows) x [0, num_cols)`
/// without gaps. Overlaps are tolerated and resolved last-writer-wins in
/// scan order; gaps are tolerated by default and rejected only under
/// [`ReconstructOptions::check_coverage`](crate::ReconstructOptions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Number of rows in the logical grid
    pub num_rows: u32,
    /// Number of columns in the logical grid
    pub num_cols: u32,
    /// The annotated cells, in no particular order
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Table {
    /// Create a new table from grid dimensions and a cell list.
    pub fn new(num_rows: u32, num_cols: u32, cells: Vec<Cell>) -> Self {
        Table {
            num_rows,
            num_cols,
            cells,
        }
    }
}
