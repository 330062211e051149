//! Dense-table reconstruction from span-annotated cells.
//!
//! A [`Table`] arrives as a sparse list of [`Cell`]s, each covering a
//! rectangular span of a `num_rows` x `num_cols` grid and flagged as header
//! or data. [`Table::reconstruct`] runs four stages, strictly in order:
//!
//! 1. collect the sorted set of grid rows touched by header cells,
//! 2. detect how many leading rows form the contiguous header region,
//! 3. expand every cell span into a dense grid of strings,
//! 4. flatten the header region into one label per column.
//!
//! The result is a [`ReconstructedTable`]: an optional row of column labels
//! plus the data rows below the header region. Each call owns its grid
//! exclusively, so independent tables may be reconstructed concurrently.

// Submodule declarations
pub mod config;
pub mod error;
mod grid;
mod reconstruct;
mod render;
pub mod types;


// Re-exports for convenience
pub use config::ReconstructOptions;
pub use error::{TableError, TableResult};
pub use reconstruct::{ReconstructedTable, reconstruct_all};
pub use types::{Cell, Span, Table};
