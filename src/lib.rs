//! Tabgrid - reconstruct dense tables from sparse, span-annotated cells
//!
//! Document-partitioning services describe a detected table as a flat list of
//! cells, each covering a rectangular span of a logical grid and flagged as
//! header or data. This crate turns that sparse structure into a dense
//! rectangular table: a single resolved row of column labels plus a grid of
//! data rows, one string per position.
//!
//! Reconstruction runs in four stages: collect the set of rows touched by
//! header cells, detect how many leading rows form a contiguous header
//! region, expand every cell span into a dense grid, and flatten the header
//! region into one label per column.
//!
//! # Example
//!
//! ```rust
//! use tabgrid::{Cell, Table};
//!
//! let table = Table::new(2, 2, vec![
//!     Cell::header(&[0], &[0, 1], "Name"),
//!     Cell::data(&[1], &[0], "Alice"),
//!     Cell::data(&[1], &[1], "Bob"),
//! ]);
//!
//! let dense = table.reconstruct()?;
//! assert_eq!(dense.column_labels.unwrap(), ["Name", "Name"]);
//! assert_eq!(dense.data_rows, vec![vec!["Alice", "Bob"]]);
//! # Ok::<(), tabgrid::TableError>(())
//! ```
//!
//! # Example - Tables from a partitioning response
//!
//! ```rust
//! use tabgrid::partition;
//!
//! let response = serde_json::json!({
//!     "status": [],
//!     "elements": [
//!         { "type": "text", "text_representation": "Quarterly report" },
//!         { "type": "table", "table": {
//!             "num_rows": 1, "num_cols": 1,
//!             "cells": [{ "rows": [0], "cols": [0], "content": "42" }]
//!         }},
//!     ]
//! });
//!
//! for element in partition::table_elements(&response) {
//!     let table = partition::parse_table(element)?;
//!     let dense = table.reconstruct()?;
//!     assert_eq!(dense.data_rows, vec![vec!["42"]]);
//! }
//! # Ok::<(), tabgrid::Error>(())
//! ```

pub mod common;

#[cfg(feature = "json")]
pub mod partition;

pub mod table;

// Re-exports for convenience
pub use common::{Error, Result};
pub use table::{Cell, ReconstructOptions, ReconstructedTable, Table, TableError, TableResult};
