//! The four reconstruction stages: header-row collection, header-prefix
//! detection, span expansion into a dense grid, and header flattening.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::table::config::ReconstructOptions;
use crate::table::error::{TableError, TableResult};
use crate::table::grid::DenseGrid;
use crate::table::types::{Cell, Table};

/// The dense result of reconstructing one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedTable {
    /// One resolved label per column, present only when a header region of
    /// at least one row was detected.
    pub column_labels: Option<Vec<String>>,
    /// Every grid row below the header region, top to bottom, one string
    /// per column.
    pub data_rows: Vec<Vec<String>>,
}

impl Table {
    /// Reconstruct this table into a dense grid with default options.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabgrid::{Cell, Table};
    ///
    /// let table = Table::new(3, 2, vec![
    ///     Cell::header(&[0, 1], &[0, 1], "Name"),
    ///     Cell::data(&[2], &[0], "Alice"),
    ///     Cell::data(&[2], &[1], "30"),
    /// ]);
    ///
    /// let dense = table.reconstruct()?;
    /// assert_eq!(dense.column_labels.unwrap(), ["Name", "Name"]);
    /// assert_eq!(dense.data_rows, vec![vec!["Alice", "30"]]);
    /// # Ok::<(), tabgrid::TableError>(())
    /// ```
    pub fn reconstruct(&self) -> TableResult<ReconstructedTable> {
        self.reconstruct_with_options(&ReconstructOptions::default())
    }

    /// Reconstruct this table into a dense grid.
    pub fn reconstruct_with_options(
        &self,
        options: &ReconstructOptions,
    ) -> TableResult<ReconstructedTable> {
        let header_rows = header_prefix_rows(&header_row_set(&self.cells));
        let grid = assemble_grid(self, header_rows)?;

        if options.check_coverage {
            if let Some((row, col)) = grid.first_unwritten() {
                return Err(TableError::IncompleteGrid { row, col });
            }
        }

        let (column_labels, data_rows) = flatten(grid, header_rows, &options.label_separator);
        Ok(ReconstructedTable {
            column_labels,
            data_rows,
        })
    }
}

/// Reconstruct many tables, isolating failures per table.
///
/// A malformed table yields an `Err` in its slot and never blocks the
/// reconstruction of the tables around it.
pub fn reconstruct_all<'a, I>(
    tables: I,
    options: &ReconstructOptions,
) -> Vec<TableResult<ReconstructedTable>>
where
    I: IntoIterator<Item = &'a Table>,
{
    tables
        .into_iter()
        .map(|table| table.reconstruct_with_options(options))
        .collect()
}

/// Stage 1: the sorted, deduplicated set of grid row indices touched by any
/// header-flagged cell. Empty when the table has no header cells.
pub(crate) fn header_row_set(cells: &[Cell]) -> Vec<u32> {
    let mut rows: Vec<u32> = cells
        .iter()
        .filter(|cell| cell.is_header)
        .flat_map(|cell| cell.rows.iter().copied())
        .collect();
    rows.sort_unstable();
    rows.dedup();
    rows
}

/// Stage 2: the number of leading grid rows forming the header region.
///
/// Scans the sorted header row set for the run `0, 1, 2, ...`. When the set
/// has a gap, the row at the break index is still counted, so a row no
/// header cell touches can end up folded into the header region: header
/// rows `{0, 1, 2, 4}` yield a four-row header that swallows row 3.
/// Downstream consumers of the partitioning pipeline depend on this exact
/// policy, so it is preserved as-is rather than corrected.
pub(crate) fn header_prefix_rows(header_rows: &[u32]) -> usize {
    for (i, &row) in header_rows.iter().enumerate() {
        if row as usize != i {
            return i + 1;
        }
    }
    header_rows.len()
}

fn validate_cell(cell: &Cell, num_rows: u32, num_cols: u32) -> TableResult<()> {
    if cell.rows.is_empty() {
        return Err(TableError::EmptySpan { what: "row" });
    }
    if cell.cols.is_empty() {
        return Err(TableError::EmptySpan { what: "column" });
    }
    for &row in &cell.rows {
        if row >= num_rows {
            return Err(TableError::RowOutOfBounds { row, num_rows });
        }
    }
    for &col in &cell.cols {
        if col >= num_cols {
            return Err(TableError::ColOutOfBounds { col, num_cols });
        }
    }
    Ok(())
}

/// Stage 3: expand every cell span into the dense grid.
///
/// Cells are applied in scan order and later writes win. A header cell
/// whose span starts inside the header region has its content replicated
/// across its full column span on the span's top row, with the lower rows
/// of the span blanked. Every other cell keeps its content only at the
/// top-left position of its span, with the rest blanked, so no text is
/// duplicated when the grid is read row by row.
///
/// All spans are validated up front, so an out-of-bounds cell fails the
/// whole table before anything is written.
pub(crate) fn assemble_grid(table: &Table, header_rows: usize) -> TableResult<DenseGrid> {
    for cell in &table.cells {
        validate_cell(cell, table.num_rows, table.num_cols)?;
    }

    let mut grid = DenseGrid::new(table.num_rows, table.num_cols);
    for cell in &table.cells {
        if cell.is_header && (cell.rows[0] as usize) < header_rows {
            for &col in &cell.cols {
                grid.set(cell.rows[0], col, &cell.content);
            }
            for &row in &cell.rows[1..] {
                for &col in &cell.cols {
                    grid.set(row, col, "");
                }
            }
        } else {
            grid.set(cell.rows[0], cell.cols[0], &cell.content);
            for &col in &cell.cols[1..] {
                grid.set(cell.rows[0], col, "");
            }
            for &row in &cell.rows[1..] {
                for &col in &cell.cols {
                    grid.set(row, col, "");
                }
            }
        }
    }
    Ok(grid)
}

/// Stage 4: split off the header region and flatten it into column labels.
///
/// Per column, the header region is read top to bottom; empty values are
/// dropped, the first occurrence of each distinct value is kept (later
/// duplicates dropped, relative order preserved), and the survivors are
/// joined with `separator`. With no header region, every grid row is a
/// data row and the labels are absent.
pub(crate) fn flatten(
    grid: DenseGrid,
    header_rows: usize,
    separator: &str,
) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    let mut rows = grid.into_rows();
    if header_rows == 0 {
        return (None, rows);
    }

    // Spans were validated, so header_rows never exceeds the grid height.
    let data_rows = rows.split_off(header_rows);
    let num_cols = rows[0].len();

    let mut labels = Vec::with_capacity(num_cols);
    for col in 0..num_cols {
        let mut seen = HashSet::new();
        let mut parts: Vec<&str> = Vec::new();
        for row in &rows {
            let value = row[col].as_str();
            if !value.is_empty() && seen.insert(value) {
                parts.push(value);
            }
        }
        labels.push(parts.join(separator));
    }
    (Some(labels), data_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row_set_sorts_and_dedups() {
        let cells = vec![
            Cell::header(&[2], &[0], "b"),
            Cell::data(&[3], &[0], "x"),
            Cell::header(&[0, 1], &[0], "a"),
            Cell::header(&[1, 2], &[1], "c"),
        ];
        assert_eq!(header_row_set(&cells), vec![0, 1, 2]);
    }

    #[test]
    fn test_header_row_set_empty_without_header_cells() {
        let cells = vec![Cell::data(&[0], &[0], "x")];
        assert!(header_row_set(&cells).is_empty());
    }

    #[test]
    fn test_header_prefix_rows() {
        // No header rows at all
        assert_eq!(header_prefix_rows(&[]), 0);
        // Fully contiguous prefix
        assert_eq!(header_prefix_rows(&[0]), 1);
        assert_eq!(header_prefix_rows(&[0, 1, 2]), 3);
        // Gap after row 2: the break index is folded in, absorbing row 3
        assert_eq!(header_prefix_rows(&[0, 1, 2, 4]), 4);
        // Header rows that do not start at row 0 still fold in the break index
        assert_eq!(header_prefix_rows(&[1, 2]), 1);
        assert_eq!(header_prefix_rows(&[3]), 1);
    }

    #[test]
    fn test_assemble_rejects_out_of_bounds_row() {
        let table = Table::new(3, 1, vec![Cell::data(&[5], &[0], "x")]);
        assert_eq!(
            assemble_grid(&table, 0).unwrap_err(),
            TableError::RowOutOfBounds { row: 5, num_rows: 3 }
        );
    }

    #[test]
    fn test_assemble_rejects_out_of_bounds_col() {
        let table = Table::new(1, 2, vec![Cell::data(&[0], &[0, 1, 2], "x")]);
        assert_eq!(
            assemble_grid(&table, 0).unwrap_err(),
            TableError::ColOutOfBounds { col: 2, num_cols: 2 }
        );
    }

    #[test]
    fn test_assemble_rejects_empty_spans() {
        let table = Table::new(1, 1, vec![Cell::data(&[], &[0], "x")]);
        assert_eq!(
            assemble_grid(&table, 0).unwrap_err(),
            TableError::EmptySpan { what: "row" }
        );

        let table = Table::new(1, 1, vec![Cell::data(&[0], &[], "x")]);
        assert_eq!(
            assemble_grid(&table, 0).unwrap_err(),
            TableError::EmptySpan { what: "column" }
        );
    }

    #[test]
    fn test_header_cell_replicates_across_columns_on_top_row() {
        let table = Table::new(2, 2, vec![Cell::header(&[0, 1], &[0, 1], "Name")]);
        let rows = assemble_grid(&table, 2).unwrap().into_rows();
        assert_eq!(rows[0], vec!["Name", "Name"]);
        assert_eq!(rows[1], vec!["", ""]);
    }

    #[test]
    fn test_header_cell_outside_prefix_fills_like_data() {
        // Header cell starting below the detected prefix takes the data path
        let table = Table::new(1, 2, vec![Cell::header(&[0], &[0, 1], "Late")]);
        let rows = assemble_grid(&table, 0).unwrap().into_rows();
        assert_eq!(rows[0], vec!["Late", ""]);
    }

    #[test]
    fn test_data_cell_keeps_content_top_left_only() {
        let table = Table::new(2, 2, vec![Cell::data(&[0, 1], &[0, 1], "wide")]);
        let rows = assemble_grid(&table, 0).unwrap().into_rows();
        assert_eq!(rows[0], vec!["wide", ""]);
        assert_eq!(rows[1], vec!["", ""]);
    }

    #[test]
    fn test_overlapping_cells_last_writer_wins() {
        let table = Table::new(1, 1, vec![
            Cell::data(&[0], &[0], "first"),
            Cell::data(&[0], &[0], "second"),
        ]);
        let rows = assemble_grid(&table, 0).unwrap().into_rows();
        assert_eq!(rows[0], vec!["second"]);
    }

    #[test]
    fn test_flatten_without_header_region() {
        let table = Table::new(1, 1, vec![Cell::data(&[0], &[0], "x")]);
        let grid = assemble_grid(&table, 0).unwrap();
        let (labels, data) = flatten(grid, 0, " | ");
        assert!(labels.is_none());
        assert_eq!(data, vec![vec!["x"]]);
    }

    #[test]
    fn test_flatten_dedups_and_joins() {
        let table = Table::new(2, 2, vec![
            Cell::header(&[0], &[0], "Region"),
            Cell::header(&[1], &[0], "Region"),
            Cell::header(&[0], &[1], "2023"),
            Cell::header(&[1], &[1], "Q1"),
        ]);
        let grid = assemble_grid(&table, 2).unwrap();
        let (labels, data) = flatten(grid, 2, " | ");
        assert_eq!(labels.unwrap(), ["Region", "2023 | Q1"]);
        assert!(data.is_empty());
    }

    #[test]
    fn test_flatten_skips_blanks_between_duplicates() {
        // Duplicate separated by a blanked row still collapses to one
        let table = Table::new(3, 1, vec![
            Cell::header(&[0], &[0], "Total"),
            Cell::header(&[1], &[0], ""),
            Cell::header(&[2], &[0], "Total"),
        ]);
        let grid = assemble_grid(&table, 3).unwrap();
        let (labels, _) = flatten(grid, 3, " | ");
        assert_eq!(labels.unwrap(), ["Total"]);
    }
}
