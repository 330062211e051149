//! Dense grid buffer owned by a single reconstruction call.

use fixedbitset::FixedBitSet;

/// A fully materialized `num_rows` x `num_cols` matrix of strings.
///
/// Positions start out unset; a [`FixedBitSet`] tracks which positions have
/// been written, which keeps an unset position distinguishable from one a
/// cell deliberately blanked with an empty string. The grid is created,
/// filled, and consumed inside one reconstruction call and never shared.
#[derive(Debug, Clone)]
pub(crate) struct DenseGrid {
    num_rows: usize,
    num_cols: usize,
    values: Vec<String>,
    written: FixedBitSet,
}

impl DenseGrid {
    /// Create a grid with every position unset.
    pub(crate) fn new(num_rows: u32, num_cols: u32) -> Self {
        let num_rows = num_rows as usize;
        let num_cols = num_cols as usize;
        DenseGrid {
            num_rows,
            num_cols,
            values: vec![String::new(); num_rows * num_cols],
            written: FixedBitSet::with_capacity(num_rows * num_cols),
        }
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.num_cols + col as usize
    }

    /// Write a value at `(row, col)`, replacing any earlier write.
    ///
    /// Bounds are the caller's responsibility; spans are validated before
    /// assembly starts.
    pub(crate) fn set(&mut self, row: u32, col: u32, value: &str) {
        let idx = self.index(row, col);
        self.values[idx].clear();
        self.values[idx].push_str(value);
        self.written.insert(idx);
    }

    /// The first position no cell has written to, in row-major order.
    pub(crate) fn first_unwritten(&self) -> Option<(u32, u32)> {
        (0..self.values.len())
            .find(|&idx| !self.written.contains(idx))
            .map(|idx| ((idx / self.num_cols) as u32, (idx % self.num_cols) as u32))
    }

    /// Consume the grid into its rows, top to bottom.
    pub(crate) fn into_rows(self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.num_rows);
        let mut values = self.values.into_iter();
        for _ in 0..self.num_rows {
            rows.push(values.by_ref().take(self.num_cols).collect());
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_earlier_writes() {
        let mut grid = DenseGrid::new(1, 1);
        grid.set(0, 0, "first");
        grid.set(0, 0, "second");
        assert_eq!(grid.into_rows(), vec![vec!["second"]]);
    }

    #[test]
    fn test_first_unwritten_reports_row_major_gap() {
        let mut grid = DenseGrid::new(2, 2);
        grid.set(0, 0, "a");
        grid.set(0, 1, "");
        grid.set(1, 1, "d");
        assert_eq!(grid.first_unwritten(), Some((1, 0)));

        grid.set(1, 0, "c");
        assert_eq!(grid.first_unwritten(), None);
    }

    #[test]
    fn test_blank_write_counts_as_written() {
        let mut grid = DenseGrid::new(1, 1);
        grid.set(0, 0, "");
        assert_eq!(grid.first_unwritten(), None);
    }

    #[test]
    fn test_into_rows_shape() {
        let mut grid = DenseGrid::new(2, 3);
        for row in 0..2 {
            for col in 0..3 {
                grid.set(row, col, &format!("{row}{col}"));
            }
        }
        let rows = grid.into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["00", "01", "02"]);
        assert_eq!(rows[1], vec!["10", "11", "12"]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = DenseGrid::new(0, 0);
        assert_eq!(grid.first_unwritten(), None);
        assert!(grid.into_rows().is_empty());
    }
}
