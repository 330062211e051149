//! Plain-text renderings of a reconstructed table.
//!
//! Downstream consumers usually materialize the output into their own
//! tabular container; these renderers cover the common cases of dumping a
//! table for inspection or export without one.

use crate::table::reconstruct::ReconstructedTable;

impl ReconstructedTable {
    /// Whether a header region was detected.
    pub fn has_header(&self) -> bool {
        self.column_labels.is_some()
    }

    /// Number of columns, from the labels or the first data row.
    pub fn num_cols(&self) -> usize {
        self.column_labels
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.data_rows.first().map(Vec::len))
            .unwrap_or(0)
    }

    /// Number of data rows below the header region.
    pub fn num_data_rows(&self) -> usize {
        self.data_rows.len()
    }

    /// Render as CSV, labels first when present.
    ///
    /// Fields containing quotes, commas, or line breaks are quoted with
    /// doubled inner quotes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabgrid::{Cell, Table};
    ///
    /// let table = Table::new(2, 2, vec![
    ///     Cell::header(&[0], &[0], "Name"),
    ///     Cell::header(&[0], &[1], "Age"),
    ///     Cell::data(&[1], &[0], "Alice"),
    ///     Cell::data(&[1], &[1], "30"),
    /// ]);
    ///
    /// let dense = table.reconstruct()?;
    /// assert_eq!(dense.to_csv(), "Name,Age\nAlice,30\n");
    /// # Ok::<(), tabgrid::TableError>(())
    /// ```
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        if let Some(labels) = &self.column_labels {
            write_csv_row(&mut out, labels);
        }
        for row in &self.data_rows {
            write_csv_row(&mut out, row);
        }
        out
    }

    /// Render as a Markdown pipe table.
    ///
    /// Markdown tables require a header row, so a blank one is emitted when
    /// no header region was detected.
    pub fn to_markdown(&self) -> String {
        let num_cols = self.num_cols();
        if num_cols == 0 {
            return String::new();
        }

        let mut out = String::new();
        match &self.column_labels {
            Some(labels) => write_markdown_row(&mut out, labels),
            None => {
                out.push('|');
                for _ in 0..num_cols {
                    out.push_str("   |");
                }
                out.push('\n');
            },
        }

        out.push('|');
        for _ in 0..num_cols {
            out.push_str(" --- |");
        }
        out.push('\n');

        for row in &self.data_rows {
            write_markdown_row(&mut out, row);
        }
        out
    }
}

fn write_csv_row(out: &mut String, row: &[String]) {
    for (i, field) in row.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_csv_field(out, field);
    }
    out.push('\n');
}

fn write_csv_field(out: &mut String, field: &str) {
    if field.contains(['"', ',', '\n', '\r']) {
        out.push('"');
        for ch in field.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn write_markdown_row(out: &mut String, row: &[String]) {
    out.push('|');
    for field in row {
        out.push(' ');
        for ch in field.chars() {
            if ch == '|' {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push_str(" |");
    }
    out.push('\n');
}
