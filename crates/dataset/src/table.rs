//! In-Memory Feature Table

use serde::{Deserialize, Serialize};

/// A numeric table of computed features: ordered column names plus
/// row-major values.
///
/// The zero-row, zero-column table doubles as the "no data" sentinel for
/// callers of the lossy load path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    /// The empty table (zero rows, zero columns)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from column names and row-major values.
    ///
    /// Every row must have exactly one value per column; violations are a
    /// programming error, so this panics rather than returning a result.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                columns.len(),
                "row {i} width does not match column count"
            );
        }
        Self { columns, rows }
    }

    /// Whether the table holds no data at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    /// Column names, in table order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Row values, in insertion order
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of a named column, preserving row order
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Project the table onto the columns at `indices`, preserving row order
    pub(crate) fn project(&self, names: Vec<String>, indices: &[usize]) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i]).collect())
            .collect();
        Self {
            columns: names,
            rows,
        }
    }
}
