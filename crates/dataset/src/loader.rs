//! CSV Dataset Loading

use crate::error::DataLoadError;
use crate::table::FeatureTable;
use std::path::Path;
use tracing::{debug, warn};

/// Load a feature table from a CSV file with a header row.
///
/// The loader is agnostic to which columns are present; every cell must
/// parse as a number. Failures surface as typed errors so the caller can
/// distinguish a missing file from a malformed one.
pub fn load(path: impl AsRef<Path>) -> Result<FeatureTable, DataLoadError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(columns.len());
        for (col_idx, cell) in record.iter().enumerate() {
            let value: f64 = cell.trim().parse().map_err(|_| DataLoadError::BadCell {
                row: row_idx,
                column: columns.get(col_idx).cloned().unwrap_or_default(),
                value: cell.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), columns = columns.len(), "loaded dataset");
    Ok(FeatureTable::new(columns, rows))
}

/// Load a feature table, swallowing any failure into the empty table.
///
/// Preserves the legacy contract: callers detect "no data" by checking
/// [`FeatureTable::is_empty`], not by catching an error. Prefer [`load`]
/// where the cause matters.
pub fn load_or_empty(path: impl AsRef<Path>) -> FeatureTable {
    let path = path.as_ref();
    match load(path) {
        Ok(table) => table,
        Err(error) => {
            warn!(path = %path.display(), %error, "dataset load failed, returning empty table");
            FeatureTable::empty()
        }
    }
}
