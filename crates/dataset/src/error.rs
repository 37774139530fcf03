//! Dataset Error Types

use thiserror::Error;

/// Errors while loading a feature table from disk
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Underlying file could not be read or parsed as CSV
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be parsed as a number
    #[error("row {row}, column '{column}': cannot parse '{value}' as a number")]
    BadCell {
        row: usize,
        column: String,
        value: String,
    },
}

/// Errors while selecting features by name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownFeatureError {
    /// Requested name is outside the fixed feature catalog
    #[error("'{0}' is not in the feature catalog")]
    NotInCatalog(String),

    /// Name is in the catalog but the table has no such column
    #[error("table has no column '{0}'")]
    MissingColumn(String),
}
