//! Catalog-Validated Feature Selection

use crate::error::UnknownFeatureError;
use crate::table::FeatureTable;
use feature_engine::{is_known_feature, ALL_FEATURES};

/// Project a table onto the requested feature columns.
///
/// Every name must belong to the fixed feature catalog and be present in
/// the table; row order is preserved. Output columns follow the order of
/// `names`.
pub fn select(table: &FeatureTable, names: &[&str]) -> Result<FeatureTable, UnknownFeatureError> {
    let mut indices = Vec::with_capacity(names.len());
    for &name in names {
        if !is_known_feature(name) {
            return Err(UnknownFeatureError::NotInCatalog(name.to_string()));
        }
        let idx = table
            .column_index(name)
            .ok_or_else(|| UnknownFeatureError::MissingColumn(name.to_string()))?;
        indices.push(idx);
    }
    let columns = names.iter().map(|n| n.to_string()).collect();
    Ok(table.project(columns, &indices))
}

/// Project a table onto the full fixed catalog, in catalog order
pub fn select_all(table: &FeatureTable) -> Result<FeatureTable, UnknownFeatureError> {
    select(table, &ALL_FEATURES)
}
