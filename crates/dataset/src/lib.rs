//! Feature Dataset Layer
//!
//! Loads computed-feature tables from CSV and projects columns against the
//! fixed feature catalog.

mod error;
mod loader;
mod select;
mod table;

pub use error::{DataLoadError, UnknownFeatureError};
pub use loader::{load, load_or_empty};
pub use select::{select, select_all};
pub use table::FeatureTable;
