//! Export module for fiberplan
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: catalog and project tables (spreadsheet-compatible)
//! - JSON: machine-readable full database export
//! - YAML: human-readable full database export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_catalogs_csv, export_projects_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
