//! YAML Export functionality
//!
//! Exports the complete database to YAML for human review and versioning.

use std::io::Write;

use crate::error::{EstimatorError, EstimatorResult};
use crate::storage::Storage;

use super::json::FullExport;

/// Export the full database as YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> EstimatorResult<()> {
    let export = FullExport::from_storage(storage)?;
    serde_yaml::to_writer(writer, &export)
        .map_err(|e| EstimatorError::Export(e.to_string()))?;
    Ok(())
}
