//! JSON Export functionality
//!
//! Exports the complete database to JSON format with schema versioning.

use crate::error::EstimatorResult;
use crate::models::{AnnualProject, Department, LaborRate, MileageRate, ProjectArea, Unit};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All departments
    pub departments: Vec<Department>,

    /// All units
    pub units: Vec<Unit>,

    /// All labor rates
    pub labor_rates: Vec<LaborRate>,

    /// All mileage rates
    pub mileage_rates: Vec<MileageRate>,

    /// All project areas
    pub projects: Vec<ProjectArea>,

    /// All annual projects
    pub annual_projects: Vec<AnnualProject>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of departments
    pub department_count: usize,

    /// Total number of units
    pub unit_count: usize,

    /// Total number of labor rates
    pub labor_rate_count: usize,

    /// Total number of mileage rates
    pub mileage_rate_count: usize,

    /// Total number of projects
    pub project_count: usize,

    /// Total number of annual projects
    pub annual_project_count: usize,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> EstimatorResult<Self> {
        let departments = storage.departments.get_all()?;
        let units = storage.units.get_all()?;
        let labor_rates = storage.labor_rates.get_all()?;
        let mileage_rates = storage.mileage_rates.get_all()?;
        let projects = storage.projects.get_all()?;
        let annual_projects = storage.annual_projects.get_all()?;

        let metadata = ExportMetadata {
            department_count: departments.len(),
            unit_count: units.len(),
            labor_rate_count: labor_rates.len(),
            mileage_rate_count: mileage_rates.len(),
            project_count: projects.len(),
            annual_project_count: annual_projects.len(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            departments,
            units,
            labor_rates,
            mileage_rates,
            projects,
            annual_projects,
            metadata,
        })
    }
}

/// Export the full database as pretty JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> EstimatorResult<()> {
    let export = FullExport::from_storage(storage)?;
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| crate::error::EstimatorError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FiberPaths;
    use crate::models::Money;
    use crate::services::CatalogService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export_counts() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = CatalogService::new(&storage);

        catalog.create_department("Drops", None).unwrap();
        catalog
            .create_mileage_rate(10.0, Money::from_dollars(0.67))
            .unwrap();

        let export = FullExport::from_storage(&storage).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.department_count, 1);
        assert_eq!(export.metadata.mileage_rate_count, 1);
        assert_eq!(export.metadata.project_count, 0);
    }

    #[test]
    fn test_export_round_trips() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = CatalogService::new(&storage);
        catalog.create_department("Drops", None).unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.departments.len(), 1);
        assert_eq!(parsed.departments[0].name, "Drops");
    }
}
