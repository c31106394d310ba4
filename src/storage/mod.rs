//! Storage layer for fiberplan
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. One file per entity type, mirroring how the data is edited:
//! catalogs and projects change independently of each other.

pub mod annual;
pub mod departments;
pub mod file_io;
pub mod init;
pub mod projects;
pub mod rates;
pub mod units;

pub use annual::AnnualProjectRepository;
pub use departments::DepartmentRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use projects::ProjectRepository;
pub use rates::{LaborRateRepository, MileageRateRepository};
pub use units::UnitRepository;

use crate::config::paths::FiberPaths;
use crate::error::EstimatorError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FiberPaths,
    pub departments: DepartmentRepository,
    pub units: UnitRepository,
    pub labor_rates: LaborRateRepository,
    pub mileage_rates: MileageRateRepository,
    pub projects: ProjectRepository,
    pub annual_projects: AnnualProjectRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FiberPaths) -> Result<Self, EstimatorError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            departments: DepartmentRepository::new(paths.departments_file()),
            units: UnitRepository::new(paths.units_file()),
            labor_rates: LaborRateRepository::new(paths.labor_rates_file()),
            mileage_rates: MileageRateRepository::new(paths.mileage_rates_file()),
            projects: ProjectRepository::new(paths.projects_file()),
            annual_projects: AnnualProjectRepository::new(paths.annual_projects_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FiberPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), EstimatorError> {
        self.departments.load()?;
        self.units.load()?;
        self.labor_rates.load()?;
        self.mileage_rates.load()?;
        self.projects.load()?;
        self.annual_projects.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), EstimatorError> {
        self.departments.save()?;
        self.units.save()?;
        self.labor_rates.save()?;
        self.mileage_rates.save()?;
        self.projects.save()?;
        self.annual_projects.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_and_save_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        storage.save_all().unwrap();

        assert!(temp_dir.path().join("data/units.json").exists());
        assert!(temp_dir.path().join("data/projects.json").exists());
        assert!(temp_dir.path().join("data/annual-projects.json").exists());
    }
}
