//! Storage initialization
//!
//! Handles first-run setup: seeds empty data files and default settings so
//! every later load sees well-formed JSON.

use crate::config::paths::FiberPaths;
use crate::config::settings::Settings;
use crate::error::EstimatorError;
use crate::models::{AnnualProject, Department, LaborRate, MileageRate, ProjectArea, Unit};

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the data directory, seeds each missing data file with an empty
/// list, and persists default settings. Existing files are left untouched.
pub fn initialize_storage(paths: &FiberPaths) -> Result<(), EstimatorError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    seed_if_missing::<Department>(paths.departments_file())?;
    seed_if_missing::<Unit>(paths.units_file())?;
    seed_if_missing::<LaborRate>(paths.labor_rates_file())?;
    seed_if_missing::<MileageRate>(paths.mileage_rates_file())?;
    seed_if_missing::<ProjectArea>(paths.projects_file())?;
    seed_if_missing::<AnnualProject>(paths.annual_projects_file())?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FiberPaths) -> bool {
    !paths.settings_file().exists()
}

fn seed_if_missing<T: serde::Serialize>(
    path: std::path::PathBuf,
) -> Result<(), EstimatorError> {
    if !path.exists() {
        write_json_atomic(&path, &Vec::<T>::new())?;
    }
    Ok(())
}
