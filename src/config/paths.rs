//! Path management for fiberplan
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `FIBERPLAN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fiberplan` or `~/.config/fiberplan`
//! 3. Windows: `%APPDATA%\fiberplan`

use std::path::PathBuf;

use crate::error::EstimatorError;

/// Manages all paths used by fiberplan
#[derive(Debug, Clone)]
pub struct FiberPaths {
    /// Base directory for all fiberplan data
    base_dir: PathBuf,
}

impl FiberPaths {
    /// Create a new FiberPaths instance
    ///
    /// Path resolution:
    /// 1. `FIBERPLAN_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/fiberplan` or `~/.config/fiberplan`
    /// 3. Windows: `%APPDATA%\fiberplan`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EstimatorError> {
        let base_dir = if let Ok(custom) = std::env::var("FIBERPLAN_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FiberPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fiberplan/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/fiberplan/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to units.json
    pub fn units_file(&self) -> PathBuf {
        self.data_dir().join("units.json")
    }

    /// Get the path to departments.json
    pub fn departments_file(&self) -> PathBuf {
        self.data_dir().join("departments.json")
    }

    /// Get the path to labor-rates.json
    pub fn labor_rates_file(&self) -> PathBuf {
        self.data_dir().join("labor-rates.json")
    }

    /// Get the path to mileage-rates.json
    pub fn mileage_rates_file(&self) -> PathBuf {
        self.data_dir().join("mileage-rates.json")
    }

    /// Get the path to projects.json
    pub fn projects_file(&self) -> PathBuf {
        self.data_dir().join("projects.json")
    }

    /// Get the path to annual-projects.json
    pub fn annual_projects_file(&self) -> PathBuf {
        self.data_dir().join("annual-projects.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/fiberplan/)
    /// - Data directory (~/.config/fiberplan/data/)
    pub fn ensure_directories(&self) -> Result<(), EstimatorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EstimatorError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EstimatorError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if fiberplan has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EstimatorError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("fiberplan"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EstimatorError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EstimatorError::Config("APPDATA environment variable not set".into()))?;
    Ok(PathBuf::from(appdata).join("fiberplan"))
}
