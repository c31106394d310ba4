//! User settings for fiberplan
//!
//! Manages estimation defaults: the monthly income assumption applied to new
//! projects and the fleet-wide growth rate used by annual rollups when a
//! project does not specify its own.

use serde::{Deserialize, Serialize};

use super::paths::FiberPaths;
use crate::error::EstimatorError;
use crate::models::Money;

/// User settings for fiberplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default monthly income per customer applied to newly created projects
    #[serde(default)]
    pub monthly_income_per_customer: Money,

    /// Fleet-wide growth percentage used by annual rollups for projects that
    /// specify no growth of their own
    #[serde(default = "default_annual_growth")]
    pub annual_growth_percentage: f64,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_annual_growth() -> f64 {
    30.0
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_income_per_customer: Money::zero(),
            annual_growth_percentage: default_annual_growth(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FiberPaths) -> Result<Self, EstimatorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| EstimatorError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EstimatorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FiberPaths) -> Result<(), EstimatorError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EstimatorError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| EstimatorError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.monthly_income_per_customer.is_zero());
        assert_eq!(settings.annual_growth_percentage, 30.0);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_income_per_customer = Money::from_dollars(65.0);
        settings.annual_growth_percentage = 25.0;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_income_per_customer, Money::from_dollars(65.0));
        assert_eq!(loaded.annual_growth_percentage, 25.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(
            settings.annual_growth_percentage,
            deserialized.annual_growth_percentage
        );
    }
}
