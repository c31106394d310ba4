//! Custom error types for fiberplan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fiberplan operations
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl EstimatorError {
    /// Create a "not found" error for departments
    pub fn department_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Department",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for units
    pub fn unit_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Unit",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for labor rates
    pub fn labor_rate_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Labor rate",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for mileage rates
    pub fn mileage_rate_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Mileage rate",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for projects
    pub fn project_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Project",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for annual projects
    pub fn annual_project_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Annual project",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for EstimatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fiberplan operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = EstimatorError::unit_not_found("Drop Cable");
        assert_eq!(err.to_string(), "Unit not found: Drop Cable");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let err = EstimatorError::Validation("cost cannot be negative".into());
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let est_err: EstimatorError = io_err.into();
        assert!(matches!(est_err, EstimatorError::Io(_)));
    }
}
