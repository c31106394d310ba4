//! Department model
//!
//! Departments are grouping buckets for units (e.g., "Outside Plant",
//! "Drop Installation"). They carry no pricing of their own and exist for
//! cost-breakdown presentation grouping.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DepartmentId;

/// A grouping bucket for units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier
    pub id: DepartmentId,

    /// Department name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Department {
    /// Create a new department
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DepartmentId::new(),
            name: name.into(),
            description: None,
        }
    }

    /// Create a new department with a description
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut department = Self::new(name);
        department.description = Some(description.into());
        department
    }

    /// Validate the department
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.name.trim().is_empty() {
            return Err(CatalogValidationError::EmptyName);
        }

        if self.name.len() > 80 {
            return Err(CatalogValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors shared by the catalog models
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeCost(f64),
    NegativeDistance(f64),
}

impl fmt::Display for CatalogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Name too long ({} chars, max 80)", len),
            Self::NegativeCost(cost) => write!(f, "Cost cannot be negative: {}", cost),
            Self::NegativeDistance(distance) => {
                write!(f, "Distance cannot be negative: {}", distance)
            }
        }
    }
}

impl std::error::Error for CatalogValidationError {}
