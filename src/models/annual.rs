//! Annual project model
//!
//! An annual project is a named set of project-area references used to roll
//! several build areas into one budget-year view. It carries no figures of
//! its own; totals are recomputed from the member projects on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AnnualProjectId, ProjectId};

/// A named collection of project areas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualProject {
    /// Unique identifier
    pub id: AnnualProjectId,

    /// Annual project name (e.g., "FY2026 Buildout")
    pub name: String,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Member project ids
    #[serde(default)]
    pub project_ids: Vec<ProjectId>,

    /// When the annual project was created
    pub created_at: DateTime<Utc>,

    /// When the annual project was last modified
    pub updated_at: DateTime<Utc>,
}

impl AnnualProject {
    /// Create a new annual project
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: AnnualProjectId::new(),
            name: name.into(),
            notes: None,
            project_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamp the modification time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Add a member project; ignored if already present
    pub fn add_project(&mut self, project_id: ProjectId) {
        if !self.project_ids.contains(&project_id) {
            self.project_ids.push(project_id);
            self.touch();
        }
    }

    /// Remove a member project, returning whether it was present
    pub fn remove_project(&mut self, project_id: ProjectId) -> bool {
        let before = self.project_ids.len();
        self.project_ids.retain(|id| *id != project_id);
        let removed = self.project_ids.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Validate the annual project
    pub fn validate(&self) -> Result<(), AnnualValidationError> {
        if self.name.trim().is_empty() {
            return Err(AnnualValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for AnnualProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for annual projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnualValidationError {
    EmptyName,
}

impl fmt::Display for AnnualValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Annual project name cannot be empty"),
        }
    }
}

impl std::error::Error for AnnualValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_annual_project() {
        let annual = AnnualProject::new("FY2026 Buildout");
        assert_eq!(annual.name, "FY2026 Buildout");
        assert!(annual.project_ids.is_empty());
    }

    #[test]
    fn test_add_and_remove_projects() {
        let mut annual = AnnualProject::new("FY2026");
        let p1 = ProjectId::new();
        let p2 = ProjectId::new();

        annual.add_project(p1);
        annual.add_project(p2);
        annual.add_project(p1); // duplicate ignored
        assert_eq!(annual.project_ids.len(), 2);

        assert!(annual.remove_project(p1));
        assert!(!annual.remove_project(p1));
        assert_eq!(annual.project_ids, vec![p2]);
    }

    #[test]
    fn test_validation() {
        let mut annual = AnnualProject::new("FY2026");
        assert!(annual.validate().is_ok());

        annual.name = "  ".into();
        assert_eq!(annual.validate(), Err(AnnualValidationError::EmptyName));
    }

    #[test]
    fn test_serialization() {
        let mut annual = AnnualProject::new("FY2026");
        annual.add_project(ProjectId::new());

        let json = serde_json::to_string(&annual).unwrap();
        let deserialized: AnnualProject = serde_json::from_str(&json).unwrap();
        assert_eq!(annual.id, deserialized.id);
        assert_eq!(deserialized.project_ids.len(), 1);
    }
}
