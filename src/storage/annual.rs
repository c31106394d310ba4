//! Annual project repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EstimatorError;
use crate::models::{AnnualProject, AnnualProjectId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for annual project persistence
pub struct AnnualProjectRepository {
    path: PathBuf,
    annual_projects: RwLock<HashMap<AnnualProjectId, AnnualProject>>,
}

impl AnnualProjectRepository {
    /// Create a new annual project repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            annual_projects: RwLock::new(HashMap::new()),
        }
    }

    /// Load annual projects from disk
    pub fn load(&self) -> Result<(), EstimatorError> {
        let list: Vec<AnnualProject> = read_json(&self.path)?;

        let mut annual_projects = self
            .annual_projects
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        annual_projects.clear();
        for annual in list {
            annual_projects.insert(annual.id, annual);
        }

        Ok(())
    }

    /// Save annual projects to disk
    pub fn save(&self) -> Result<(), EstimatorError> {
        let annual_projects = self
            .annual_projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = annual_projects.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &list)
    }

    /// Get an annual project by ID
    pub fn get(&self, id: AnnualProjectId) -> Result<Option<AnnualProject>, EstimatorError> {
        let annual_projects = self
            .annual_projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(annual_projects.get(&id).cloned())
    }

    /// Get all annual projects sorted by creation time
    pub fn get_all(&self) -> Result<Vec<AnnualProject>, EstimatorError> {
        let annual_projects = self
            .annual_projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = annual_projects.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Get an annual project by name (case insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<AnnualProject>, EstimatorError> {
        let annual_projects = self
            .annual_projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(annual_projects
            .values()
            .find(|a| a.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update an annual project
    pub fn upsert(&self, annual: AnnualProject) -> Result<(), EstimatorError> {
        let mut annual_projects = self
            .annual_projects
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        annual_projects.insert(annual.id, annual);
        Ok(())
    }

    /// Delete an annual project, returning whether it existed
    pub fn delete(&self, id: AnnualProjectId) -> Result<bool, EstimatorError> {
        let mut annual_projects = self
            .annual_projects
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(annual_projects.remove(&id).is_some())
    }

    /// Count annual projects
    pub fn count(&self) -> Result<usize, EstimatorError> {
        let annual_projects = self
            .annual_projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(annual_projects.len())
    }
}
