//! Project area repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EstimatorError;
use crate::models::{ProjectArea, ProjectId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for project area persistence
pub struct ProjectRepository {
    path: PathBuf,
    projects: RwLock<HashMap<ProjectId, ProjectArea>>,
}

impl ProjectRepository {
    /// Create a new project repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            projects: RwLock::new(HashMap::new()),
        }
    }

    /// Load projects from disk
    pub fn load(&self) -> Result<(), EstimatorError> {
        let list: Vec<ProjectArea> = read_json(&self.path)?;

        let mut projects = self
            .projects
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        projects.clear();
        for project in list {
            projects.insert(project.id, project);
        }

        Ok(())
    }

    /// Save projects to disk
    pub fn save(&self) -> Result<(), EstimatorError> {
        let projects = self
            .projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = projects.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &list)
    }

    /// Get a project by ID
    pub fn get(&self, id: ProjectId) -> Result<Option<ProjectArea>, EstimatorError> {
        let projects = self
            .projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(projects.get(&id).cloned())
    }

    /// Get all projects sorted by creation time
    pub fn get_all(&self) -> Result<Vec<ProjectArea>, EstimatorError> {
        let projects = self
            .projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = projects.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Get a project by name (case insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<ProjectArea>, EstimatorError> {
        let projects = self
            .projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(projects
            .values()
            .find(|p| p.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a project
    pub fn upsert(&self, project: ProjectArea) -> Result<(), EstimatorError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        projects.insert(project.id, project);
        Ok(())
    }

    /// Delete a project, returning whether it existed
    pub fn delete(&self, id: ProjectId) -> Result<bool, EstimatorError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(projects.remove(&id).is_some())
    }

    /// Count projects
    pub fn count(&self) -> Result<usize, EstimatorError> {
        let projects = self
            .projects
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(projects.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitId;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProjectRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projects.json");
        let repo = ProjectRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_crud_operations() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let project = ProjectArea::new("Cedar Ridge", 1000, 300);
        let id = project.id;

        repo.upsert(project).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.homes_passed, 1000);

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload_preserves_selections() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut project = ProjectArea::new("Cedar Ridge", 1000, 300);
        project.set_unit_quantity(UnitId::new(), 40);
        let id = project.id;

        repo.upsert(project).unwrap();
        repo.save().unwrap();

        let repo2 = ProjectRepository::new(temp_dir.path().join("projects.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.units.len(), 1);
        assert_eq!(retrieved.units[0].quantity, 40);
    }

    #[test]
    fn test_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(ProjectArea::new("Cedar Ridge", 100, 10)).unwrap();

        assert!(repo.get_by_name("cedar ridge").unwrap().is_some());
        assert!(repo.get_by_name("missing").unwrap().is_none());
    }
}
