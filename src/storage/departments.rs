//! Department repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EstimatorError;
use crate::models::{Department, DepartmentId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for department persistence
pub struct DepartmentRepository {
    path: PathBuf,
    departments: RwLock<HashMap<DepartmentId, Department>>,
}

impl DepartmentRepository {
    /// Create a new department repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            departments: RwLock::new(HashMap::new()),
        }
    }

    /// Load departments from disk
    pub fn load(&self) -> Result<(), EstimatorError> {
        let list: Vec<Department> = read_json(&self.path)?;

        let mut departments = self
            .departments
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        departments.clear();
        for department in list {
            departments.insert(department.id, department);
        }

        Ok(())
    }

    /// Save departments to disk
    pub fn save(&self) -> Result<(), EstimatorError> {
        let departments = self
            .departments
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = departments.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));

        write_json_atomic(&self.path, &list)
    }

    /// Get a department by ID
    pub fn get(&self, id: DepartmentId) -> Result<Option<Department>, EstimatorError> {
        let departments = self
            .departments
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(departments.get(&id).cloned())
    }

    /// Get all departments sorted by name
    pub fn get_all(&self) -> Result<Vec<Department>, EstimatorError> {
        let departments = self
            .departments
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = departments.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    /// Get a department by name (case insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Department>, EstimatorError> {
        let departments = self
            .departments
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(departments
            .values()
            .find(|d| d.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a department
    pub fn upsert(&self, department: Department) -> Result<(), EstimatorError> {
        let mut departments = self
            .departments
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        departments.insert(department.id, department);
        Ok(())
    }

    /// Delete a department, returning whether it existed
    pub fn delete(&self, id: DepartmentId) -> Result<bool, EstimatorError> {
        let mut departments = self
            .departments
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(departments.remove(&id).is_some())
    }

    /// Count departments
    pub fn count(&self) -> Result<usize, EstimatorError> {
        let departments = self
            .departments
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(departments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, DepartmentRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("departments.json");
        let repo = DepartmentRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_crud_operations() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let department = Department::new("Outside Plant");
        let id = department.id;

        repo.upsert(department).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Outside Plant");

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let department = Department::new("Splicing");
        let id = department.id;
        repo.upsert(department).unwrap();
        repo.save().unwrap();

        let repo2 = DepartmentRepository::new(temp_dir.path().join("departments.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Splicing");
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Department::new("Outside Plant")).unwrap();

        assert!(repo.get_by_name("outside plant").unwrap().is_some());
        assert!(repo.get_by_name("OUTSIDE PLANT").unwrap().is_some());
        assert!(repo.get_by_name("missing").unwrap().is_none());
    }

    #[test]
    fn test_get_all_sorted() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Department::new("Splicing")).unwrap();
        repo.upsert(Department::new("Drops")).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].name, "Drops");
        assert_eq!(all[1].name, "Splicing");
    }
}
