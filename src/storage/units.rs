//! Unit repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EstimatorError;
use crate::models::{DepartmentId, Unit, UnitId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for unit persistence
pub struct UnitRepository {
    path: PathBuf,
    units: RwLock<HashMap<UnitId, Unit>>,
}

impl UnitRepository {
    /// Create a new unit repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            units: RwLock::new(HashMap::new()),
        }
    }

    /// Load units from disk
    pub fn load(&self) -> Result<(), EstimatorError> {
        let list: Vec<Unit> = read_json(&self.path)?;

        let mut units = self
            .units
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        units.clear();
        for unit in list {
            units.insert(unit.id, unit);
        }

        Ok(())
    }

    /// Save units to disk
    pub fn save(&self) -> Result<(), EstimatorError> {
        let units = self
            .units
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = units.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));

        write_json_atomic(&self.path, &list)
    }

    /// Get a unit by ID
    pub fn get(&self, id: UnitId) -> Result<Option<Unit>, EstimatorError> {
        let units = self
            .units
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(units.get(&id).cloned())
    }

    /// Get all units sorted by name
    pub fn get_all(&self) -> Result<Vec<Unit>, EstimatorError> {
        let units = self
            .units
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = units.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    /// Get units in a department sorted by name
    pub fn get_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Unit>, EstimatorError> {
        let units = self
            .units
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = units
            .values()
            .filter(|u| u.department_id == department_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    /// Get a unit by name (case insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Unit>, EstimatorError> {
        let units = self
            .units
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(units
            .values()
            .find(|u| u.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a unit
    pub fn upsert(&self, unit: Unit) -> Result<(), EstimatorError> {
        let mut units = self
            .units
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        units.insert(unit.id, unit);
        Ok(())
    }

    /// Delete a unit, returning whether it existed
    pub fn delete(&self, id: UnitId) -> Result<bool, EstimatorError> {
        let mut units = self
            .units
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(units.remove(&id).is_some())
    }

    /// Delete all units in a department, returning how many were removed
    pub fn delete_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<usize, EstimatorError> {
        let mut units = self
            .units
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = units.len();
        units.retain(|_, u| u.department_id != department_id);
        Ok(before - units.len())
    }

    /// Count units
    pub fn count(&self) -> Result<usize, EstimatorError> {
        let units = self
            .units
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(units.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, UnitType};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UnitRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("units.json");
        let repo = UnitRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_crud_operations() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let dept = DepartmentId::new();
        let unit = Unit::new("Drop Cable", dept, UnitType::Foot, Money::from_dollars(0.35));
        let id = unit.id;

        repo.upsert(unit).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Drop Cable");

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_by_department() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let dept_a = DepartmentId::new();
        let dept_b = DepartmentId::new();
        repo.upsert(Unit::new("B Item", dept_a, UnitType::Each, Money::zero()))
            .unwrap();
        repo.upsert(Unit::new("A Item", dept_a, UnitType::Each, Money::zero()))
            .unwrap();
        repo.upsert(Unit::new("Other", dept_b, UnitType::Each, Money::zero()))
            .unwrap();

        let in_a = repo.get_by_department(dept_a).unwrap();
        assert_eq!(in_a.len(), 2);
        assert_eq!(in_a[0].name, "A Item");
    }

    #[test]
    fn test_delete_by_department() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let dept_a = DepartmentId::new();
        let dept_b = DepartmentId::new();
        repo.upsert(Unit::new("One", dept_a, UnitType::Each, Money::zero()))
            .unwrap();
        repo.upsert(Unit::new("Two", dept_a, UnitType::Each, Money::zero()))
            .unwrap();
        repo.upsert(Unit::new("Keep", dept_b, UnitType::Each, Money::zero()))
            .unwrap();

        assert_eq!(repo.delete_by_department(dept_a).unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let dept = DepartmentId::new();
        let unit = Unit::new("Conduit", dept, UnitType::Foot, Money::from_dollars(1.25));
        let id = unit.id;
        repo.upsert(unit).unwrap();
        repo.save().unwrap();

        let repo2 = UnitRepository::new(temp_dir.path().join("units.json"));
        repo2.load().unwrap();

        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.cost, Money::from_dollars(1.25));
        assert_eq!(retrieved.department_id, dept);
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let dept = DepartmentId::new();
        repo.upsert(Unit::new("Splice Tray", dept, UnitType::Each, Money::zero()))
            .unwrap();

        assert!(repo.get_by_name("splice tray").unwrap().is_some());
        assert!(repo.get_by_name("nope").unwrap().is_none());
    }
}
