//! Labor and mileage rate repositories for JSON storage
//!
//! Two small repositories in one module; each persists to its own file.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::EstimatorError;
use crate::models::{LaborRate, LaborRateId, MileageRate, MileageRateId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for labor rate persistence
pub struct LaborRateRepository {
    path: PathBuf,
    rates: RwLock<HashMap<LaborRateId, LaborRate>>,
}

impl LaborRateRepository {
    /// Create a new labor rate repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rates: RwLock::new(HashMap::new()),
        }
    }

    /// Load labor rates from disk
    pub fn load(&self) -> Result<(), EstimatorError> {
        let list: Vec<LaborRate> = read_json(&self.path)?;

        let mut rates = self
            .rates
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        rates.clear();
        for rate in list {
            rates.insert(rate.id, rate);
        }

        Ok(())
    }

    /// Save labor rates to disk
    pub fn save(&self) -> Result<(), EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = rates.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));

        write_json_atomic(&self.path, &list)
    }

    /// Get a labor rate by ID
    pub fn get(&self, id: LaborRateId) -> Result<Option<LaborRate>, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rates.get(&id).cloned())
    }

    /// Get all labor rates sorted by name
    pub fn get_all(&self) -> Result<Vec<LaborRate>, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = rates.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    /// Get a labor rate by name (case insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<LaborRate>, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(rates
            .values()
            .find(|r| r.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a labor rate
    pub fn upsert(&self, rate: LaborRate) -> Result<(), EstimatorError> {
        let mut rates = self
            .rates
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        rates.insert(rate.id, rate);
        Ok(())
    }

    /// Delete a labor rate, returning whether it existed
    pub fn delete(&self, id: LaborRateId) -> Result<bool, EstimatorError> {
        let mut rates = self
            .rates
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(rates.remove(&id).is_some())
    }

    /// Count labor rates
    pub fn count(&self) -> Result<usize, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rates.len())
    }
}

/// Repository for mileage rate persistence
pub struct MileageRateRepository {
    path: PathBuf,
    rates: RwLock<HashMap<MileageRateId, MileageRate>>,
}

impl MileageRateRepository {
    /// Create a new mileage rate repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rates: RwLock::new(HashMap::new()),
        }
    }

    /// Load mileage rates from disk
    pub fn load(&self) -> Result<(), EstimatorError> {
        let list: Vec<MileageRate> = read_json(&self.path)?;

        let mut rates = self
            .rates
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        rates.clear();
        for rate in list {
            rates.insert(rate.id, rate);
        }

        Ok(())
    }

    /// Save mileage rates to disk
    pub fn save(&self) -> Result<(), EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = rates.values().cloned().collect();
        list.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        write_json_atomic(&self.path, &list)
    }

    /// Get a mileage rate by ID
    pub fn get(&self, id: MileageRateId) -> Result<Option<MileageRate>, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rates.get(&id).cloned())
    }

    /// Get all mileage rates sorted by distance
    pub fn get_all(&self) -> Result<Vec<MileageRate>, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = rates.values().cloned().collect();
        list.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(list)
    }

    /// Get a mileage rate by its one-way distance
    pub fn get_by_distance(&self, distance: f64) -> Result<Option<MileageRate>, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(rates.values().find(|r| r.distance == distance).cloned())
    }

    /// Insert or update a mileage rate
    pub fn upsert(&self, rate: MileageRate) -> Result<(), EstimatorError> {
        let mut rates = self
            .rates
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        rates.insert(rate.id, rate);
        Ok(())
    }

    /// Delete a mileage rate, returning whether it existed
    pub fn delete(&self, id: MileageRateId) -> Result<bool, EstimatorError> {
        let mut rates = self
            .rates
            .write()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(rates.remove(&id).is_some())
    }

    /// Count mileage rates
    pub fn count(&self) -> Result<usize, EstimatorError> {
        let rates = self
            .rates
            .read()
            .map_err(|e| EstimatorError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(rates.len())
    }
}
