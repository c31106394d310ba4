//! Catalog service
//!
//! Business logic for the four rate catalogs: departments, units, labor
//! rates and mileage rates. Handles validation, duplicate detection, and
//! name-or-id resolution for CLI input.
//!
//! Deleting a catalog entry that projects still reference is allowed; the
//! estimate engine skips dangling references, so transient inconsistency
//! between catalogs and projects is part of the storage contract.

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::{
    Department, DepartmentId, LaborRate, LaborRateId, LaborRateType, MileageRate, MileageRateId,
    Money, Unit, UnitId, UnitType,
};
use crate::storage::Storage;

/// Service for catalog management
pub struct CatalogService<'a> {
    storage: &'a Storage,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    // Department operations

    /// Create a new department
    pub fn create_department(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> EstimatorResult<Department> {
        if self.storage.departments.get_by_name(name)?.is_some() {
            return Err(EstimatorError::Duplicate {
                entity_type: "Department",
                identifier: name.to_string(),
            });
        }

        let mut department = Department::new(name);
        department.description = description.map(String::from);
        department
            .validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.departments.upsert(department.clone())?;
        self.storage.departments.save()?;
        Ok(department)
    }

    /// Update a department's name and/or description
    pub fn update_department(
        &self,
        id: DepartmentId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> EstimatorResult<Department> {
        let mut department = self
            .storage
            .departments
            .get(id)?
            .ok_or_else(|| EstimatorError::department_not_found(id.to_string()))?;

        if let Some(name) = name {
            department.name = name.to_string();
        }
        if let Some(description) = description {
            department.description = Some(description.to_string());
        }
        department
            .validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.departments.upsert(department.clone())?;
        self.storage.departments.save()?;
        Ok(department)
    }

    /// Delete a department
    ///
    /// Refuses when the department still has units unless `force` is set, in
    /// which case the units are deleted with it. Returns the number of units
    /// removed.
    pub fn delete_department(&self, id: DepartmentId, force: bool) -> EstimatorResult<usize> {
        let department = self
            .storage
            .departments
            .get(id)?
            .ok_or_else(|| EstimatorError::department_not_found(id.to_string()))?;

        let units = self.storage.units.get_by_department(id)?;
        if !units.is_empty() && !force {
            return Err(EstimatorError::Validation(format!(
                "Department '{}' still has {} unit(s); use --force to delete them too",
                department.name,
                units.len()
            )));
        }

        let removed = self.storage.units.delete_by_department(id)?;
        self.storage.departments.delete(id)?;
        self.storage.departments.save()?;
        if removed > 0 {
            self.storage.units.save()?;
        }
        Ok(removed)
    }

    /// Find a department by id or name
    pub fn find_department(&self, identifier: &str) -> EstimatorResult<Option<Department>> {
        if let Ok(id) = identifier.parse::<DepartmentId>() {
            if let Some(department) = self.storage.departments.get(id)? {
                return Ok(Some(department));
            }
        }
        self.storage.departments.get_by_name(identifier)
    }

    /// All departments paired with their units
    pub fn departments_with_units(&self) -> EstimatorResult<Vec<(Department, Vec<Unit>)>> {
        let departments = self.storage.departments.get_all()?;
        let mut result = Vec::with_capacity(departments.len());
        for department in departments {
            let units = self.storage.units.get_by_department(department.id)?;
            result.push((department, units));
        }
        Ok(result)
    }

    // Unit operations

    /// Create a new unit in a department
    pub fn create_unit(
        &self,
        name: &str,
        department_id: DepartmentId,
        unit_type: UnitType,
        cost: Money,
        description: Option<&str>,
    ) -> EstimatorResult<Unit> {
        // Verify the department exists
        self.storage
            .departments
            .get(department_id)?
            .ok_or_else(|| EstimatorError::department_not_found(department_id.to_string()))?;

        if self.storage.units.get_by_name(name)?.is_some() {
            return Err(EstimatorError::Duplicate {
                entity_type: "Unit",
                identifier: name.to_string(),
            });
        }

        let mut unit = Unit::new(name, department_id, unit_type, cost);
        unit.description = description.map(String::from);
        unit.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.units.upsert(unit.clone())?;
        self.storage.units.save()?;
        Ok(unit)
    }

    /// Update a unit
    pub fn update_unit(
        &self,
        id: UnitId,
        name: Option<&str>,
        department_id: Option<DepartmentId>,
        unit_type: Option<UnitType>,
        cost: Option<Money>,
        description: Option<&str>,
    ) -> EstimatorResult<Unit> {
        let mut unit = self
            .storage
            .units
            .get(id)?
            .ok_or_else(|| EstimatorError::unit_not_found(id.to_string()))?;

        if let Some(department_id) = department_id {
            self.storage
                .departments
                .get(department_id)?
                .ok_or_else(|| EstimatorError::department_not_found(department_id.to_string()))?;
            unit.department_id = department_id;
        }
        if let Some(name) = name {
            unit.name = name.to_string();
        }
        if let Some(unit_type) = unit_type {
            unit.unit_type = unit_type;
        }
        if let Some(cost) = cost {
            unit.cost = cost;
        }
        if let Some(description) = description {
            unit.description = Some(description.to_string());
        }
        unit.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.units.upsert(unit.clone())?;
        self.storage.units.save()?;
        Ok(unit)
    }

    /// Delete a unit
    pub fn delete_unit(&self, id: UnitId) -> EstimatorResult<()> {
        if !self.storage.units.delete(id)? {
            return Err(EstimatorError::unit_not_found(id.to_string()));
        }
        self.storage.units.save()?;
        Ok(())
    }

    /// Find a unit by id or name
    pub fn find_unit(&self, identifier: &str) -> EstimatorResult<Option<Unit>> {
        if let Ok(id) = identifier.parse::<UnitId>() {
            if let Some(unit) = self.storage.units.get(id)? {
                return Ok(Some(unit));
            }
        }
        self.storage.units.get_by_name(identifier)
    }

    // Labor rate operations

    /// Create a new labor rate
    pub fn create_labor_rate(
        &self,
        name: &str,
        rate_type: LaborRateType,
        cost: Money,
    ) -> EstimatorResult<LaborRate> {
        if self.storage.labor_rates.get_by_name(name)?.is_some() {
            return Err(EstimatorError::Duplicate {
                entity_type: "Labor rate",
                identifier: name.to_string(),
            });
        }

        let rate = LaborRate::new(name, rate_type, cost);
        rate.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.labor_rates.upsert(rate.clone())?;
        self.storage.labor_rates.save()?;
        Ok(rate)
    }

    /// Update a labor rate
    pub fn update_labor_rate(
        &self,
        id: LaborRateId,
        name: Option<&str>,
        rate_type: Option<LaborRateType>,
        cost: Option<Money>,
    ) -> EstimatorResult<LaborRate> {
        let mut rate = self
            .storage
            .labor_rates
            .get(id)?
            .ok_or_else(|| EstimatorError::labor_rate_not_found(id.to_string()))?;

        if let Some(name) = name {
            rate.name = name.to_string();
        }
        if let Some(rate_type) = rate_type {
            rate.rate_type = rate_type;
        }
        if let Some(cost) = cost {
            rate.cost = cost;
        }
        rate.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.labor_rates.upsert(rate.clone())?;
        self.storage.labor_rates.save()?;
        Ok(rate)
    }

    /// Delete a labor rate
    pub fn delete_labor_rate(&self, id: LaborRateId) -> EstimatorResult<()> {
        if !self.storage.labor_rates.delete(id)? {
            return Err(EstimatorError::labor_rate_not_found(id.to_string()));
        }
        self.storage.labor_rates.save()?;
        Ok(())
    }

    /// Find a labor rate by id or name
    pub fn find_labor_rate(&self, identifier: &str) -> EstimatorResult<Option<LaborRate>> {
        if let Ok(id) = identifier.parse::<LaborRateId>() {
            if let Some(rate) = self.storage.labor_rates.get(id)? {
                return Ok(Some(rate));
            }
        }
        self.storage.labor_rates.get_by_name(identifier)
    }

    // Mileage rate operations

    /// Create a new mileage rate
    pub fn create_mileage_rate(
        &self,
        distance: f64,
        cost_per_mile: Money,
    ) -> EstimatorResult<MileageRate> {
        if self.storage.mileage_rates.get_by_distance(distance)?.is_some() {
            return Err(EstimatorError::Duplicate {
                entity_type: "Mileage rate",
                identifier: format!("{} miles", distance),
            });
        }

        let rate = MileageRate::new(distance, cost_per_mile);
        rate.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.mileage_rates.upsert(rate.clone())?;
        self.storage.mileage_rates.save()?;
        Ok(rate)
    }

    /// Update a mileage rate
    pub fn update_mileage_rate(
        &self,
        id: MileageRateId,
        distance: Option<f64>,
        cost_per_mile: Option<Money>,
    ) -> EstimatorResult<MileageRate> {
        let mut rate = self
            .storage
            .mileage_rates
            .get(id)?
            .ok_or_else(|| EstimatorError::mileage_rate_not_found(id.to_string()))?;

        if let Some(distance) = distance {
            rate.distance = distance;
        }
        if let Some(cost_per_mile) = cost_per_mile {
            rate.cost_per_mile = cost_per_mile;
        }
        rate.validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.mileage_rates.upsert(rate.clone())?;
        self.storage.mileage_rates.save()?;
        Ok(rate)
    }

    /// Delete a mileage rate
    pub fn delete_mileage_rate(&self, id: MileageRateId) -> EstimatorResult<()> {
        if !self.storage.mileage_rates.delete(id)? {
            return Err(EstimatorError::mileage_rate_not_found(id.to_string()));
        }
        self.storage.mileage_rates.save()?;
        Ok(())
    }

    /// Find a mileage rate by id or one-way distance
    pub fn find_mileage_rate(&self, identifier: &str) -> EstimatorResult<Option<MileageRate>> {
        if let Ok(id) = identifier.parse::<MileageRateId>() {
            if let Some(rate) = self.storage.mileage_rates.get(id)? {
                return Ok(Some(rate));
            }
        }
        if let Ok(distance) = identifier.parse::<f64>() {
            return self.storage.mileage_rates.get_by_distance(distance);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FiberPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_department_and_unit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let department = service
            .create_department("Outside Plant", Some("Aerial and buried"))
            .unwrap();
        let unit = service
            .create_unit(
                "Drop Cable",
                department.id,
                UnitType::Foot,
                Money::from_dollars(0.35),
                None,
            )
            .unwrap();

        assert_eq!(unit.department_id, department.id);
        assert_eq!(storage.units.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_department_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        service.create_department("Splicing", None).unwrap();
        let err = service.create_department("splicing", None).unwrap_err();
        assert!(matches!(err, EstimatorError::Duplicate { .. }));
    }

    #[test]
    fn test_unit_requires_existing_department() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let err = service
            .create_unit(
                "Orphan",
                DepartmentId::new(),
                UnitType::Each,
                Money::zero(),
                None,
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_department_with_units() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let department = service.create_department("Drops", None).unwrap();
        service
            .create_unit(
                "Drop Cable",
                department.id,
                UnitType::Foot,
                Money::from_dollars(0.35),
                None,
            )
            .unwrap();

        // Refuses without force
        let err = service.delete_department(department.id, false).unwrap_err();
        assert!(err.is_validation());

        // Force cascades to the units
        let removed = service.delete_department(department.id, true).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(storage.units.count().unwrap(), 0);
        assert_eq!(storage.departments.count().unwrap(), 0);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let err = service
            .create_labor_rate("Splicer", LaborRateType::Hour, Money::from_dollars(-1.0))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let department = service.create_department("Splicing", None).unwrap();

        let by_name = service.find_department("splicing").unwrap().unwrap();
        assert_eq!(by_name.id, department.id);

        let by_id = service
            .find_department(&department.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(by_id.id, department.id);
    }

    #[test]
    fn test_find_mileage_rate_by_distance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        service
            .create_mileage_rate(18.5, Money::from_dollars(0.67))
            .unwrap();

        let found = service.find_mileage_rate("18.5").unwrap().unwrap();
        assert_eq!(found.distance, 18.5);
        assert!(service.find_mileage_rate("99").unwrap().is_none());
    }

    #[test]
    fn test_departments_with_units() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let drops = service.create_department("Drops", None).unwrap();
        let splicing = service.create_department("Splicing", None).unwrap();
        service
            .create_unit(
                "Drop Cable",
                drops.id,
                UnitType::Foot,
                Money::from_dollars(0.35),
                None,
            )
            .unwrap();

        let grouped = service.departments_with_units().unwrap();
        assert_eq!(grouped.len(), 2);
        let drops_entry = grouped.iter().find(|(d, _)| d.id == drops.id).unwrap();
        assert_eq!(drops_entry.1.len(), 1);
        let splicing_entry = grouped.iter().find(|(d, _)| d.id == splicing.id).unwrap();
        assert!(splicing_entry.1.is_empty());
    }
}
