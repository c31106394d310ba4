//! Project service
//!
//! Business logic for project areas: CRUD, catalog selection (quantities and
//! trips), and running the estimate engine against the current catalogs.

use crate::error::{EstimatorError, EstimatorResult};
use crate::estimate::{CostBreakdown, RoiProjection};
use crate::models::{Money, ProjectArea, ProjectId};
use crate::storage::Storage;

/// Fields accepted when updating a project; `None` leaves a field unchanged
#[derive(Debug, Default, Clone)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub homes_passed: Option<u32>,
    pub current_customers: Option<u32>,
    pub monthly_income_per_customer: Option<Money>,
    pub projected_growth_percentage: Option<f64>,
}

/// Service for project management
pub struct ProjectService<'a> {
    storage: &'a Storage,
}

impl<'a> ProjectService<'a> {
    /// Create a new project service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new project area
    #[allow(clippy::too_many_arguments)]
    pub fn create_project(
        &self,
        name: &str,
        homes_passed: u32,
        current_customers: u32,
        monthly_income_per_customer: Money,
        projected_growth_percentage: f64,
        notes: Option<&str>,
        image_url: Option<&str>,
    ) -> EstimatorResult<ProjectArea> {
        if self.storage.projects.get_by_name(name)?.is_some() {
            return Err(EstimatorError::Duplicate {
                entity_type: "Project",
                identifier: name.to_string(),
            });
        }

        let mut project = ProjectArea::new(name, homes_passed, current_customers);
        project.monthly_income_per_customer = monthly_income_per_customer;
        project.projected_growth_percentage = projected_growth_percentage;
        if let Some(notes) = notes {
            project.notes = notes.to_string();
        }
        project.image_url = image_url.map(String::from);

        project
            .validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;
        Ok(project)
    }

    /// Update a project's scalar fields
    pub fn update_project(
        &self,
        id: ProjectId,
        update: ProjectUpdate,
    ) -> EstimatorResult<ProjectArea> {
        let mut project = self
            .storage
            .projects
            .get(id)?
            .ok_or_else(|| EstimatorError::project_not_found(id.to_string()))?;

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(notes) = update.notes {
            project.notes = notes;
        }
        if let Some(image_url) = update.image_url {
            project.image_url = Some(image_url);
        }
        if let Some(homes_passed) = update.homes_passed {
            project.homes_passed = homes_passed;
        }
        if let Some(current_customers) = update.current_customers {
            project.current_customers = current_customers;
        }
        if let Some(income) = update.monthly_income_per_customer {
            project.monthly_income_per_customer = income;
        }
        if let Some(growth) = update.projected_growth_percentage {
            project.projected_growth_percentage = growth;
        }
        project.touch();

        project
            .validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;
        Ok(project)
    }

    /// Delete a project
    pub fn delete_project(&self, id: ProjectId) -> EstimatorResult<()> {
        if !self.storage.projects.delete(id)? {
            return Err(EstimatorError::project_not_found(id.to_string()));
        }
        self.storage.projects.save()?;
        Ok(())
    }

    /// Find a project by id or name
    pub fn find_project(&self, identifier: &str) -> EstimatorResult<Option<ProjectArea>> {
        if let Ok(id) = identifier.parse::<ProjectId>() {
            if let Some(project) = self.storage.projects.get(id)? {
                return Ok(Some(project));
            }
        }
        self.storage.projects.get_by_name(identifier)
    }

    /// Set a unit's usage quantity on a project; 0 removes the line
    ///
    /// The unit must exist in the catalog at assignment time. References
    /// left dangling by later catalog deletions are skipped at estimate
    /// time instead.
    pub fn set_unit(
        &self,
        project_id: ProjectId,
        unit_identifier: &str,
        quantity: u32,
    ) -> EstimatorResult<ProjectArea> {
        let mut project = self
            .storage
            .projects
            .get(project_id)?
            .ok_or_else(|| EstimatorError::project_not_found(project_id.to_string()))?;

        let unit = super::CatalogService::new(self.storage)
            .find_unit(unit_identifier)?
            .ok_or_else(|| EstimatorError::unit_not_found(unit_identifier))?;

        project.set_unit_quantity(unit.id, quantity);
        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;
        Ok(project)
    }

    /// Set a labor rate's billed quantity on a project; 0 removes the line
    pub fn set_labor(
        &self,
        project_id: ProjectId,
        labor_identifier: &str,
        quantity: u32,
    ) -> EstimatorResult<ProjectArea> {
        let mut project = self
            .storage
            .projects
            .get(project_id)?
            .ok_or_else(|| EstimatorError::project_not_found(project_id.to_string()))?;

        let rate = super::CatalogService::new(self.storage)
            .find_labor_rate(labor_identifier)?
            .ok_or_else(|| EstimatorError::labor_rate_not_found(labor_identifier))?;

        project.set_labor_quantity(rate.id, quantity);
        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;
        Ok(project)
    }

    /// Set a mileage rate's round-trip count on a project; 0 removes the line
    pub fn set_mileage(
        &self,
        project_id: ProjectId,
        mileage_identifier: &str,
        trips: u32,
    ) -> EstimatorResult<ProjectArea> {
        let mut project = self
            .storage
            .projects
            .get(project_id)?
            .ok_or_else(|| EstimatorError::project_not_found(project_id.to_string()))?;

        let rate = super::CatalogService::new(self.storage)
            .find_mileage_rate(mileage_identifier)?
            .ok_or_else(|| EstimatorError::mileage_rate_not_found(mileage_identifier))?;

        project.set_mileage_trips(rate.id, trips);
        self.storage.projects.upsert(project.clone())?;
        self.storage.projects.save()?;
        Ok(project)
    }

    /// Run the estimate engine for a project against the current catalogs
    pub fn estimate(&self, project: &ProjectArea) -> EstimatorResult<(CostBreakdown, RoiProjection)> {
        let units = self.storage.units.get_all()?;
        let labor_rates = self.storage.labor_rates.get_all()?;
        let mileage_rates = self.storage.mileage_rates.get_all()?;

        let costs = CostBreakdown::compute(project, &units, &labor_rates, &mileage_rates);
        let roi = RoiProjection::compute(project, costs.total_cost);
        Ok((costs, roi))
    }
}
