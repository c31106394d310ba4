//! Annual project service
//!
//! Business logic for annual project collections: membership management and
//! rolling the member estimates up into one view.

use crate::error::{EstimatorError, EstimatorResult};
use crate::estimate::{AnnualRollup, CostBreakdown, ProjectEstimate, RoiProjection};
use crate::models::{AnnualProject, AnnualProjectId, ProjectId};
use crate::storage::Storage;

/// Service for annual project management
pub struct AnnualService<'a> {
    storage: &'a Storage,
}

impl<'a> AnnualService<'a> {
    /// Create a new annual project service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new annual project
    pub fn create_annual(&self, name: &str, notes: Option<&str>) -> EstimatorResult<AnnualProject> {
        if self.storage.annual_projects.get_by_name(name)?.is_some() {
            return Err(EstimatorError::Duplicate {
                entity_type: "Annual project",
                identifier: name.to_string(),
            });
        }

        let mut annual = AnnualProject::new(name);
        annual.notes = notes.map(String::from);
        annual
            .validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.annual_projects.upsert(annual.clone())?;
        self.storage.annual_projects.save()?;
        Ok(annual)
    }

    /// Update an annual project's name and/or notes
    pub fn update_annual(
        &self,
        id: AnnualProjectId,
        name: Option<&str>,
        notes: Option<&str>,
    ) -> EstimatorResult<AnnualProject> {
        let mut annual = self
            .storage
            .annual_projects
            .get(id)?
            .ok_or_else(|| EstimatorError::annual_project_not_found(id.to_string()))?;

        if let Some(name) = name {
            annual.name = name.to_string();
        }
        if let Some(notes) = notes {
            annual.notes = Some(notes.to_string());
        }
        annual.touch();
        annual
            .validate()
            .map_err(|e| EstimatorError::Validation(e.to_string()))?;

        self.storage.annual_projects.upsert(annual.clone())?;
        self.storage.annual_projects.save()?;
        Ok(annual)
    }

    /// Delete an annual project (member projects are untouched)
    pub fn delete_annual(&self, id: AnnualProjectId) -> EstimatorResult<()> {
        if !self.storage.annual_projects.delete(id)? {
            return Err(EstimatorError::annual_project_not_found(id.to_string()));
        }
        self.storage.annual_projects.save()?;
        Ok(())
    }

    /// Find an annual project by id or name
    pub fn find_annual(&self, identifier: &str) -> EstimatorResult<Option<AnnualProject>> {
        if let Ok(id) = identifier.parse::<AnnualProjectId>() {
            if let Some(annual) = self.storage.annual_projects.get(id)? {
                return Ok(Some(annual));
            }
        }
        self.storage.annual_projects.get_by_name(identifier)
    }

    /// Add a member project
    pub fn add_project(
        &self,
        id: AnnualProjectId,
        project_id: ProjectId,
    ) -> EstimatorResult<AnnualProject> {
        let mut annual = self
            .storage
            .annual_projects
            .get(id)?
            .ok_or_else(|| EstimatorError::annual_project_not_found(id.to_string()))?;

        // The project must exist when it is added; it may be deleted later,
        // in which case the rollup simply skips it
        self.storage
            .projects
            .get(project_id)?
            .ok_or_else(|| EstimatorError::project_not_found(project_id.to_string()))?;

        annual.add_project(project_id);
        self.storage.annual_projects.upsert(annual.clone())?;
        self.storage.annual_projects.save()?;
        Ok(annual)
    }

    /// Remove a member project
    pub fn remove_project(
        &self,
        id: AnnualProjectId,
        project_id: ProjectId,
    ) -> EstimatorResult<AnnualProject> {
        let mut annual = self
            .storage
            .annual_projects
            .get(id)?
            .ok_or_else(|| EstimatorError::annual_project_not_found(id.to_string()))?;

        annual.remove_project(project_id);
        self.storage.annual_projects.upsert(annual.clone())?;
        self.storage.annual_projects.save()?;
        Ok(annual)
    }

    /// Run the estimate engine for every member project
    ///
    /// Member ids that no longer resolve are skipped. Projects that specify
    /// no growth of their own are projected with `default_growth_percentage`
    /// (the fleet-wide assumption from settings); projects with an explicit
    /// growth rate keep it.
    pub fn member_estimates(
        &self,
        annual: &AnnualProject,
        default_growth_percentage: f64,
    ) -> EstimatorResult<Vec<ProjectEstimate>> {
        let units = self.storage.units.get_all()?;
        let labor_rates = self.storage.labor_rates.get_all()?;
        let mileage_rates = self.storage.mileage_rates.get_all()?;

        let mut estimates = Vec::with_capacity(annual.project_ids.len());
        for project_id in &annual.project_ids {
            let Some(project) = self.storage.projects.get(*project_id)? else {
                continue;
            };

            let costs = CostBreakdown::compute(&project, &units, &labor_rates, &mileage_rates);
            let growth = if project.projected_growth_percentage == 0.0 {
                default_growth_percentage
            } else {
                project.projected_growth_percentage
            };
            let roi = RoiProjection::with_growth(&project, costs.total_cost, growth);

            estimates.push(ProjectEstimate {
                project_id: project.id,
                project_name: project.name.clone(),
                homes_passed: project.homes_passed,
                current_customers: project.current_customers,
                monthly_income_per_customer: project.monthly_income_per_customer,
                costs,
                roi,
            });
        }
        Ok(estimates)
    }

    /// Member estimates plus their rollup
    pub fn rollup(
        &self,
        annual: &AnnualProject,
        default_growth_percentage: f64,
    ) -> EstimatorResult<(Vec<ProjectEstimate>, AnnualRollup)> {
        let estimates = self.member_estimates(annual, default_growth_percentage)?;
        let rollup = AnnualRollup::compute(&estimates);
        Ok((estimates, rollup))
    }
}
