//! Annual summary report
//!
//! Rolls the member projects of an annual project into one view: combined
//! section totals, aggregate take rates, and a per-project breakdown.

use std::io::Write;

use crate::display::{format_percent, format_years};
use crate::error::{EstimatorError, EstimatorResult};
use crate::estimate::{AnnualRollup, ProjectEstimate};
use crate::models::{AnnualProject, AnnualProjectId};
use crate::services::AnnualService;
use crate::storage::Storage;

/// Annual summary report
#[derive(Debug, Clone)]
pub struct AnnualSummaryReport {
    /// The annual project as it was when the report was generated
    pub annual: AnnualProject,
    /// Per-member engine outputs, in membership order
    pub estimates: Vec<ProjectEstimate>,
    /// Combined figures
    pub rollup: AnnualRollup,
}

impl AnnualSummaryReport {
    /// Generate a summary report for an annual project
    ///
    /// `default_growth_percentage` is the fleet-wide growth assumption
    /// substituted for member projects that specify none.
    pub fn generate(
        storage: &Storage,
        annual_id: AnnualProjectId,
        default_growth_percentage: f64,
    ) -> EstimatorResult<Self> {
        let annual = storage
            .annual_projects
            .get(annual_id)?
            .ok_or_else(|| EstimatorError::annual_project_not_found(annual_id.to_string()))?;

        let (estimates, rollup) =
            AnnualService::new(storage).rollup(&annual, default_growth_percentage)?;

        Ok(Self {
            annual,
            estimates,
            rollup,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("Annual Summary: {}\n", self.annual.name));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        if let Some(notes) = &self.annual.notes {
            output.push_str(&format!("{}\n", notes));
        }
        output.push_str(&format!(
            "Projects: {}    Total Cost: {}\n",
            self.rollup.project_count, self.rollup.total_cost
        ));
        output.push_str(&format!(
            "Homes Passed: {}    Current Customers: {}    Take Rate: {}\n",
            self.rollup.total_homes_passed,
            self.rollup.total_current_customers,
            format_percent(self.rollup.current_take_rate)
        ));
        output.push_str(&format!(
            "Projected Customers: {}    Projected Take Rate: {}\n\n",
            self.rollup.total_projected_customers,
            format_percent(self.rollup.projected_take_rate)
        ));

        // Section totals
        output.push_str(&format!(
            "Materials & Equipment: {}\n",
            self.rollup.total_units_cost
        ));
        output.push_str(&format!("Labor: {}\n", self.rollup.total_labor_cost));
        output.push_str(&format!("Mileage: {}\n", self.rollup.total_mileage_cost));
        output.push_str(&format!(
            "Cost per Home: {}    Payback: {}\n\n",
            self.rollup.cost_per_home,
            format_years(self.rollup.payback_years)
        ));

        // Per-project breakdown
        output.push_str("PROJECT BREAKDOWN\n");
        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12} {:>8}\n",
            "Project", "Materials", "Labor", "Mileage", "Homes"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for estimate in &self.estimates {
            output.push_str(&format!(
                "{:<28} {:>12} {:>12} {:>12} {:>8}\n",
                estimate.project_name,
                estimate.costs.total_units_cost.to_string(),
                estimate.costs.total_labor_cost.to_string(),
                estimate.costs.total_mileage_cost.to_string(),
                estimate.homes_passed
            ));
        }
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>12} {:>12} {:>12} {:>8}\n",
            "TOTAL",
            self.rollup.total_units_cost.to_string(),
            self.rollup.total_labor_cost.to_string(),
            self.rollup.total_mileage_cost.to_string(),
            self.rollup.total_homes_passed
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> EstimatorResult<()> {
        writeln!(
            writer,
            "Project,Materials,Labor,Mileage,Total,Homes Passed,Current Customers,Take Rate"
        )
        .map_err(|e| EstimatorError::Export(e.to_string()))?;

        for estimate in &self.estimates {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2},{:.2},{},{},{:.1}",
                estimate.project_name,
                estimate.costs.total_units_cost.amount(),
                estimate.costs.total_labor_cost.amount(),
                estimate.costs.total_mileage_cost.amount(),
                estimate.costs.total_cost.amount(),
                estimate.homes_passed,
                estimate.current_customers,
                estimate.roi.current_take_rate
            )
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2},{:.2},{:.2},{:.2},{},{},{:.1}",
            self.rollup.total_units_cost.amount(),
            self.rollup.total_labor_cost.amount(),
            self.rollup.total_mileage_cost.amount(),
            self.rollup.total_cost.amount(),
            self.rollup.total_homes_passed,
            self.rollup.total_current_customers,
            self.rollup.current_take_rate
        )
        .map_err(|e| EstimatorError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FiberPaths;
    use crate::models::{Money, UnitType};
    use crate::services::{CatalogService, ProjectService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed_annual(storage: &Storage) -> AnnualProjectId {
        let catalog = CatalogService::new(storage);
        let projects = ProjectService::new(storage);
        let annual_service = AnnualService::new(storage);

        let department = catalog.create_department("General", None).unwrap();
        catalog
            .create_unit(
                "Mainline",
                department.id,
                UnitType::Foot,
                Money::from_dollars(2.0),
                None,
            )
            .unwrap();

        let p1 = projects
            .create_project("Area One", 100, 20, Money::from_dollars(30.0), 0.0, None, None)
            .unwrap();
        projects.set_unit(p1.id, "Mainline", 100).unwrap();

        let p2 = projects
            .create_project("Area Two", 200, 80, Money::from_dollars(30.0), 25.0, None, None)
            .unwrap();
        projects.set_unit(p2.id, "Mainline", 50).unwrap();

        let annual = annual_service.create_annual("FY2026", None).unwrap();
        annual_service.add_project(annual.id, p1.id).unwrap();
        annual_service.add_project(annual.id, p2.id).unwrap();
        annual.id
    }

    #[test]
    fn test_generate_rolls_up_members() {
        let (_temp_dir, storage) = create_test_storage();
        let annual_id = seed_annual(&storage);

        let report = AnnualSummaryReport::generate(&storage, annual_id, 30.0).unwrap();

        assert_eq!(report.estimates.len(), 2);
        assert_eq!(report.rollup.total_cost, Money::from_dollars(300.0));
        assert_eq!(report.rollup.total_homes_passed, 300);
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let annual_id = seed_annual(&storage);

        let report = AnnualSummaryReport::generate(&storage, annual_id, 30.0).unwrap();
        let output = report.format_terminal();

        assert!(output.contains("Annual Summary: FY2026"));
        assert!(output.contains("Area One"));
        assert!(output.contains("Area Two"));
        assert!(output.contains("PROJECT BREAKDOWN"));
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let annual_id = seed_annual(&storage);

        let report = AnnualSummaryReport::generate(&storage, annual_id, 30.0).unwrap();
        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.starts_with("Project,Materials"));
        assert!(csv.contains("Area One,200.00"));
        assert!(csv.contains("TOTAL,300.00"));
    }

    #[test]
    fn test_missing_annual_errors() {
        let (_temp_dir, storage) = create_test_storage();
        let err =
            AnnualSummaryReport::generate(&storage, AnnualProjectId::new(), 30.0).unwrap_err();
        assert!(err.is_not_found());
    }
}
