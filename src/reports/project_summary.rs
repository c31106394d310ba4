//! Project summary report
//!
//! The full estimate view for one project area: itemized cost breakdown
//! grouped by department, cost-per-home analysis, and the three-scenario
//! take-rate/ROI projection.

use std::collections::HashMap;
use std::io::Write;

use crate::display::{format_percent, format_years};
use crate::error::{EstimatorError, EstimatorResult};
use crate::estimate::{CostBreakdown, RoiProjection};
use crate::models::{DepartmentId, ProjectArea, ProjectId};
use crate::services::ProjectService;
use crate::storage::Storage;

/// Project summary report
#[derive(Debug, Clone)]
pub struct ProjectSummaryReport {
    /// The project as it was when the report was generated
    pub project: ProjectArea,
    /// Department names for breakdown group headers
    pub department_names: HashMap<DepartmentId, String>,
    /// Itemized cost breakdown
    pub costs: CostBreakdown,
    /// Take-rate and ROI projection
    pub roi: RoiProjection,
}

impl ProjectSummaryReport {
    /// Generate a summary report for a project
    pub fn generate(storage: &Storage, project_id: ProjectId) -> EstimatorResult<Self> {
        let project = storage
            .projects
            .get(project_id)?
            .ok_or_else(|| EstimatorError::project_not_found(project_id.to_string()))?;

        let (costs, roi) = ProjectService::new(storage).estimate(&project)?;

        let department_names: HashMap<_, _> = storage
            .departments
            .get_all()?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        Ok(Self {
            project,
            department_names,
            costs,
            roi,
        })
    }

    fn department_name(&self, id: DepartmentId) -> &str {
        self.department_names
            .get(&id)
            .map(String::as_str)
            .unwrap_or("(deleted department)")
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("Project Summary: {}\n", self.project.name));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        if !self.project.notes.is_empty() {
            output.push_str(&format!("{}\n", self.project.notes));
        }
        output.push_str(&format!("Total Cost: {}\n", self.costs.total_cost));
        output.push_str(&format!(
            "Homes Passed: {}    Current Customers: {}\n\n",
            self.project.homes_passed, self.project.current_customers
        ));

        // Materials & equipment by department
        output.push_str("MATERIALS & EQUIPMENT\n");
        if self.costs.department_costs.is_empty() {
            output.push_str("  (none)\n");
        }
        for group in &self.costs.department_costs {
            output.push_str(&format!("\n{}\n", self.department_name(group.department_id)));
            for line in &group.lines {
                output.push_str(&format!(
                    "  {:<33} {:>8} {:<5} {:>10} {:>12}\n",
                    line.name,
                    line.quantity,
                    line.unit_type.to_string(),
                    line.unit_cost.to_string(),
                    line.total.to_string()
                ));
            }
            output.push_str(&format!(
                "  {:<33} {:>37}\n",
                "Subtotal:",
                group.subtotal().to_string()
            ));
        }
        output.push_str(&format!(
            "Materials & Equipment Total: {}\n\n",
            self.costs.total_units_cost
        ));

        // Labor
        output.push_str("LABOR\n");
        if self.costs.labor_lines.is_empty() {
            output.push_str("  (none)\n");
        }
        for line in &self.costs.labor_lines {
            output.push_str(&format!(
                "  {:<33} {:>8} {:<5} {:>10} {:>12}\n",
                line.name,
                line.quantity,
                format!("{}s", line.rate_type),
                line.rate.to_string(),
                line.total.to_string()
            ));
        }
        output.push_str(&format!("Labor Total: {}\n\n", self.costs.total_labor_cost));

        // Mileage
        output.push_str("MILEAGE\n");
        if self.costs.mileage_lines.is_empty() {
            output.push_str("  (none)\n");
        }
        for line in &self.costs.mileage_lines {
            output.push_str(&format!(
                "  {:<33} {:>8} miles {:>8}/mile {:>12}\n",
                line.label,
                line.total_miles,
                line.cost_per_mile.to_string(),
                line.total.to_string()
            ));
        }
        output.push_str(&format!(
            "Mileage Total: {}\n\n",
            self.costs.total_mileage_cost
        ));

        // Grand total
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!("TOTAL COST: {}\n\n", self.costs.total_cost));

        // Cost per home analysis
        output.push_str("COST PER HOME ANALYSIS\n");
        output.push_str(&format!(
            "  At 100% take rate:      {} ({} homes)\n",
            self.costs.cost_per_home, self.project.homes_passed
        ));
        output.push_str(&format!(
            "  At current take rate:   {} ({} customers)\n",
            self.costs.cost_per_customer, self.project.current_customers
        ));
        output.push_str(&format!(
            "  At projected take rate: {} ({} customers)\n\n",
            self.costs.total_cost / f64::from(self.roi.total_projected_customers),
            self.roi.total_projected_customers
        ));

        // Take rate analysis
        output.push_str("TAKE RATE ANALYSIS\n");
        output.push_str(&format!(
            "  Current:   {} ({} customers)\n",
            format_percent(self.roi.current_take_rate),
            self.project.current_customers
        ));
        output.push_str(&format!(
            "  Projected: {} (+{} customers at {} growth)\n",
            format_percent(self.roi.projected_take_rate),
            self.roi.projected_new_customers,
            format_percent(self.project.projected_growth_percentage)
        ));
        output.push_str(&format!(
            "  Full take: 100.0% ({} homes)\n\n",
            self.project.homes_passed
        ));

        // ROI analysis
        output.push_str("ROI ANALYSIS\n");
        output.push_str(&format!(
            "  Annual income per customer: {}\n",
            self.roi.annual_income_per_customer
        ));
        output.push_str(&format!(
            "  Current ROI:   {}\n",
            format_years(self.roi.current_roi_years)
        ));
        output.push_str(&format!(
            "  Projected ROI: {}\n",
            format_years(self.roi.projected_roi_years)
        ));
        output.push_str(&format!(
            "  Full take ROI: {}\n",
            format_years(self.roi.full_take_roi_years)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> EstimatorResult<()> {
        writeln!(writer, "Section,Department,Item,Quantity,Unit Cost,Total")
            .map_err(|e| EstimatorError::Export(e.to_string()))?;

        for group in &self.costs.department_costs {
            let department = self.department_name(group.department_id);
            for line in &group.lines {
                writeln!(
                    writer,
                    "Materials & Equipment,{},{},{} {},{:.2},{:.2}",
                    department,
                    line.name,
                    line.quantity,
                    line.unit_type,
                    line.unit_cost.amount(),
                    line.total.amount()
                )
                .map_err(|e| EstimatorError::Export(e.to_string()))?;
            }
        }

        for line in &self.costs.labor_lines {
            writeln!(
                writer,
                "Labor,,{},{} {}s,{:.2},{:.2}",
                line.name,
                line.quantity,
                line.rate_type,
                line.rate.amount(),
                line.total.amount()
            )
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
        }

        for line in &self.costs.mileage_lines {
            writeln!(
                writer,
                "Mileage,,{},{} miles,{:.2},{:.2}",
                line.label,
                line.total_miles,
                line.cost_per_mile.amount(),
                line.total.amount()
            )
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,,,,,{:.2}",
            self.costs.total_cost.amount()
        )
        .map_err(|e| EstimatorError::Export(e.to_string()))?;

        Ok(())
    }
}
