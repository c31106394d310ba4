//! Annual rollup arithmetic
//!
//! An annual project is just a set of project areas; its figures are the
//! arithmetic combination of the per-project engine outputs. The rollup is
//! kept as a pure helper so the annual report and its tests share one
//! definition.

use crate::models::{Money, ProjectId};

use super::costs::CostBreakdown;
use super::roi::RoiProjection;

/// The engine outputs for one member project of an annual rollup
#[derive(Debug, Clone)]
pub struct ProjectEstimate {
    pub project_id: ProjectId,
    pub project_name: String,
    pub homes_passed: u32,
    pub current_customers: u32,
    pub monthly_income_per_customer: Money,
    pub costs: CostBreakdown,
    pub roi: RoiProjection,
}

/// Combined figures for a set of project estimates
#[derive(Debug, Clone)]
pub struct AnnualRollup {
    pub project_count: usize,
    pub total_units_cost: Money,
    pub total_labor_cost: Money,
    pub total_mileage_cost: Money,
    pub total_cost: Money,
    pub total_homes_passed: u32,
    pub total_current_customers: u32,
    pub total_projected_customers: u32,
    /// Aggregate current take rate; 0 when no homes are passed
    pub current_take_rate: f64,
    /// Aggregate projected take rate; 0 when no homes are passed
    pub projected_take_rate: f64,
    /// Combined cost per home passed; an IEEE sentinel when there are none
    pub cost_per_home: Money,
    /// Years to recoup the combined cost from projected annual income
    pub payback_years: f64,
}

impl AnnualRollup {
    /// Sum per-project estimates into one annual view
    pub fn compute(estimates: &[ProjectEstimate]) -> Self {
        let mut total_units_cost = Money::zero();
        let mut total_labor_cost = Money::zero();
        let mut total_mileage_cost = Money::zero();
        let mut total_homes_passed: u32 = 0;
        let mut total_current_customers: u32 = 0;
        let mut total_projected_customers: u32 = 0;
        let mut projected_annual_income = Money::zero();

        for estimate in estimates {
            total_units_cost += estimate.costs.total_units_cost;
            total_labor_cost += estimate.costs.total_labor_cost;
            total_mileage_cost += estimate.costs.total_mileage_cost;
            total_homes_passed += estimate.homes_passed;
            total_current_customers += estimate.current_customers;
            total_projected_customers += estimate.roi.total_projected_customers;
            projected_annual_income += estimate.monthly_income_per_customer
                * 12.0
                * f64::from(estimate.roi.total_projected_customers);
        }

        let total_cost = total_units_cost + total_labor_cost + total_mileage_cost;

        // Take rates use an explicit guard: an empty rollup reads as 0%, not N/A
        let (current_take_rate, projected_take_rate) = if total_homes_passed > 0 {
            let homes = f64::from(total_homes_passed);
            (
                f64::from(total_current_customers) / homes * 100.0,
                f64::from(total_projected_customers) / homes * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        let cost_per_home = total_cost / f64::from(total_homes_passed);
        let payback_years = total_cost.amount() / projected_annual_income.amount();

        Self {
            project_count: estimates.len(),
            total_units_cost,
            total_labor_cost,
            total_mileage_cost,
            total_cost,
            total_homes_passed,
            total_current_customers,
            total_projected_customers,
            current_take_rate,
            projected_take_rate,
            cost_per_home,
            payback_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DepartmentId, Money, ProjectArea, Unit, UnitType};

    fn estimate(homes: u32, customers: u32, income: f64, growth: f64, unit_cost: f64) -> ProjectEstimate {
        let dept = DepartmentId::new();
        let unit = Unit::new("Cable", dept, UnitType::Each, Money::from_dollars(unit_cost));

        let mut project = ProjectArea::new("Area", homes, customers);
        project.monthly_income_per_customer = Money::from_dollars(income);
        project.projected_growth_percentage = growth;
        project.set_unit_quantity(unit.id, 1);

        let costs = CostBreakdown::compute(&project, &[unit], &[], &[]);
        let roi = RoiProjection::compute(&project, costs.total_cost);

        ProjectEstimate {
            project_id: project.id,
            project_name: project.name.clone(),
            homes_passed: project.homes_passed,
            current_customers: project.current_customers,
            monthly_income_per_customer: project.monthly_income_per_customer,
            costs,
            roi,
        }
    }

    #[test]
    fn test_rollup_sums_sections() {
        let estimates = vec![
            estimate(100, 20, 30.0, 0.0, 1000.0),
            estimate(200, 80, 30.0, 0.0, 3000.0),
        ];
        let rollup = AnnualRollup::compute(&estimates);

        assert_eq!(rollup.project_count, 2);
        assert_eq!(rollup.total_units_cost, Money::from_dollars(4000.0));
        assert_eq!(rollup.total_cost, Money::from_dollars(4000.0));
        assert_eq!(rollup.total_homes_passed, 300);
        assert_eq!(rollup.total_current_customers, 100);
    }

    #[test]
    fn test_rollup_take_rates() {
        let estimates = vec![
            estimate(100, 20, 30.0, 0.0, 10.0),
            estimate(100, 30, 30.0, 0.0, 10.0),
        ];
        let rollup = AnnualRollup::compute(&estimates);

        assert_eq!(rollup.current_take_rate, 25.0);
        assert_eq!(rollup.projected_take_rate, 25.0);
    }

    #[test]
    fn test_rollup_projected_customers_use_per_project_growth() {
        // 80 remaining at 50% -> 40 new; 70 remaining at 0% -> none
        let estimates = vec![
            estimate(100, 20, 30.0, 50.0, 10.0),
            estimate(100, 30, 30.0, 0.0, 10.0),
        ];
        let rollup = AnnualRollup::compute(&estimates);

        assert_eq!(rollup.total_projected_customers, 90);
        assert_eq!(rollup.projected_take_rate, 45.0);
    }

    #[test]
    fn test_empty_rollup_guards_take_rate() {
        let rollup = AnnualRollup::compute(&[]);

        assert_eq!(rollup.project_count, 0);
        assert!(rollup.total_cost.is_zero());
        assert_eq!(rollup.current_take_rate, 0.0);
        assert_eq!(rollup.projected_take_rate, 0.0);
        // Cost per home over zero homes stays a sentinel (0/0)
        assert!(!rollup.cost_per_home.is_finite());
    }

    #[test]
    fn test_payback_years() {
        // 1200 cost, 20 projected customers at $30/month: 7200/year
        let estimates = vec![estimate(100, 20, 30.0, 0.0, 1200.0)];
        let rollup = AnnualRollup::compute(&estimates);

        assert!((rollup.payback_years - 1200.0 / 7200.0).abs() < 1e-12);
    }
}
