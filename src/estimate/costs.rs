//! Project cost aggregation
//!
//! Converts a project's selected units, labor rates and mileage trips into an
//! itemized cost breakdown against the current catalogs. Catalog references
//! that no longer resolve are skipped silently: catalogs and projects are
//! edited independently, so transient dangling ids are expected and must not
//! fail an estimate.

use std::collections::HashMap;

use crate::models::{
    DepartmentId, LaborRate, LaborRateType, MileageRate, Money, ProjectArea, Unit, UnitType,
};

/// One priced material/equipment line
#[derive(Debug, Clone, PartialEq)]
pub struct UnitLine {
    pub name: String,
    pub unit_cost: Money,
    pub quantity: u32,
    pub unit_type: UnitType,
    pub department_id: DepartmentId,
    pub total: Money,
}

/// Unit lines for one department, in project insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentCosts {
    pub department_id: DepartmentId,
    pub lines: Vec<UnitLine>,
}

impl DepartmentCosts {
    /// Sum of this department's line totals
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.total).sum()
    }
}

/// One priced labor line
#[derive(Debug, Clone, PartialEq)]
pub struct LaborLine {
    pub name: String,
    pub rate: Money,
    pub quantity: u32,
    pub rate_type: LaborRateType,
    pub total: Money,
}

/// One priced mileage line
///
/// `total_miles` already includes the round-trip doubling; the stored rate
/// distance is one-way.
#[derive(Debug, Clone, PartialEq)]
pub struct MileageLine {
    pub label: String,
    pub cost_per_mile: Money,
    pub trips: u32,
    pub total_miles: f64,
    pub total: Money,
}

/// Itemized cost breakdown for one project area
#[derive(Debug, Clone)]
pub struct CostBreakdown {
    /// Unit lines grouped by department, departments in first-seen order
    pub department_costs: Vec<DepartmentCosts>,
    pub labor_lines: Vec<LaborLine>,
    pub mileage_lines: Vec<MileageLine>,
    pub total_units_cost: Money,
    pub total_labor_cost: Money,
    pub total_mileage_cost: Money,
    pub total_cost: Money,
    /// Total cost per home passed; an IEEE sentinel when homes_passed is 0
    pub cost_per_home: Money,
    /// Total cost per current customer; an IEEE sentinel when there are none
    pub cost_per_customer: Money,
}

impl CostBreakdown {
    /// Compute the cost breakdown for a project against the given catalogs
    ///
    /// Catalog slices may be in any order; lookup is by id. References that
    /// do not resolve contribute nothing to the output.
    pub fn compute(
        project: &ProjectArea,
        units: &[Unit],
        labor_rates: &[LaborRate],
        mileage_rates: &[MileageRate],
    ) -> Self {
        let unit_index: HashMap<_, _> = units.iter().map(|u| (u.id, u)).collect();
        let labor_index: HashMap<_, _> = labor_rates.iter().map(|r| (r.id, r)).collect();
        let mileage_index: HashMap<_, _> = mileage_rates.iter().map(|r| (r.id, r)).collect();

        let mut department_costs: Vec<DepartmentCosts> = Vec::new();
        for selection in &project.units {
            let Some(unit) = unit_index.get(&selection.unit_id) else {
                continue;
            };
            let line = UnitLine {
                name: unit.name.clone(),
                unit_cost: unit.cost,
                quantity: selection.quantity,
                unit_type: unit.unit_type,
                department_id: unit.department_id,
                total: unit.cost * f64::from(selection.quantity),
            };
            match department_costs
                .iter_mut()
                .find(|d| d.department_id == unit.department_id)
            {
                Some(group) => group.lines.push(line),
                None => department_costs.push(DepartmentCosts {
                    department_id: unit.department_id,
                    lines: vec![line],
                }),
            }
        }

        let labor_lines: Vec<LaborLine> = project
            .labor_rates
            .iter()
            .filter_map(|selection| {
                let rate = labor_index.get(&selection.labor_rate_id)?;
                Some(LaborLine {
                    name: rate.name.clone(),
                    rate: rate.cost,
                    quantity: selection.quantity,
                    rate_type: rate.rate_type,
                    total: rate.cost * f64::from(selection.quantity),
                })
            })
            .collect();

        let mileage_lines: Vec<MileageLine> = project
            .mileage_rates
            .iter()
            .filter_map(|selection| {
                let rate = mileage_index.get(&selection.mileage_rate_id)?;
                // Stored distance is one-way; trips are round trips
                let total_miles = rate.distance * f64::from(selection.trips) * 2.0;
                Some(MileageLine {
                    label: format!("{} miles ({} trips)", rate.distance, selection.trips),
                    cost_per_mile: rate.cost_per_mile,
                    trips: selection.trips,
                    total_miles,
                    total: rate.cost_per_mile * total_miles,
                })
            })
            .collect();

        let total_units_cost: Money = department_costs.iter().map(|d| d.subtotal()).sum();
        let total_labor_cost: Money = labor_lines.iter().map(|l| l.total).sum();
        let total_mileage_cost: Money = mileage_lines.iter().map(|l| l.total).sum();
        let total_cost = total_units_cost + total_labor_cost + total_mileage_cost;

        let cost_per_home = total_cost / f64::from(project.homes_passed);
        let cost_per_customer = total_cost / f64::from(project.current_customers);

        Self {
            department_costs,
            labor_lines,
            mileage_lines,
            total_units_cost,
            total_labor_cost,
            total_mileage_cost,
            total_cost,
            cost_per_home,
            cost_per_customer,
        }
    }

    /// All unit lines as a flat list (groups concatenated in order)
    pub fn unit_lines(&self) -> impl Iterator<Item = &UnitLine> {
        self.department_costs.iter().flat_map(|d| d.lines.iter())
    }
}
