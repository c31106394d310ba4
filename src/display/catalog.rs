//! Catalog display formatting

use std::collections::HashMap;

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Department, LaborRate, MileageRate, Unit};

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "Unit")]
    name: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Type")]
    unit_type: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

#[derive(Tabled)]
struct LaborRow {
    #[tabled(rename = "Labor")]
    name: String,
    #[tabled(rename = "Billed per")]
    rate_type: String,
    #[tabled(rename = "Rate")]
    cost: String,
}

#[derive(Tabled)]
struct MileageRow {
    #[tabled(rename = "One-way miles")]
    distance: String,
    #[tabled(rename = "Cost per mile")]
    cost_per_mile: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format the unit catalog as a table, resolving department names
pub fn format_unit_list(units: &[Unit], departments: &[Department]) -> String {
    if units.is_empty() {
        return "No units in the catalog. Add one with 'fiberplan unit add'.\n".to_string();
    }

    let department_names: HashMap<_, _> = departments
        .iter()
        .map(|d| (d.id, d.name.as_str()))
        .collect();

    let rows: Vec<UnitRow> = units
        .iter()
        .map(|u| UnitRow {
            name: u.name.clone(),
            department: department_names
                .get(&u.department_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "(deleted)".to_string()),
            unit_type: u.unit_type.to_string(),
            cost: u.cost.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format departments with their unit counts
pub fn format_department_list(departments: &[(Department, Vec<Unit>)]) -> String {
    if departments.is_empty() {
        return "No departments. Add one with 'fiberplan department add'.\n".to_string();
    }

    let mut output = String::new();
    for (department, units) in departments {
        output.push_str(&format!(
            "{} ({} unit{})\n",
            department.name,
            units.len(),
            if units.len() == 1 { "" } else { "s" }
        ));
        if let Some(description) = &department.description {
            output.push_str(&format!("  {}\n", description));
        }
        for unit in units {
            output.push_str(&format!(
                "  - {} ({}/{})\n",
                unit.name, unit.cost, unit.unit_type
            ));
        }
    }
    output
}

/// Format the labor rate catalog as a table
pub fn format_labor_list(rates: &[LaborRate]) -> String {
    if rates.is_empty() {
        return "No labor rates. Add one with 'fiberplan labor add'.\n".to_string();
    }

    let rows: Vec<LaborRow> = rates
        .iter()
        .map(|r| LaborRow {
            name: r.name.clone(),
            rate_type: r.rate_type.to_string(),
            cost: r.cost.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the mileage rate catalog as a table
pub fn format_mileage_list(rates: &[MileageRate]) -> String {
    if rates.is_empty() {
        return "No mileage rates. Add one with 'fiberplan mileage add'.\n".to_string();
    }

    let rows: Vec<MileageRow> = rates
        .iter()
        .map(|r| MileageRow {
            distance: r.distance.to_string(),
            cost_per_mile: r.cost_per_mile.to_string(),
            id: r.id.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
