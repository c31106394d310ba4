//! CSV Export functionality
//!
//! Exports the rate catalogs and project list as spreadsheet-compatible CSV.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{EstimatorError, EstimatorResult};
use crate::storage::Storage;

/// Export all four catalogs as one CSV table
///
/// Rows carry a `Catalog` discriminator column so the whole rate book fits
/// in a single spreadsheet import.
pub fn export_catalogs_csv<W: Write>(storage: &Storage, writer: &mut W) -> EstimatorResult<()> {
    let departments = storage.departments.get_all()?;
    let department_names: HashMap<_, _> = departments
        .iter()
        .map(|d| (d.id, d.name.clone()))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Catalog", "Name", "Department", "Type", "Cost"])
        .map_err(|e| EstimatorError::Export(e.to_string()))?;

    for unit in storage.units.get_all()? {
        let department = department_names
            .get(&unit.department_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());
        csv_writer
            .write_record([
                "Unit",
                &unit.name,
                &department,
                &unit.unit_type.to_string(),
                &format!("{:.2}", unit.cost.amount()),
            ])
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
    }

    for rate in storage.labor_rates.get_all()? {
        csv_writer
            .write_record([
                "Labor",
                &rate.name,
                "",
                &rate.rate_type.to_string(),
                &format!("{:.2}", rate.cost.amount()),
            ])
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
    }

    for rate in storage.mileage_rates.get_all()? {
        csv_writer
            .write_record([
                "Mileage",
                &format!("{} miles", rate.distance),
                "",
                "mile",
                &format!("{:.2}", rate.cost_per_mile.amount()),
            ])
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| EstimatorError::Export(e.to_string()))?;
    Ok(())
}

/// Export the project list as CSV
pub fn export_projects_csv<W: Write>(storage: &Storage, writer: &mut W) -> EstimatorResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Project",
            "Homes Passed",
            "Current Customers",
            "Monthly Income",
            "Growth %",
            "Unit Lines",
            "Labor Lines",
            "Mileage Lines",
        ])
        .map_err(|e| EstimatorError::Export(e.to_string()))?;

    for project in storage.projects.get_all()? {
        csv_writer
            .write_record([
                project.name.as_str(),
                &project.homes_passed.to_string(),
                &project.current_customers.to_string(),
                &format!("{:.2}", project.monthly_income_per_customer.amount()),
                &project.projected_growth_percentage.to_string(),
                &project.units.len().to_string(),
                &project.labor_rates.len().to_string(),
                &project.mileage_rates.len().to_string(),
            ])
            .map_err(|e| EstimatorError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| EstimatorError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FiberPaths;
    use crate::models::{LaborRateType, Money, UnitType};
    use crate::services::{CatalogService, ProjectService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FiberPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_catalogs_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = CatalogService::new(&storage);

        let department = catalog.create_department("Drops", None).unwrap();
        catalog
            .create_unit(
                "Drop Cable",
                department.id,
                UnitType::Foot,
                Money::from_dollars(0.35),
                None,
            )
            .unwrap();
        catalog
            .create_labor_rate("Splicer", LaborRateType::Hour, Money::from_dollars(85.0))
            .unwrap();

        let mut buffer = Vec::new();
        export_catalogs_csv(&storage, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.starts_with("Catalog,Name,Department,Type,Cost"));
        assert!(csv.contains("Unit,Drop Cable,Drops,foot,0.35"));
        assert!(csv.contains("Labor,Splicer,,hour,85.00"));
    }

    #[test]
    fn test_export_projects_csv() {
        let (_temp_dir, storage) = create_test_storage();
        ProjectService::new(&storage)
            .create_project("Cedar Ridge", 1000, 300, Money::from_dollars(65.0), 33.0, None, None)
            .unwrap();

        let mut buffer = Vec::new();
        export_projects_csv(&storage, &mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("Cedar Ridge,1000,300,65.00,33"));
    }
}
