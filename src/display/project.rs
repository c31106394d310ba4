//! Project and annual project display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{AnnualProject, ProjectArea};

use super::format_percent;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Project")]
    name: String,
    #[tabled(rename = "Homes")]
    homes: u32,
    #[tabled(rename = "Customers")]
    customers: u32,
    #[tabled(rename = "Take rate")]
    take_rate: String,
    #[tabled(rename = "Lines")]
    lines: usize,
}

#[derive(Tabled)]
struct AnnualRow {
    #[tabled(rename = "Annual project")]
    name: String,
    #[tabled(rename = "Projects")]
    projects: usize,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Format the project list as a table
pub fn format_project_list(projects: &[ProjectArea]) -> String {
    if projects.is_empty() {
        return "No projects. Create one with 'fiberplan project create'.\n".to_string();
    }

    let rows: Vec<ProjectRow> = projects
        .iter()
        .map(|p| ProjectRow {
            name: p.name.clone(),
            homes: p.homes_passed,
            customers: p.current_customers,
            take_rate: format_percent(
                f64::from(p.current_customers) / f64::from(p.homes_passed) * 100.0,
            ),
            lines: p.units.len() + p.labor_rates.len() + p.mileage_rates.len(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format one project's fields and selection counts
pub fn format_project_details(project: &ProjectArea) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", project.name));
    output.push_str(&format!("  ID: {}\n", project.id));
    if !project.notes.is_empty() {
        output.push_str(&format!("  Notes: {}\n", project.notes));
    }
    if let Some(image_url) = &project.image_url {
        output.push_str(&format!("  Image: {}\n", image_url));
    }
    output.push_str(&format!("  Homes passed: {}\n", project.homes_passed));
    output.push_str(&format!(
        "  Current customers: {}\n",
        project.current_customers
    ));
    output.push_str(&format!(
        "  Monthly income per customer: {}\n",
        project.monthly_income_per_customer
    ));
    output.push_str(&format!(
        "  Projected growth: {}\n",
        format_percent(project.projected_growth_percentage)
    ));
    output.push_str(&format!(
        "  Selections: {} unit(s), {} labor, {} mileage\n",
        project.units.len(),
        project.labor_rates.len(),
        project.mileage_rates.len()
    ));
    output.push_str(&format!(
        "  Updated: {}\n",
        project.updated_at.format("%Y-%m-%d %H:%M")
    ));
    output
}

/// Format the annual project list as a table
pub fn format_annual_list(annual_projects: &[AnnualProject]) -> String {
    if annual_projects.is_empty() {
        return "No annual projects. Create one with 'fiberplan annual create'.\n".to_string();
    }

    let rows: Vec<AnnualRow> = annual_projects
        .iter()
        .map(|a| AnnualRow {
            name: a.name.clone(),
            projects: a.project_ids.len(),
            updated: a.updated_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectId;

    #[test]
    fn test_project_list() {
        let project = ProjectArea::new("Cedar Ridge", 1000, 300);
        let output = format_project_list(&[project]);
        assert!(output.contains("Cedar Ridge"));
        assert!(output.contains("30.0%"));
    }

    #[test]
    fn test_project_list_zero_homes_is_na() {
        let project = ProjectArea::new("Empty", 0, 0);
        let output = format_project_list(&[project]);
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_project_details() {
        let mut project = ProjectArea::new("Cedar Ridge", 1000, 300);
        project.notes = "Phase 1".into();
        let output = format_project_details(&project);
        assert!(output.contains("Cedar Ridge"));
        assert!(output.contains("Notes: Phase 1"));
        assert!(output.contains("Homes passed: 1000"));
    }

    #[test]
    fn test_annual_list() {
        let mut annual = AnnualProject::new("FY2026");
        annual.add_project(ProjectId::new());
        let output = format_annual_list(&[annual]);
        assert!(output.contains("FY2026"));
    }
}
