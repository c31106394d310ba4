//! Project CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_project_details, format_project_list};
use crate::error::{EstimatorError, EstimatorResult};
use crate::reports::ProjectSummaryReport;
use crate::services::{project::ProjectUpdate, ProjectService};
use crate::storage::Storage;

use super::parse_money;

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Create a new project
    Create {
        /// Project name
        name: String,
        /// Homes passed in the project footprint
        #[arg(long)]
        homes: u32,
        /// Current customer count
        #[arg(long, default_value = "0")]
        customers: u32,
        /// Monthly income per customer (defaults to the settings value)
        #[arg(long)]
        income: Option<String>,
        /// Projected growth percentage (0-100)
        #[arg(long, default_value = "0")]
        growth: f64,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
        /// Map/plat image URL
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Show project details
    Show {
        /// Project name or ID
        project: String,
    },

    /// Edit a project
    Edit {
        /// Project name or ID
        project: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
        /// New homes passed count
        #[arg(long)]
        homes: Option<u32>,
        /// New current customer count
        #[arg(long)]
        customers: Option<u32>,
        /// New monthly income per customer
        #[arg(long)]
        income: Option<String>,
        /// New projected growth percentage
        #[arg(long)]
        growth: Option<f64>,
        /// New image URL
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project name or ID
        project: String,
    },

    /// Set a unit quantity on a project (0 removes the line)
    SetUnit {
        /// Project name or ID
        project: String,
        /// Unit name or ID
        unit: String,
        /// Usage quantity
        quantity: u32,
    },

    /// Set a labor quantity on a project (0 removes the line)
    SetLabor {
        /// Project name or ID
        project: String,
        /// Labor rate name or ID
        labor: String,
        /// Billed quantity
        quantity: u32,
    },

    /// Set mileage round trips on a project (0 removes the line)
    SetMileage {
        /// Project name or ID
        project: String,
        /// Mileage rate ID or one-way distance
        mileage: String,
        /// Number of round trips
        trips: u32,
    },

    /// Show the full cost and ROI summary for a project
    Summary {
        /// Project name or ID
        project: String,
        /// Write the breakdown as CSV to this path instead
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// Handle a project command
pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProjectCommands,
) -> EstimatorResult<()> {
    let service = ProjectService::new(storage);

    match cmd {
        ProjectCommands::List => {
            let projects = storage.projects.get_all()?;
            print!("{}", format_project_list(&projects));
        }

        ProjectCommands::Create {
            name,
            homes,
            customers,
            income,
            growth,
            notes,
            image_url,
        } => {
            // Fall back to the settings-level income assumption
            let income = match income {
                Some(s) => parse_money(&s)?,
                None => settings.monthly_income_per_customer,
            };

            let project = service.create_project(
                &name,
                homes,
                customers,
                income,
                growth,
                notes.as_deref(),
                image_url.as_deref(),
            )?;

            println!("Created project: {}", project.name);
            println!("  Homes passed: {}", project.homes_passed);
            println!("  Current customers: {}", project.current_customers);
            println!("  ID: {}", project.id);
        }

        ProjectCommands::Show { project } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;
            print!("{}", format_project_details(&found));
        }

        ProjectCommands::Edit {
            project,
            name,
            notes,
            homes,
            customers,
            income,
            growth,
            image_url,
        } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            let income = income.as_deref().map(parse_money).transpose()?;

            let updated = service.update_project(
                found.id,
                ProjectUpdate {
                    name,
                    notes,
                    image_url,
                    homes_passed: homes,
                    current_customers: customers,
                    monthly_income_per_customer: income,
                    projected_growth_percentage: growth,
                },
            )?;
            println!("Updated project: {}", updated.name);
        }

        ProjectCommands::Delete { project } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            service.delete_project(found.id)?;
            println!("Deleted project: {}", found.name);
        }

        ProjectCommands::SetUnit {
            project,
            unit,
            quantity,
        } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            service.set_unit(found.id, &unit, quantity)?;
            if quantity == 0 {
                println!("Removed unit '{}' from {}", unit, found.name);
            } else {
                println!("Set unit '{}' to {} on {}", unit, quantity, found.name);
            }
        }

        ProjectCommands::SetLabor {
            project,
            labor,
            quantity,
        } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            service.set_labor(found.id, &labor, quantity)?;
            if quantity == 0 {
                println!("Removed labor '{}' from {}", labor, found.name);
            } else {
                println!("Set labor '{}' to {} on {}", labor, quantity, found.name);
            }
        }

        ProjectCommands::SetMileage {
            project,
            mileage,
            trips,
        } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            service.set_mileage(found.id, &mileage, trips)?;
            if trips == 0 {
                println!("Removed mileage '{}' from {}", mileage, found.name);
            } else {
                println!("Set mileage '{}' to {} trips on {}", mileage, trips, found.name);
            }
        }

        ProjectCommands::Summary { project, csv } => {
            let found = service
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            let report = ProjectSummaryReport::generate(storage, found.id)?;

            match csv {
                Some(path) => {
                    let mut file = File::create(&path)
                        .map_err(|e| EstimatorError::Export(e.to_string()))?;
                    report.export_csv(&mut file)?;
                    println!("Wrote summary CSV to {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }
    }

    Ok(())
}
