//! Annual project CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_annual_list;
use crate::error::{EstimatorError, EstimatorResult};
use crate::reports::AnnualSummaryReport;
use crate::services::{AnnualService, ProjectService};
use crate::storage::Storage;

/// Annual project subcommands
#[derive(Subcommand)]
pub enum AnnualCommands {
    /// List all annual projects
    List,

    /// Create a new annual project
    Create {
        /// Annual project name
        name: String,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show an annual project's members
    Show {
        /// Annual project name or ID
        annual: String,
    },

    /// Edit an annual project
    Edit {
        /// Annual project name or ID
        annual: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an annual project (member projects are kept)
    Delete {
        /// Annual project name or ID
        annual: String,
    },

    /// Add a project to an annual project
    AddProject {
        /// Annual project name or ID
        annual: String,
        /// Project name or ID
        project: String,
    },

    /// Remove a project from an annual project
    RemoveProject {
        /// Annual project name or ID
        annual: String,
        /// Project name or ID
        project: String,
    },

    /// Show the rolled-up summary for an annual project
    Summary {
        /// Annual project name or ID
        annual: String,
        /// Override the fleet-wide default growth percentage
        #[arg(long)]
        growth: Option<f64>,
        /// Write the breakdown as CSV to this path instead
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// Handle an annual project command
pub fn handle_annual_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AnnualCommands,
) -> EstimatorResult<()> {
    let service = AnnualService::new(storage);

    match cmd {
        AnnualCommands::List => {
            let annual_projects = storage.annual_projects.get_all()?;
            print!("{}", format_annual_list(&annual_projects));
        }

        AnnualCommands::Create { name, notes } => {
            let annual = service.create_annual(&name, notes.as_deref())?;
            println!("Created annual project: {}", annual.name);
            println!("  ID: {}", annual.id);
        }

        AnnualCommands::Show { annual } => {
            let found = service
                .find_annual(&annual)?
                .ok_or_else(|| EstimatorError::annual_project_not_found(annual.as_str()))?;

            println!("{}", found.name);
            println!("  ID: {}", found.id);
            if let Some(notes) = &found.notes {
                println!("  Notes: {}", notes);
            }
            println!("  Members: {}", found.project_ids.len());
            for project_id in &found.project_ids {
                match storage.projects.get(*project_id)? {
                    Some(project) => println!("  - {}", project.name),
                    None => println!("  - (deleted project {})", project_id),
                }
            }
        }

        AnnualCommands::Edit {
            annual,
            name,
            notes,
        } => {
            let found = service
                .find_annual(&annual)?
                .ok_or_else(|| EstimatorError::annual_project_not_found(annual.as_str()))?;

            if name.is_none() && notes.is_none() {
                println!("No changes specified. Use --name or --notes.");
                return Ok(());
            }

            let updated = service.update_annual(found.id, name.as_deref(), notes.as_deref())?;
            println!("Updated annual project: {}", updated.name);
        }

        AnnualCommands::Delete { annual } => {
            let found = service
                .find_annual(&annual)?
                .ok_or_else(|| EstimatorError::annual_project_not_found(annual.as_str()))?;

            service.delete_annual(found.id)?;
            println!("Deleted annual project: {}", found.name);
        }

        AnnualCommands::AddProject { annual, project } => {
            let found = service
                .find_annual(&annual)?
                .ok_or_else(|| EstimatorError::annual_project_not_found(annual.as_str()))?;
            let member = ProjectService::new(storage)
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            let updated = service.add_project(found.id, member.id)?;
            println!(
                "Added '{}' to {} ({} member(s))",
                member.name,
                updated.name,
                updated.project_ids.len()
            );
        }

        AnnualCommands::RemoveProject { annual, project } => {
            let found = service
                .find_annual(&annual)?
                .ok_or_else(|| EstimatorError::annual_project_not_found(annual.as_str()))?;
            let member = ProjectService::new(storage)
                .find_project(&project)?
                .ok_or_else(|| EstimatorError::project_not_found(project.as_str()))?;

            let updated = service.remove_project(found.id, member.id)?;
            println!(
                "Removed '{}' from {} ({} member(s))",
                member.name,
                updated.name,
                updated.project_ids.len()
            );
        }

        AnnualCommands::Summary {
            annual,
            growth,
            csv,
        } => {
            let found = service
                .find_annual(&annual)?
                .ok_or_else(|| EstimatorError::annual_project_not_found(annual.as_str()))?;

            let default_growth = growth.unwrap_or(settings.annual_growth_percentage);
            let report = AnnualSummaryReport::generate(storage, found.id, default_growth)?;

            match csv {
                Some(path) => {
                    let mut file = File::create(&path)
                        .map_err(|e| EstimatorError::Export(e.to_string()))?;
                    report.export_csv(&mut file)?;
                    println!("Wrote annual summary CSV to {}", path.display());
                }
                None => print!("{}", report.format_terminal()),
            }
        }
    }

    Ok(())
}
