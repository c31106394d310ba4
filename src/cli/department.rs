//! Department CLI commands

use clap::Subcommand;

use crate::display::format_department_list;
use crate::error::{EstimatorError, EstimatorResult};
use crate::services::CatalogService;
use crate::storage::Storage;

/// Department subcommands
#[derive(Subcommand)]
pub enum DepartmentCommands {
    /// List all departments with their units
    List,

    /// Add a new department
    Add {
        /// Department name
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Edit a department
    Edit {
        /// Department name or ID
        department: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a department
    Delete {
        /// Department name or ID
        department: String,
        /// Also delete the department's units
        #[arg(long)]
        force: bool,
    },
}

/// Handle a department command
pub fn handle_department_command(storage: &Storage, cmd: DepartmentCommands) -> EstimatorResult<()> {
    let service = CatalogService::new(storage);

    match cmd {
        DepartmentCommands::List => {
            let departments = service.departments_with_units()?;
            print!("{}", format_department_list(&departments));
        }

        DepartmentCommands::Add { name, description } => {
            let department = service.create_department(&name, description.as_deref())?;
            println!("Created department: {}", department.name);
            println!("  ID: {}", department.id);
        }

        DepartmentCommands::Edit {
            department,
            name,
            description,
        } => {
            let found = service
                .find_department(&department)?
                .ok_or_else(|| EstimatorError::department_not_found(department.as_str()))?;

            if name.is_none() && description.is_none() {
                println!("No changes specified. Use --name or --description.");
                return Ok(());
            }

            let updated =
                service.update_department(found.id, name.as_deref(), description.as_deref())?;
            println!("Updated department: {}", updated.name);
        }

        DepartmentCommands::Delete { department, force } => {
            let found = service
                .find_department(&department)?
                .ok_or_else(|| EstimatorError::department_not_found(department.as_str()))?;

            let removed_units = service.delete_department(found.id, force)?;
            println!("Deleted department: {}", found.name);
            if removed_units > 0 {
                println!("  Also removed {} unit(s)", removed_units);
            }
        }
    }

    Ok(())
}
