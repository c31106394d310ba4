//! Unit CLI commands

use clap::Subcommand;

use crate::display::format_unit_list;
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::UnitType;
use crate::services::CatalogService;
use crate::storage::Storage;

use super::parse_money;

/// Unit subcommands
#[derive(Subcommand)]
pub enum UnitCommands {
    /// List units, optionally for one department
    List {
        /// Filter by department name or ID
        #[arg(short, long)]
        department: Option<String>,
    },

    /// Add a new unit
    Add {
        /// Unit name
        name: String,
        /// Department name or ID
        #[arg(short, long)]
        department: String,
        /// How the unit is counted: each, foot, or hour
        #[arg(short = 't', long = "type", default_value = "each")]
        unit_type: String,
        /// Cost per counted unit (e.g., "0.35" or "$12.50")
        #[arg(short, long)]
        cost: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Show unit details
    Show {
        /// Unit name or ID
        unit: String,
    },

    /// Edit a unit
    Edit {
        /// Unit name or ID
        unit: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New department name or ID
        #[arg(short, long)]
        department: Option<String>,
        /// New unit type: each, foot, or hour
        #[arg(short = 't', long = "type")]
        unit_type: Option<String>,
        /// New cost
        #[arg(short, long)]
        cost: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a unit
    Delete {
        /// Unit name or ID
        unit: String,
    },
}

fn parse_unit_type(s: &str) -> EstimatorResult<UnitType> {
    match s.to_lowercase().as_str() {
        "each" => Ok(UnitType::Each),
        "foot" => Ok(UnitType::Foot),
        "hour" => Ok(UnitType::Hour),
        other => Err(EstimatorError::Validation(format!(
            "Unknown unit type '{}'; expected each, foot, or hour",
            other
        ))),
    }
}

/// Handle a unit command
pub fn handle_unit_command(storage: &Storage, cmd: UnitCommands) -> EstimatorResult<()> {
    let service = CatalogService::new(storage);

    match cmd {
        UnitCommands::List { department } => {
            let departments = storage.departments.get_all()?;
            let units = match department {
                Some(identifier) => {
                    let found = service
                        .find_department(&identifier)?
                        .ok_or_else(|| EstimatorError::department_not_found(identifier.as_str()))?;
                    storage.units.get_by_department(found.id)?
                }
                None => storage.units.get_all()?,
            };
            print!("{}", format_unit_list(&units, &departments));
        }

        UnitCommands::Add {
            name,
            department,
            unit_type,
            cost,
            description,
        } => {
            let found = service
                .find_department(&department)?
                .ok_or_else(|| EstimatorError::department_not_found(department.as_str()))?;

            let unit = service.create_unit(
                &name,
                found.id,
                parse_unit_type(&unit_type)?,
                parse_money(&cost)?,
                description.as_deref(),
            )?;

            println!("Created unit: {}", unit.name);
            println!("  Department: {}", found.name);
            println!("  Cost: {}/{}", unit.cost, unit.unit_type);
            println!("  ID: {}", unit.id);
        }

        UnitCommands::Show { unit } => {
            let found = service
                .find_unit(&unit)?
                .ok_or_else(|| EstimatorError::unit_not_found(unit.as_str()))?;
            let department = storage.departments.get(found.department_id)?;

            println!("{}", found.name);
            println!("  ID: {}", found.id);
            println!(
                "  Department: {}",
                department
                    .map(|d| d.name)
                    .unwrap_or_else(|| "(deleted)".to_string())
            );
            println!("  Type: {}", found.unit_type);
            println!("  Cost: {}", found.cost);
            if let Some(description) = &found.description {
                println!("  Description: {}", description);
            }
        }

        UnitCommands::Edit {
            unit,
            name,
            department,
            unit_type,
            cost,
            description,
        } => {
            let found = service
                .find_unit(&unit)?
                .ok_or_else(|| EstimatorError::unit_not_found(unit.as_str()))?;

            if name.is_none()
                && department.is_none()
                && unit_type.is_none()
                && cost.is_none()
                && description.is_none()
            {
                println!("No changes specified.");
                return Ok(());
            }

            let department_id = match department {
                Some(identifier) => Some(
                    service
                        .find_department(&identifier)?
                        .ok_or_else(|| EstimatorError::department_not_found(identifier.as_str()))?
                        .id,
                ),
                None => None,
            };
            let unit_type = unit_type.as_deref().map(parse_unit_type).transpose()?;
            let cost = cost.as_deref().map(parse_money).transpose()?;

            let updated = service.update_unit(
                found.id,
                name.as_deref(),
                department_id,
                unit_type,
                cost,
                description.as_deref(),
            )?;
            println!("Updated unit: {}", updated.name);
        }

        UnitCommands::Delete { unit } => {
            let found = service
                .find_unit(&unit)?
                .ok_or_else(|| EstimatorError::unit_not_found(unit.as_str()))?;

            service.delete_unit(found.id)?;
            println!("Deleted unit: {}", found.name);
        }
    }

    Ok(())
}
