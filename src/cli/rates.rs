//! Labor and mileage rate CLI commands

use clap::Subcommand;

use crate::display::{format_labor_list, format_mileage_list};
use crate::error::{EstimatorError, EstimatorResult};
use crate::models::LaborRateType;
use crate::services::CatalogService;
use crate::storage::Storage;

use super::parse_money;

/// Labor rate subcommands
#[derive(Subcommand)]
pub enum LaborCommands {
    /// List all labor rates
    List,

    /// Add a new labor rate
    Add {
        /// Labor category name
        name: String,
        /// How the rate is billed: hour or day
        #[arg(short = 't', long = "type", default_value = "hour")]
        rate_type: String,
        /// Cost per billed hour/day
        #[arg(short, long)]
        rate: String,
    },

    /// Edit a labor rate
    Edit {
        /// Labor rate name or ID
        labor: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New billing type: hour or day
        #[arg(short = 't', long = "type")]
        rate_type: Option<String>,
        /// New cost
        #[arg(short, long)]
        rate: Option<String>,
    },

    /// Delete a labor rate
    Delete {
        /// Labor rate name or ID
        labor: String,
    },
}

/// Mileage rate subcommands
#[derive(Subcommand)]
pub enum MileageCommands {
    /// List all mileage rates
    List,

    /// Add a new mileage rate
    Add {
        /// One-way distance in miles
        distance: f64,
        /// Cost per mile driven
        #[arg(short, long)]
        cost_per_mile: String,
    },

    /// Edit a mileage rate
    Edit {
        /// Mileage rate ID or one-way distance
        mileage: String,
        /// New one-way distance
        #[arg(short, long)]
        distance: Option<f64>,
        /// New cost per mile
        #[arg(short, long)]
        cost_per_mile: Option<String>,
    },

    /// Delete a mileage rate
    Delete {
        /// Mileage rate ID or one-way distance
        mileage: String,
    },
}

fn parse_rate_type(s: &str) -> EstimatorResult<LaborRateType> {
    match s.to_lowercase().as_str() {
        "hour" => Ok(LaborRateType::Hour),
        "day" => Ok(LaborRateType::Day),
        other => Err(EstimatorError::Validation(format!(
            "Unknown labor rate type '{}'; expected hour or day",
            other
        ))),
    }
}

/// Handle a labor rate command
pub fn handle_labor_command(storage: &Storage, cmd: LaborCommands) -> EstimatorResult<()> {
    let service = CatalogService::new(storage);

    match cmd {
        LaborCommands::List => {
            let rates = storage.labor_rates.get_all()?;
            print!("{}", format_labor_list(&rates));
        }

        LaborCommands::Add {
            name,
            rate_type,
            rate,
        } => {
            let created =
                service.create_labor_rate(&name, parse_rate_type(&rate_type)?, parse_money(&rate)?)?;
            println!("Created labor rate: {}", created.name);
            println!("  Rate: {}/{}", created.cost, created.rate_type);
            println!("  ID: {}", created.id);
        }

        LaborCommands::Edit {
            labor,
            name,
            rate_type,
            rate,
        } => {
            let found = service
                .find_labor_rate(&labor)?
                .ok_or_else(|| EstimatorError::labor_rate_not_found(labor.as_str()))?;

            if name.is_none() && rate_type.is_none() && rate.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let rate_type = rate_type.as_deref().map(parse_rate_type).transpose()?;
            let cost = rate.as_deref().map(parse_money).transpose()?;

            let updated = service.update_labor_rate(found.id, name.as_deref(), rate_type, cost)?;
            println!("Updated labor rate: {}", updated.name);
        }

        LaborCommands::Delete { labor } => {
            let found = service
                .find_labor_rate(&labor)?
                .ok_or_else(|| EstimatorError::labor_rate_not_found(labor.as_str()))?;

            service.delete_labor_rate(found.id)?;
            println!("Deleted labor rate: {}", found.name);
        }
    }

    Ok(())
}

/// Handle a mileage rate command
pub fn handle_mileage_command(storage: &Storage, cmd: MileageCommands) -> EstimatorResult<()> {
    let service = CatalogService::new(storage);

    match cmd {
        MileageCommands::List => {
            let rates = storage.mileage_rates.get_all()?;
            print!("{}", format_mileage_list(&rates));
        }

        MileageCommands::Add {
            distance,
            cost_per_mile,
        } => {
            let created = service.create_mileage_rate(distance, parse_money(&cost_per_mile)?)?;
            println!("Created mileage rate: {}", created);
            println!("  ID: {}", created.id);
        }

        MileageCommands::Edit {
            mileage,
            distance,
            cost_per_mile,
        } => {
            let found = service
                .find_mileage_rate(&mileage)?
                .ok_or_else(|| EstimatorError::mileage_rate_not_found(mileage.as_str()))?;

            if distance.is_none() && cost_per_mile.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let cost_per_mile = cost_per_mile.as_deref().map(parse_money).transpose()?;

            let updated = service.update_mileage_rate(found.id, distance, cost_per_mile)?;
            println!("Updated mileage rate: {}", updated);
        }

        MileageCommands::Delete { mileage } => {
            let found = service
                .find_mileage_rate(&mileage)?
                .ok_or_else(|| EstimatorError::mileage_rate_not_found(mileage.as_str()))?;

            service.delete_mileage_rate(found.id)?;
            println!("Deleted mileage rate: {}", found);
        }
    }

    Ok(())
}
