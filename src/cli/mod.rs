//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod annual;
pub mod department;
pub mod export;
pub mod project;
pub mod rates;
pub mod unit;

pub use annual::{handle_annual_command, AnnualCommands};
pub use department::{handle_department_command, DepartmentCommands};
pub use export::{handle_export_command, ExportCommands};
pub use project::{handle_project_command, ProjectCommands};
pub use rates::{handle_labor_command, handle_mileage_command, LaborCommands, MileageCommands};
pub use unit::{handle_unit_command, UnitCommands};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::Money;

/// Parse a money CLI argument
pub(crate) fn parse_money(s: &str) -> EstimatorResult<Money> {
    Money::parse(s).map_err(|e| EstimatorError::Validation(e.to_string()))
}
