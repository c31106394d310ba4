//! Core data models for fiberplan
//!
//! This module contains all the data structures that represent the estimation
//! domain: rate catalogs (departments, units, labor, mileage), project areas,
//! and annual project collections.

pub mod annual;
pub mod department;
pub mod ids;
pub mod labor;
pub mod mileage;
pub mod money;
pub mod project;
pub mod unit;

pub use annual::AnnualProject;
pub use department::Department;
pub use ids::{AnnualProjectId, DepartmentId, LaborRateId, MileageRateId, ProjectId, UnitId};
pub use labor::{LaborRate, LaborRateType};
pub use mileage::MileageRate;
pub use money::Money;
pub use project::{ProjectArea, ProjectLaborRate, ProjectMileageRate, ProjectUnit};
pub use unit::{Unit, UnitType};
