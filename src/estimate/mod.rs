//! Estimation engine
//!
//! The pure-computation layer of fiberplan. Given a project area and the
//! current rate catalogs it produces cost breakdowns, take-rate projections
//! and return-on-investment figures. Nothing in this module touches storage
//! or mutates its inputs; every function is deterministic and total (division
//! by zero yields IEEE-754 sentinels rather than panicking), so callers can
//! run estimates concurrently without coordination.

pub mod annual;
pub mod costs;
pub mod roi;

pub use annual::{AnnualRollup, ProjectEstimate};
pub use costs::{CostBreakdown, DepartmentCosts, LaborLine, MileageLine, UnitLine};
pub use roi::{simple_roi, RoiProjection};
