//! fiberplan - Terminal-based cost estimation for fiber-optic deployments
//!
//! This library provides the core functionality for the fiberplan CLI. It
//! manages rate catalogs (departments, units, labor, mileage), assembles
//! projects from those catalogs, and computes cost breakdowns, take-rate
//! projections and ROI figures for single projects and annual rollups.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (catalogs, projects, annual projects)
//! - `storage`: JSON file storage layer
//! - `estimate`: Pure cost/ROI calculation engine
//! - `services`: Business logic layer
//! - `reports`: Project and annual summary reports
//! - `display`: Terminal formatting
//! - `export`: Full-data export (JSON/YAML/CSV)
//!
//! # Example
//!
//! ```rust,ignore
//! use fiberplan::config::{paths::FiberPaths, settings::Settings};
//!
//! let paths = FiberPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod estimate;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::EstimatorError;
