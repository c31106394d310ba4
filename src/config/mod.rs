//! Configuration module for fiberplan
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Estimation defaults (income and growth assumptions)

pub mod paths;
pub mod settings;

pub use paths::FiberPaths;
pub use settings::Settings;
