//! Reports for fiberplan
//!
//! Each report pulls data through storage, runs the estimate engine, and
//! knows how to render itself for the terminal and export itself as CSV.

pub mod annual_summary;
pub mod project_summary;

pub use annual_summary::AnnualSummaryReport;
pub use project_summary::ProjectSummaryReport;
