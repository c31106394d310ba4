//! Service layer for fiberplan
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, reference resolution, and cross-entity operations.
//! Catalog writes are validated here; the estimate engine itself never
//! validates, it only computes.

pub mod annual;
pub mod catalog;
pub mod project;

pub use annual::AnnualService;
pub use catalog::CatalogService;
pub use project::ProjectService;
