//! Service layer for loading and checking the catalog.
//!
//! This module contains services that read the data file, check it for
//! inconsistencies, and keep the parsed catalog cached for the web server.

pub mod catalog;
pub mod store;
pub mod validator;

// Re-export commonly used types and functions
pub use catalog::CatalogService;
pub use store::CatalogStore;
pub use validator::{
    CatalogValidator, IssueKind, ValidationIssue, ValidationReport, ValidationSeverity,
};
