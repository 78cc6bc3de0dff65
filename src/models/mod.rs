//! Data models for the directory: categories, apps, and the catalog document.
//!
//! Models are plain serde types read from the YAML data file. They are never
//! mutated after load.

pub mod app;
pub mod catalog;
pub mod category;

// Re-export all model types
pub use app::App;
pub use catalog::AppsData;
pub use category::Category;
