//! CLI command handlers for Catalyst.
//!
//! Each command loads the data file on its own; only `serve` keeps it cached.

pub mod common;
pub mod config;
pub mod list;
pub mod search;
#[cfg(feature = "web")]
pub mod serve;
pub mod show;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
#[cfg(feature = "web")]
pub use serve::ServeArgs;
pub use show::ShowArgs;
pub use validate::ValidateArgs;
