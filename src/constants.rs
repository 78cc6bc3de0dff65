//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the defaults for the data file.

/// The display name of the site.
pub const APP_NAME: &str = "catalyst";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "catalyst";

/// Default location of the YAML data file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/apps.yaml";

/// Maximum number of results shown by the search modal.
pub const MAX_SEARCH_RESULTS: usize = 8;

/// Icon served when an app has no icon reference.
pub const PLACEHOLDER_ICON: &str = "/static/placeholder.svg";
