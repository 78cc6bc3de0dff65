//! Catalog file I/O service.
//!
//! This module centralizes reading and parsing the YAML data file so the
//! CLI and the web cache report load failures the same way.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::AppsData;

/// Service for reading the catalog data file.
pub struct CatalogService;

impl CatalogService {
    /// Loads and parses a catalog from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the data file (usually `data/apps.yaml`)
    ///
    /// # Returns
    ///
    /// * `Ok(AppsData)` - Successfully parsed catalog
    /// * `Err(...)` - File not found, parse error, or I/O error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use catalyst::services::CatalogService;
    ///
    /// let data = CatalogService::load(Path::new("data/apps.yaml"))?;
    /// println!("{} apps", data.apps.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<AppsData> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// Async variant of [`CatalogService::load`] used by the web cache.
    pub async fn load_async(path: &Path) -> Result<AppsData> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// Parses YAML content into a catalog.
    ///
    /// `origin` is only used in the error message.
    pub fn parse(content: &str, origin: &Path) -> Result<AppsData> {
        // An empty file is a valid, empty catalog
        if content.trim().is_empty() {
            return Ok(AppsData::empty());
        }

        serde_yml::from_str(content)
            .with_context(|| format!("Failed to parse YAML data file: {}", origin.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "categories:\n  - id: design\n    name: Design\n    description: Visual\napps:\n  - id: figma\n    name: Figma\n    category: design\n    url: https://figma.com\n";

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apps.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let data = CatalogService::load(&path).unwrap();
        assert_eq!(data.categories[0].id, "design");
        assert_eq!(data.apps[0].name, "Figma");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = CatalogService::load(&temp_dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read data file"));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = CatalogService::parse("apps: [ {id: 1", Path::new("broken.yaml")).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_parse_empty_content() {
        let data = CatalogService::parse("  \n", Path::new("empty.yaml")).unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn test_load_async_matches_sync() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apps.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let sync = CatalogService::load(&path).unwrap();
        let async_loaded = CatalogService::load_async(&path).await.unwrap();
        assert_eq!(sync, async_loaded);
    }
}
