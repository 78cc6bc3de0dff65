//! In-memory cache of the parsed catalog.
//!
//! The data file is read on first access and the parsed result is kept for
//! the lifetime of the process. A failed load is logged and answered with an
//! empty catalog, but it is not cached: the next access reads the file again.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::models::{App, AppsData, Category};
use crate::services::CatalogService;

/// Read-through cache over the catalog data file.
#[derive(Debug)]
pub struct CatalogStore {
    /// Location of the YAML data file
    path: PathBuf,
    /// Parsed catalog, set once on the first successful load
    cached: OnceCell<Arc<AppsData>>,
}

impl CatalogStore {
    /// Creates a store that loads lazily from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceCell::new(),
        }
    }

    /// Creates a store that is already populated.
    ///
    /// The path is kept for display only; the file is never read.
    pub fn with_data(path: impl Into<PathBuf>, data: AppsData) -> Self {
        Self {
            path: path.into(),
            cached: OnceCell::new_with(Some(Arc::new(data))),
        }
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once the catalog has been loaded and cached.
    pub fn is_loaded(&self) -> bool {
        self.cached.initialized()
    }

    /// Returns the cached catalog, loading it on first use.
    ///
    /// Unlike [`CatalogStore::apps_data`], load failures are returned to the
    /// caller.
    pub async fn try_apps_data(&self) -> Result<Arc<AppsData>> {
        let data = self
            .cached
            .get_or_try_init(|| async {
                let data = CatalogService::load_async(&self.path).await?;
                debug!(
                    "Loaded {} categories and {} apps from {}",
                    data.categories.len(),
                    data.apps.len(),
                    self.path.display()
                );
                Ok::<_, anyhow::Error>(Arc::new(data))
            })
            .await?;

        Ok(Arc::clone(data))
    }

    /// Returns the whole catalog, or an empty one if the file cannot be loaded.
    pub async fn apps_data(&self) -> Arc<AppsData> {
        match self.try_apps_data().await {
            Ok(data) => data,
            Err(e) => {
                error!("Error loading apps data: {e:#}");
                Arc::new(AppsData::empty())
            }
        }
    }

    /// Apps in a category, in file order.
    pub async fn apps_by_category(&self, category_id: &str) -> Vec<App> {
        self.apps_data()
            .await
            .apps_in_category(category_id)
            .cloned()
            .collect()
    }

    /// The first app with the given id.
    pub async fn app_by_id(&self, id: &str) -> Option<App> {
        self.apps_data().await.app(id).cloned()
    }

    /// All categories, in file order.
    pub async fn categories(&self) -> Vec<Category> {
        self.apps_data().await.categories.clone()
    }

    /// All apps, in file order.
    pub async fn apps(&self) -> Vec<App> {
        self.apps_data().await.apps.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
categories:
  - id: design
    name: Design
    description: Visual tools
  - id: productivity
    name: Productivity
    description: Get things done
apps:
  - id: figma
    name: Figma
    category: design
    url: https://figma.com
  - id: notion
    name: Notion
    category: productivity
    url: https://notion.so
  - id: sketch
    name: Sketch
    category: design
    url: https://sketch.com
"#;

    fn write_sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("apps.yaml");
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[tokio::test]
    async fn test_loads_once_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_sample(&temp_dir);
        let store = CatalogStore::new(&path);
        assert!(!store.is_loaded());

        assert_eq!(store.apps().await.len(), 3);
        assert!(store.is_loaded());

        // Later edits are not picked up
        fs::write(&path, "categories: []\napps: []\n").unwrap();
        assert_eq!(store.apps().await.len(), 3);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("apps.yaml");
        let store = CatalogStore::new(&path);

        let data = store.apps_data().await;
        assert!(data.is_empty());
        assert!(!store.is_loaded());
        assert!(store.try_apps_data().await.is_err());

        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(store.categories().await.len(), 2);
        assert!(store.is_loaded());
    }

    #[tokio::test]
    async fn test_apps_by_category() {
        let temp_dir = TempDir::new().unwrap();
        let store = CatalogStore::new(write_sample(&temp_dir));

        let ids: Vec<String> = store
            .apps_by_category("design")
            .await
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["figma", "sketch"]);
        assert!(store.apps_by_category("unknown").await.is_empty());
    }

    #[tokio::test]
    async fn test_app_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = CatalogStore::new(write_sample(&temp_dir));

        assert_eq!(store.app_by_id("notion").await.unwrap().name, "Notion");
        assert!(store.app_by_id("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_with_data_never_reads_file() {
        let store = CatalogStore::with_data("/does/not/exist.yaml", AppsData::empty());
        assert!(store.is_loaded());
        assert!(store.try_apps_data().await.is_ok());
    }
}
