//! The catalog document: every category and app from the data file.

use serde::{Deserialize, Serialize};

use super::{App, Category};

/// Parsed contents of `apps.yaml`, also the `/api/apps` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppsData {
    /// Categories in file order
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Apps in file order
    #[serde(default)]
    pub apps: Vec<App>,
}

impl AppsData {
    /// An empty catalog, used when the data file cannot be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the catalog has neither categories nor apps.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.apps.is_empty()
    }

    /// Apps whose category matches `category_id`, in file order.
    pub fn apps_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a App> {
        self.apps.iter().filter(move |app| app.category == category_id)
    }

    /// Number of apps listed under a category.
    pub fn app_count(&self, category_id: &str) -> usize {
        self.apps_in_category(category_id).count()
    }

    /// First app with the given id.
    pub fn app(&self, id: &str) -> Option<&App> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Category with the given id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|cat| cat.id == id)
    }

    /// Resolves an app's category; `None` for a dangling reference.
    pub fn category_of(&self, app: &App) -> Option<&Category> {
        self.category(&app.category)
    }

    /// Display name of an app's category, empty for a dangling reference.
    pub fn category_name_of(&self, app: &App) -> &str {
        self.category_of(app).map_or("", |cat| cat.name.as_str())
    }
}
