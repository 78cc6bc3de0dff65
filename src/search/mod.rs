//! Search over the catalog and the keyboard selection of the search modal.
//!
//! Matching is a case-insensitive substring test against an app's name,
//! description, overview, and the name of its category. Results keep catalog
//! order and are capped at [`MAX_SEARCH_RESULTS`].

use std::str::FromStr;

use serde::Serialize;

use crate::constants::MAX_SEARCH_RESULTS;
use crate::models::{App, AppsData};

/// Finds apps matching `query`.
///
/// A query that is blank after trimming matches nothing. The query itself is
/// not trimmed before matching, so `"note "` only matches text containing a
/// trailing space after "note".
///
/// # Examples
///
/// ```
/// use catalyst::models::AppsData;
/// use catalyst::search::search_apps;
///
/// let data = AppsData::empty();
/// assert!(search_apps(&data, "anything").is_empty());
/// ```
pub fn search_apps<'a>(data: &'a AppsData, query: &str) -> Vec<&'a App> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let term = query.to_lowercase();
    data.apps
        .iter()
        .filter(|app| matches(data, app, &term))
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

fn matches(data: &AppsData, app: &App, term: &str) -> bool {
    app.name.to_lowercase().contains(term)
        || app.description.to_lowercase().contains(term)
        || app.overview.to_lowercase().contains(term)
        || data
            .category_of(app)
            .is_some_and(|cat| cat.name.to_lowercase().contains(term))
}

/// A search result as shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// App id
    pub id: String,
    /// App name
    pub name: String,
    /// Category display name, empty when the category does not resolve
    pub category_name: String,
    /// Short description
    pub description: String,
    /// Icon reference (placeholder when the app has none)
    pub icon: String,
    /// Fallback letter for a broken icon
    pub initial: String,
    /// Detail page path
    pub path: String,
}

impl SearchHit {
    /// Builds the display record for an app.
    pub fn new(data: &AppsData, app: &App) -> Self {
        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            category_name: data.category_name_of(app).to_string(),
            description: app.description.clone(),
            icon: app.icon_or_placeholder().to_string(),
            initial: app.initial(),
            path: app.detail_path(),
        }
    }
}

/// Keys the search modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// Move the selection down
    ArrowDown,
    /// Move the selection up
    ArrowUp,
    /// Open the selected result
    Enter,
    /// Close the modal
    Escape,
}

impl FromStr for SearchKey {
    type Err = String;

    /// Parses DOM `KeyboardEvent.key` names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowDown" | "Down" => Ok(Self::ArrowDown),
            "ArrowUp" | "Up" => Ok(Self::ArrowUp),
            "Enter" => Ok(Self::Enter),
            "Escape" | "Esc" => Ok(Self::Escape),
            other => Err(format!("Unsupported key: {other}")),
        }
    }
}

/// What the modal should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Stay open
    None,
    /// Close the modal
    Close,
    /// Navigate to an app's detail page and close the modal
    Navigate(String),
}

/// State of an open search modal: the query, its results, and the selection.
#[derive(Debug, Clone)]
pub struct SearchSession<'a> {
    data: &'a AppsData,
    query: String,
    results: Vec<&'a App>,
    selected: usize,
}

impl<'a> SearchSession<'a> {
    /// Opens an empty session.
    pub const fn new(data: &'a AppsData) -> Self {
        Self {
            data,
            query: String::new(),
            results: Vec::new(),
            selected: 0,
        }
    }

    /// Replaces the query, recomputes results and resets the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = search_apps(self.data, &self.query);
        self.selected = 0;
    }

    /// Restores a selection index, clamped to the result list.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.results.len().saturating_sub(1));
    }

    /// Current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current results.
    pub fn results(&self) -> &[&'a App] {
        &self.results
    }

    /// Index of the highlighted result.
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// The highlighted result, if any.
    pub fn selected_app(&self) -> Option<&'a App> {
        self.results.get(self.selected).copied()
    }

    /// Returns true when a non-blank query matched nothing.
    pub fn is_no_results(&self) -> bool {
        !self.query.trim().is_empty() && self.results.is_empty()
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: SearchKey) -> SearchAction {
        match key {
            SearchKey::Escape => SearchAction::Close,
            SearchKey::ArrowDown => {
                self.select(self.selected + 1);
                SearchAction::None
            }
            SearchKey::ArrowUp => {
                self.selected = self.selected.saturating_sub(1);
                SearchAction::None
            }
            SearchKey::Enter => self
                .selected_app()
                .map_or(SearchAction::None, |app| SearchAction::Navigate(app.detail_path())),
        }
    }

    /// Display records for the current results.
    pub fn hits(&self) -> Vec<SearchHit> {
        self.results
            .iter()
            .map(|app| SearchHit::new(self.data, app))
            .collect()
    }
}
