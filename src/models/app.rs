//! App records: one listing in the directory.

use serde::{Deserialize, Serialize};

/// Number of pros shown on an app card in the grid view.
pub const CARD_PROS_SHOWN: usize = 2;

/// A single tool or piece of software listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Unique identifier used in `/app/{id}` URLs
    pub id: String,
    /// Display name
    pub name: String,
    /// Category ID this app belongs to (may not resolve)
    pub category: String,
    /// Icon reference (URL or asset path); empty means "use the placeholder"
    #[serde(default)]
    pub icon: String,
    /// Target URL opened by the "Visit" buttons
    pub url: String,
    /// Short description for cards and search results
    #[serde(default)]
    pub description: String,
    /// Longer overview text for the detail page
    #[serde(default)]
    pub overview: String,
    /// Ordered list of strengths
    #[serde(default)]
    pub pros: Vec<String>,
    /// Ordered list of weaknesses
    #[serde(default)]
    pub cons: Vec<String>,
    /// Optional ordered list of screenshot references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
}

impl App {
    /// First character of the name, shown when the icon cannot be displayed.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    /// Icon reference, falling back to the bundled placeholder.
    pub fn icon_or_placeholder(&self) -> &str {
        if self.icon.trim().is_empty() {
            crate::constants::PLACEHOLDER_ICON
        } else {
            &self.icon
        }
    }

    /// The pros shown on a grid card.
    pub fn card_pros(&self) -> &[String] {
        &self.pros[..self.pros.len().min(CARD_PROS_SHOWN)]
    }

    /// Screenshot references, empty when none were listed.
    pub fn screenshots(&self) -> &[String] {
        self.screenshots.as_deref().unwrap_or_default()
    }

    /// Path of this app's detail page.
    pub fn detail_path(&self) -> String {
        format!("/app/{}", self.id)
    }
}
