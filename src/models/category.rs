//! Category records that group apps in the directory.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A directory category (e.g., "Productivity", "Design").
///
/// Apps reference categories by `id`. Nothing enforces that the reference
/// resolves; see [`crate::models::AppsData::category_of`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier in kebab-case (e.g., "developer-tools")
    pub id: String,
    /// Display name (e.g., "Developer Tools")
    pub name: String,
    /// One-line description shown on the category card
    #[serde(default)]
    pub description: String,
}

impl Category {
    /// Creates a new Category with validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalyst::models::Category;
    ///
    /// let category = Category::new(
    ///     "design",
    ///     "Design",
    ///     "Tools for visual work",
    /// ).unwrap();
    /// assert_eq!(category.id, "design");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID is empty or not in kebab-case format
    /// - Name is empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();

        Self::validate_id(&id)?;
        if name.trim().is_empty() {
            anyhow::bail!("Category name cannot be empty");
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
        })
    }

    /// Validates category ID format (kebab-case).
    pub fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Category ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Category ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Category ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }
}
