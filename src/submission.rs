//! Tool submissions from the "Submit a Tool" form.
//!
//! Submissions are checked and acknowledged but never stored: the catalog
//! only changes when someone edits the data file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::AppsData;

/// Upper bound for the free-text fields.
pub const MAX_TEXT_LEN: usize = 1000;

/// Fields posted by the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSubmission {
    /// Tool name
    pub name: String,
    /// Website URL
    pub url: String,
    /// Category id chosen from the catalog
    pub category: String,
    /// What makes the tool special
    pub description: String,
    /// Why it should be featured
    pub reason: String,
}

/// A problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name
    pub field: &'static str,
    /// Message shown next to the form
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Acknowledgement returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Reference shown to the submitter
    pub id: Uuid,
    /// When the submission was received
    pub received_at: DateTime<Utc>,
    /// Submitted tool name
    pub name: String,
}

impl ToolSubmission {
    /// Checks every field, collecting all problems.
    pub fn validate(&self, data: &AppsData) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Enter the tool name"));
        }

        let url = self.url.trim();
        if url.is_empty() {
            errors.push(FieldError::new("url", "Enter the website URL"));
        } else if !(url.starts_with("https://") || url.starts_with("http://"))
            || url.contains(char::is_whitespace)
        {
            errors.push(FieldError::new(
                "url",
                "Website URL must start with http:// or https://",
            ));
        }

        if self.category.is_empty() {
            errors.push(FieldError::new("category", "Select a category"));
        } else if data.category(&self.category).is_none() {
            errors.push(FieldError::new(
                "category",
                format!("Unknown category '{}'", self.category),
            ));
        }

        if self.description.trim().is_empty() {
            errors.push(FieldError::new(
                "description",
                "Describe what makes this tool special",
            ));
        }

        for (field, value) in [("description", &self.description), ("reason", &self.reason)] {
            if value.chars().count() > MAX_TEXT_LEN {
                errors.push(FieldError::new(
                    field,
                    format!("Keep this under {MAX_TEXT_LEN} characters"),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and issues a receipt.
    pub fn accept(&self, data: &AppsData) -> Result<SubmissionReceipt, Vec<FieldError>> {
        self.validate(data)?;

        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name: self.name.trim().to_string(),
        })
    }
}
