//! Consistency checks for the catalog.
//!
//! Nothing here runs while serving: the site tolerates a dangling category
//! reference by showing no category. These checks back the `validate`
//! command so authors can catch mistakes in the data file.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::{AppsData, Category};

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// The catalog is broken (ambiguous ids)
    Error,
    /// The catalog renders, but something will look wrong
    Warning,
}

/// What kind of problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Two categories share an id
    DuplicateCategoryId,
    /// Two apps share an id
    DuplicateAppId,
    /// An app references a category that does not exist
    DanglingCategory,
    /// A category id is not kebab-case
    InvalidCategoryId,
    /// A required field is blank
    MissingField,
}

impl IssueKind {
    const fn severity(self) -> ValidationSeverity {
        match self {
            Self::DuplicateCategoryId | Self::DuplicateAppId => ValidationSeverity::Error,
            Self::DanglingCategory | Self::InvalidCategoryId | Self::MissingField => {
                ValidationSeverity::Warning
            }
        }
    }
}

/// A single finding, attached to the record it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Error or warning
    pub severity: ValidationSeverity,
    /// Type of issue
    pub kind: IssueKind,
    /// Id of the app or category concerned
    pub subject: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    fn new(kind: IssueKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.subject, self.message)
    }
}

/// Result of checking a catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Findings in the order they were discovered
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true if there are no errors (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        !self
            .issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error)
    }

    /// Returns true if at least one warning was recorded.
    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Warning)
    }

    /// Issues of one severity.
    pub fn with_severity(
        &self,
        severity: ValidationSeverity,
    ) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

/// Checks a catalog for duplicate ids, dangling references and blank fields.
pub struct CatalogValidator<'a> {
    data: &'a AppsData,
}

impl<'a> CatalogValidator<'a> {
    /// Creates a validator over a parsed catalog.
    pub const fn new(data: &'a AppsData) -> Self {
        Self { data }
    }

    /// Runs every check.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_categories(&mut report);
        self.check_apps(&mut report);
        report
    }

    fn check_categories(&self, report: &mut ValidationReport) {
        let mut seen = HashSet::new();

        for category in &self.data.categories {
            if !seen.insert(category.id.as_str()) {
                report.push(ValidationIssue::new(
                    IssueKind::DuplicateCategoryId,
                    &category.id,
                    format!("Category id '{}' is defined more than once", category.id),
                ));
            }

            if let Err(e) = Category::validate_id(&category.id) {
                report.push(ValidationIssue::new(
                    IssueKind::InvalidCategoryId,
                    &category.id,
                    e.to_string(),
                ));
            }

            if category.name.trim().is_empty() {
                report.push(ValidationIssue::new(
                    IssueKind::MissingField,
                    &category.id,
                    "Category has no name",
                ));
            }
        }
    }

    fn check_apps(&self, report: &mut ValidationReport) {
        let mut seen = HashSet::new();

        for app in &self.data.apps {
            if !seen.insert(app.id.as_str()) {
                report.push(ValidationIssue::new(
                    IssueKind::DuplicateAppId,
                    &app.id,
                    format!(
                        "App id '{}' is defined more than once; only the first is reachable",
                        app.id
                    ),
                ));
            }

            if self.data.category_of(app).is_none() {
                report.push(ValidationIssue::new(
                    IssueKind::DanglingCategory,
                    &app.id,
                    format!("Category '{}' does not exist", app.category),
                ));
            }

            let required = [
                ("name", &app.name),
                ("url", &app.url),
                ("description", &app.description),
            ];
            for (field, value) in required {
                if value.trim().is_empty() {
                    report.push(ValidationIssue::new(
                        IssueKind::MissingField,
                        &app.id,
                        format!("App has an empty '{field}'"),
                    ));
                }
            }
        }
    }
}
