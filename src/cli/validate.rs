//! Validation command for the catalog data file.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{data_path, load_catalog, print_json, CliError, CliResult};
use crate::config::Config;
use crate::services::{CatalogValidator, ValidationIssue, ValidationSeverity};

/// Check the data file for duplicate ids, dangling categories and blank fields
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the YAML data file (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON output of `validate`.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    categories: usize,
    apps: usize,
    issues: Vec<ValidationIssue>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let path = data_path(self.data.as_deref(), config);
        let data = load_catalog(&path)?;

        let report = CatalogValidator::new(&data).validate();
        let response = ValidationResponse {
            valid: report.is_valid(),
            categories: data.categories.len(),
            apps: data.apps.len(),
            issues: report.issues.clone(),
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Validation passed: {}", path.display());
            } else {
                println!("✗ Validation failed: {}", path.display());
            }
            println!(
                "\n  Categories: {}\n  Apps:       {}",
                response.categories, response.apps
            );

            if !response.issues.is_empty() {
                println!("\nIssues:");
                for issue in &response.issues {
                    let prefix = match issue.severity {
                        ValidationSeverity::Error => "  ✗",
                        ValidationSeverity::Warning => "  ⚠",
                    };
                    println!("{prefix} {issue}");
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && report.has_warnings() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
