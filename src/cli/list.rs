//! Listing command: categories with app counts, or the apps of one category.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{data_path, load_catalog, print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{App, AppsData, Category};

/// List categories, or the apps in one category
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Path to the YAML data file (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Only list apps in this category
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CategorySummary<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    app_count: usize,
}

#[derive(Debug, Serialize)]
struct CategoryListOutput<'a> {
    categories: Vec<CategorySummary<'a>>,
}

#[derive(Debug, Serialize)]
struct CategoryAppsOutput<'a> {
    category: &'a Category,
    apps: Vec<&'a App>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let path = data_path(self.data.as_deref(), config);
        let data = load_catalog(&path)?;

        match &self.category {
            Some(id) => self.list_apps(&data, id),
            None => self.list_categories(&data),
        }
    }

    fn list_categories(&self, data: &AppsData) -> CliResult<()> {
        let categories: Vec<CategorySummary> = data
            .categories
            .iter()
            .map(|c| CategorySummary {
                id: &c.id,
                name: &c.name,
                description: &c.description,
                app_count: data.app_count(&c.id),
            })
            .collect();

        if self.json {
            return print_json(&CategoryListOutput { categories });
        }

        if categories.is_empty() {
            println!("No categories");
            return Ok(());
        }

        let width = categories.iter().map(|c| c.id.len()).max().unwrap_or(0);
        for c in &categories {
            println!(
                "{:<width$}  {} ({} tools)",
                c.id,
                c.name,
                c.app_count,
                width = width
            );
        }

        Ok(())
    }

    fn list_apps(&self, data: &AppsData, id: &str) -> CliResult<()> {
        let category = data
            .category(id)
            .ok_or_else(|| CliError::validation(format!("Category not found: {id}")))?;
        let apps: Vec<&App> = data.apps_in_category(id).collect();

        if self.json {
            return print_json(&CategoryAppsOutput { category, apps });
        }

        println!("{} ({} tools)", category.name, apps.len());
        let width = apps.iter().map(|a| a.id.len()).max().unwrap_or(0);
        for app in apps {
            println!(
                "  {:<width$}  {} - {}",
                app.id,
                app.name,
                app.description,
                width = width
            );
        }

        Ok(())
    }
}
