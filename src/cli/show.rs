//! Show command: one app's details.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{data_path, load_catalog, print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::App;

/// Show the details of one app
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// App id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Path to the YAML data file (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    #[serde(flatten)]
    app: &'a App,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_name: Option<&'a str>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let path = data_path(self.data.as_deref(), config);
        let data = load_catalog(&path)?;

        let app = data
            .app(&self.id)
            .ok_or_else(|| CliError::validation(format!("App not found: {}", self.id)))?;
        let category_name = data.category_of(app).map(|c| c.name.as_str());

        if self.json {
            return print_json(&ShowOutput { app, category_name });
        }

        println!("{}", app.name);
        println!("  Category: {}", category_name.unwrap_or("-"));
        println!("  Website:  {}", app.url);
        if !app.description.is_empty() {
            println!("\n{}", app.description);
        }
        if !app.overview.is_empty() {
            println!("\nOverview:\n  {}", app.overview);
        }
        print_list("Pros", "+", &app.pros);
        print_list("Cons", "-", &app.cons);
        print_list("Screenshots", "*", app.screenshots());

        Ok(())
    }
}

fn print_list(title: &str, bullet: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  {bullet} {item}");
    }
}
