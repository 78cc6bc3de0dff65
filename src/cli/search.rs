//! Search command: the modal's matching logic from the terminal.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{data_path, load_catalog, print_json, CliResult};
use crate::config::Config;
use crate::search::{search_apps, SearchHit};

/// Search apps by name, description, overview or category name
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Text to search for (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Path to the YAML data file (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    results: Vec<SearchHit>,
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let path = data_path(self.data.as_deref(), config);
        let data = load_catalog(&path)?;

        let results: Vec<SearchHit> = search_apps(&data, &self.query)
            .into_iter()
            .map(|app| SearchHit::new(&data, app))
            .collect();

        if self.json {
            return print_json(&SearchOutput {
                query: &self.query,
                results,
            });
        }

        if results.is_empty() {
            if !self.query.trim().is_empty() {
                println!("No results found for \"{}\"", self.query);
            }
            return Ok(());
        }

        for hit in &results {
            if hit.category_name.is_empty() {
                println!("{}  {}", hit.id, hit.name);
            } else {
                println!("{}  {} [{}]", hit.id, hit.name, hit.category_name);
            }
            if !hit.description.is_empty() {
                println!("    {}", hit.description);
            }
        }

        Ok(())
    }
}
