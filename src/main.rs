//! Catalyst - curated directory of tools and software
//!
//! Serves the directory over HTTP and offers headless commands to check and
//! query the data file.
//!
//! # Usage
//!
//! ```bash
//! # Start the site on the configured address (127.0.0.1:3000 by default)
//! catalyst serve
//!
//! # Check the data file before deploying
//! catalyst validate --data data/apps.yaml --strict
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use catalyst::cli::{CliError, CliResult, ConfigArgs, ListArgs, SearchArgs, ShowArgs, ValidateArgs};
#[cfg(feature = "web")]
use catalyst::cli::ServeArgs;
use catalyst::config::Config;
use catalyst::constants::APP_BINARY_NAME;

/// Catalyst - curated directory of tools and software
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the web server
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Check the data file for errors and warnings
    Validate(ValidateArgs),
    /// List categories, or the apps in one category
    List(ListArgs),
    /// Search apps the way the search modal does
    Search(SearchArgs),
    /// Show one app
    Show(ShowArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    config.map_err(|e| CliError::io(format!("{e:#}")))
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = cli.config.as_deref();

    // `config init` must work while the file is missing or broken
    if let Command::Config(args) = &cli.command {
        if !args.needs_config() {
            return args.execute(&Config::default(), config_path);
        }
    }

    let config = load_config(config_path)?;

    match &cli.command {
        #[cfg(feature = "web")]
        Command::Serve(args) => args.execute(&config),
        Command::Validate(args) => args.execute(&config),
        Command::List(args) => args.execute(&config),
        Command::Search(args) => args.execute(&config),
        Command::Show(args) => args.execute(&config),
        Command::Config(args) => args.execute(&config, config_path),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
