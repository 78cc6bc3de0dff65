//! Configuration management CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Write a default configuration file
    Init(ConfigInitArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default configuration file
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Returns false for subcommands that never read the existing file.
    pub const fn needs_config(&self) -> bool {
        !matches!(self.command, ConfigCommand::Init(_))
    }

    /// Execute config subcommand.
    ///
    /// `path` is the file given by `--config`, if any.
    pub fn execute(&self, config: &Config, path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config),
            ConfigCommand::Init(args) => args.execute(path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        if self.json {
            return print_json(config);
        }

        let toml = config
            .to_toml()
            .map_err(|e| CliError::io(format!("{e:#}")))?;
        print!("{toml}");
        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))?,
        };

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("✓ Wrote {}", path.display());
        Ok(())
    }
}
