//! Serve command: runs the web server.

use std::path::PathBuf;

use clap::Args;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::web;

/// Start the web server
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to the configured port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the YAML data file (defaults to the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Applies the flags on top of the loaded configuration.
    pub fn apply(&self, mut config: Config) -> CliResult<Config> {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(data) = &self.data {
            config.data.path.clone_from(data);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        Ok(config)
    }

    /// Execute the serve command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let config = self.apply(config.clone())?;
        let addr = config
            .server
            .socket_addr()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        init_tracing(self.verbose);
        info!("Data file: {}", config.data.path.display());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::io(format!("Failed to start runtime: {e}")))?;

        runtime
            .block_on(web::run_server(config, addr))
            .map_err(|e| CliError::io(format!("{e:#}")))
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
