//! arm-state-upgrade - upgrade persisted resource state from the command line
//!
//! Loads a state document, brings it to the current schema version of its
//! resource kind, and writes the result with the version to store alongside.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::Cli;
use config::{Config, LogFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config);

    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
