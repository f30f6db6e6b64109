//! Nimbus CLI
//!
//! Command-line interface for cloud networks and volume backups.

mod command;
mod commands;
mod config;
mod error;
mod format;
mod id_resolver;
mod output;
#[cfg(test)]
mod testing;
mod types;

use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::*;
use commands::{Commands, handle_command};
use config::Config;
use output::OutputFormat;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "nimbus")]
#[command(about = "Cloud networking and volume backup CLI", long_about = None)]
struct Cli {
    /// Network service URL
    #[arg(
        long,
        global = true,
        env = "NIMBUS_NETWORK_URL",
        default_value = "http://localhost:9696"
    )]
    network_url: String,

    /// Block-storage service URL
    #[arg(
        long,
        global = true,
        env = "NIMBUS_VOLUME_URL",
        default_value = "http://localhost:8776/v3"
    )]
    volume_url: String,

    /// Auth token sent as X-Auth-Token
    #[arg(long, global = true, env = "NIMBUS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "NIMBUS_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    fn log_filter(&self) -> &'static str {
        match (self.debug, self.verbose) {
            (true, _) | (_, 2..) => "nimbus=debug,nimbus_client=debug",
            (_, 1) => "nimbus=info,nimbus_client=info",
            _ => "nimbus=warn,nimbus_client=warn",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the verbosity flags
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config {
        network_url: cli.network_url,
        volume_url: cli.volume_url,
        token: cli.token,
        timeout: Duration::from_secs(cli.timeout),
        format: cli.format,
    };
    config.validate()?;

    if let Err(e) = handle_command(cli.command, &config).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
