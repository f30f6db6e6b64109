//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod backup;
mod network;

pub use backup::BackupCommands;
pub use network::NetworkCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Network management
    Network {
        #[command(subcommand)]
        command: NetworkCommands,
    },
    /// Volume backup management
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.build_client()?;

    match command {
        Commands::Network { command } => {
            network::handle_network_command(command, &client, config.format).await?
        }
        Commands::Backup { command } => {
            backup::handle_backup_command(command, &client, config.format).await?
        }
    }

    Ok(())
}
