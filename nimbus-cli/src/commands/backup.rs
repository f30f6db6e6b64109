//! Volume backup command handlers
//!
//! Handles backup creation, listing, display, restore and deletion.

use std::collections::HashMap;

use async_trait::async_trait;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};
use nimbus_client::VolumeApi;
use nimbus_core::dto::backup::{CreateBackup as CreateBackupBody, RestoreBackup as RestoreBackupBody};
use serde_json::Value;
use tracing::{debug, error};

use crate::command::{Action, Lister, Listing, ShowData, ShowOne, run_action, run_list, run_show};
use crate::error::{CliError, CliResult};
use crate::format::{Formatters, item_properties, render_value};
use crate::id_resolver::{resolve_backup_id, resolve_snapshot_id, resolve_volume_id};
use crate::output::OutputFormat;

const SHORT_COLUMNS: [&str; 5] = ["ID", "Name", "Description", "Status", "Size"];
const LONG_COLUMNS: [&str; 8] = [
    "ID",
    "Name",
    "Description",
    "Status",
    "Size",
    "Availability Zone",
    "Volume ID",
    "Container",
];

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// Create new backup
    Create(CreateBackup),
    /// Delete backup(s)
    Delete(DeleteBackup),
    /// List backups
    List(ListBackup),
    /// Restore backup
    Restore(RestoreBackup),
    /// Display backup details
    Show(ShowBackup),
}

/// Handle backup commands
///
/// Routes backup subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The backup command to execute
/// * `client` - The block-storage service client
/// * `format` - How results are printed
pub async fn handle_backup_command(
    command: BackupCommands,
    client: &(dyn VolumeApi + 'static),
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        BackupCommands::Create(cmd) => run_show(&cmd, client, format).await,
        BackupCommands::Delete(cmd) => run_action(&cmd, client).await,
        BackupCommands::List(cmd) => run_list(&cmd, client, format).await,
        BackupCommands::Restore(cmd) => run_show(&cmd, client, format).await,
        BackupCommands::Show(cmd) => run_show(&cmd, client, format).await,
    }
}

#[derive(Args, Debug)]
pub struct CreateBackup {
    /// Volume to backup (name or ID)
    #[arg(value_name = "VOLUME", value_parser = NonEmptyStringValueParser::new())]
    pub volume: String,

    /// Name of the backup
    #[arg(long)]
    pub name: Option<String>,

    /// Description of the backup
    #[arg(long)]
    pub description: Option<String>,

    /// Optional backup container name
    #[arg(long)]
    pub container: Option<String>,

    /// Snapshot to backup (name or ID)
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Allow to back up an in-use volume
    #[arg(long)]
    pub force: bool,

    /// Perform an incremental backup
    #[arg(long)]
    pub incremental: bool,
}

#[async_trait]
impl ShowOne for CreateBackup {
    type Client = dyn VolumeApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<ShowData> {
        debug!("take_action({:?})", self);
        let volume_id = resolve_volume_id(client, &self.volume).await?;
        let snapshot_id = match &self.snapshot {
            Some(snapshot) => Some(resolve_snapshot_id(client, snapshot).await?),
            None => None,
        };

        let body = CreateBackupBody {
            volume_id,
            name: self.name.clone(),
            description: self.description.clone(),
            container: self.container.clone(),
            snapshot_id,
            force: self.force,
            incremental: self.incremental,
        };

        let backup = client.create_backup(&body).await?;
        Ok(ShowData::from_record(backup.strip_links()))
    }
}

#[derive(Args, Debug)]
pub struct DeleteBackup {
    /// Backup(s) to delete (name or ID)
    #[arg(
        value_name = "BACKUP",
        required = true,
        num_args = 1..,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub backups: Vec<String>,

    /// Allow delete in state other than error or available
    #[arg(long)]
    pub force: bool,
}

#[async_trait]
impl Action for DeleteBackup {
    type Client = dyn VolumeApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<()> {
        debug!("take_action({:?})", self);
        let mut failed = 0;

        for backup in &self.backups {
            let result = async {
                let id = resolve_backup_id(client, backup).await?;
                client.delete_backup(&id, self.force).await?;
                Ok::<_, CliError>(())
            }
            .await;

            if let Err(e) = result {
                failed += 1;
                if e.is_not_found() {
                    error!("Backup '{}' not found, skipping: {}", backup, e);
                } else {
                    error!("Failed to delete backup with name or ID '{}': {}", backup, e);
                }
            }
        }

        if failed > 0 {
            return Err(CliError::command(format!(
                "{} of {} backups failed to delete.",
                failed,
                self.backups.len()
            )));
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListBackup {
    /// List additional fields in output
    #[arg(long)]
    pub long: bool,
}

impl ListBackup {
    /// Field columns and the headers shown for them
    fn columns(&self) -> (Vec<String>, Vec<String>) {
        let source: &[&str] = if self.long {
            &LONG_COLUMNS
        } else {
            &SHORT_COLUMNS
        };
        let columns: Vec<String> = source.iter().map(|c| c.to_string()).collect();
        let headers = columns
            .iter()
            .map(|c| match c.as_str() {
                "Volume ID" => "Volume".to_string(),
                other => other.to_string(),
            })
            .collect();
        (columns, headers)
    }
}

#[async_trait]
impl Lister for ListBackup {
    type Client = dyn VolumeApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<Listing> {
        debug!("take_action({:?})", self);
        let (columns, headers) = self.columns();

        // Volume names are a display nicety; listing works without them
        let volume_names: HashMap<String, String> = match client.list_volumes().await {
            Ok(volumes) => volumes
                .iter()
                .filter_map(|v| Some((v.id()?.to_string(), v.name()?.to_string())))
                .collect(),
            Err(e) => {
                debug!("Could not fetch volumes for name lookup: {}", e);
                HashMap::new()
            }
        };

        let backups = client.list_backups().await?;

        let mut formatters = Formatters::new();
        formatters.insert(
            "Volume ID".to_string(),
            Box::new(move |value: &Value| {
                let id = render_value(value);
                volume_names.get(&id).cloned().unwrap_or(id)
            }),
        );

        let rows = backups
            .into_iter()
            .map(move |backup| item_properties(&backup, &columns, &formatters));

        Ok(Listing::new(headers, rows))
    }
}

#[derive(Args, Debug)]
pub struct RestoreBackup {
    /// Backup to restore (name or ID)
    #[arg(value_name = "BACKUP", value_parser = NonEmptyStringValueParser::new())]
    pub backup: String,

    /// Volume to restore to (name or ID)
    #[arg(value_name = "VOLUME", value_parser = NonEmptyStringValueParser::new())]
    pub volume: String,
}

#[async_trait]
impl ShowOne for RestoreBackup {
    type Client = dyn VolumeApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<ShowData> {
        debug!("take_action({:?})", self);
        let backup_id = resolve_backup_id(client, &self.backup).await?;
        let volume_id = resolve_volume_id(client, &self.volume).await?;

        let restore = client
            .restore_backup(&backup_id, &RestoreBackupBody { volume_id })
            .await?;
        Ok(ShowData::from_record(restore.strip_links()))
    }
}

#[derive(Args, Debug)]
pub struct ShowBackup {
    /// Backup to display (name or ID)
    #[arg(value_name = "BACKUP", value_parser = NonEmptyStringValueParser::new())]
    pub backup: String,
}

#[async_trait]
impl ShowOne for ShowBackup {
    type Client = dyn VolumeApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<ShowData> {
        debug!("take_action({:?})", self);
        let id = resolve_backup_id(client, &self.backup).await?;
        let backup = client.show_backup(&id).await?;
        Ok(ShowData::from_record(backup.strip_links()))
    }
}
