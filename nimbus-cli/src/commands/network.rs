//! Network command handlers
//!
//! Handles network creation, listing, display, update and deletion.

use async_trait::async_trait;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};
use nimbus_client::NetworkApi;
use nimbus_core::Record;
use nimbus_core::dto::network::{CreateNetwork as CreateNetworkBody, NetworkFilter, UpdateNetwork};
use serde_json::Value;
use tracing::{debug, error};

use crate::command::{Action, Lister, Listing, ShowData, ShowOne, run_action, run_list, run_show};
use crate::error::{CliError, CliResult};
use crate::format::{Formatters, dict_properties, format_list};
use crate::id_resolver::resolve_network_id;
use crate::output::OutputFormat;
use crate::types::{AdminStateFlags, ShareFlags};

/// Columns shown by `network list` without `--long`
const DEFAULT_COLUMNS: [&str; 3] = ["id", "name", "subnets"];

/// Network subcommands
#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// Create new network
    Create(CreateNetwork),
    /// Delete network(s)
    Delete(DeleteNetwork),
    /// List networks
    List(ListNetwork),
    /// Set network properties
    Set(SetNetwork),
    /// Show network details
    Show(ShowNetwork),
}

/// Handle network commands
///
/// Routes network subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The network command to execute
/// * `client` - The network service client
/// * `format` - How results are printed
pub async fn handle_network_command(
    command: NetworkCommands,
    client: &(dyn NetworkApi + 'static),
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        NetworkCommands::Create(cmd) => run_show(&cmd, client, format).await,
        NetworkCommands::Delete(cmd) => run_action(&cmd, client).await,
        NetworkCommands::List(cmd) => run_list(&cmd, client, format).await,
        NetworkCommands::Set(cmd) => run_action(&cmd, client).await,
        NetworkCommands::Show(cmd) => run_show(&cmd, client, format).await,
    }
}

/// Flatten `subnets` for display
fn filters(record: Record) -> Record {
    record.map_value("subnets", |v| Value::String(format_list(v)))
}

#[derive(Args, Debug)]
pub struct CreateNetwork {
    /// New network name
    #[arg(value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    #[command(flatten)]
    pub admin_state: AdminStateFlags,

    #[command(flatten)]
    pub share: ShareFlags,
}

impl CreateNetwork {
    /// Request body: name and admin state always, `shared` only if given
    pub fn body(&self) -> CreateNetworkBody {
        CreateNetworkBody {
            name: self.name.clone(),
            admin_state_up: self.admin_state.toggle().unwrap_or(true),
            shared: self.share.toggle().as_option(),
        }
    }
}

#[async_trait]
impl ShowOne for CreateNetwork {
    type Client = dyn NetworkApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<ShowData> {
        debug!("take_action({:?})", self);
        let network = client.create_network(&self.body()).await?;
        Ok(ShowData::from_record(filters(network.strip_links())))
    }
}

#[derive(Args, Debug)]
pub struct DeleteNetwork {
    /// Network(s) to delete (name or ID)
    #[arg(
        value_name = "NETWORK",
        required = true,
        num_args = 1..,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub networks: Vec<String>,
}

#[async_trait]
impl Action for DeleteNetwork {
    type Client = dyn NetworkApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<()> {
        debug!("take_action({:?})", self);
        let mut failed = 0;

        for network in &self.networks {
            let result = async {
                let id = resolve_network_id(client, network).await?;
                client.delete_network(&id).await?;
                Ok::<_, CliError>(())
            }
            .await;

            if let Err(e) = result {
                failed += 1;
                if e.is_not_found() {
                    error!("Network '{}' not found, skipping: {}", network, e);
                } else {
                    error!(
                        "Failed to delete network with name or ID '{}': {}",
                        network, e
                    );
                }
            }
        }

        if failed > 0 {
            return Err(CliError::command(format!(
                "{} of {} networks failed to delete.",
                failed,
                self.networks.len()
            )));
        }

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListNetwork {
    /// List external networks
    #[arg(long)]
    pub external: bool,

    /// List networks hosted by this DHCP agent (ID)
    #[arg(long, value_name = "AGENT_ID")]
    pub dhcp: Option<String>,

    /// Long listing
    #[arg(long)]
    pub long: bool,

    /// Column to include (repeatable)
    #[arg(short, long = "column", value_name = "COLUMN")]
    pub columns: Vec<String>,
}

impl ListNetwork {
    /// Pick the displayed columns from those present in the first record
    fn select_columns(&self, available: Vec<String>) -> Vec<String> {
        let mut columns = if self.long || self.dhcp.is_some() {
            available
        } else {
            DEFAULT_COLUMNS
                .iter()
                .filter(|c| available.iter().any(|a| a == *c))
                .map(|c| c.to_string())
                .collect()
        };

        if !self.columns.is_empty() {
            columns = self
                .columns
                .iter()
                .filter(|c| columns.contains(c))
                .cloned()
                .collect();
        }
        columns
    }
}

#[async_trait]
impl Lister for ListNetwork {
    type Client = dyn NetworkApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<Listing> {
        debug!("take_action({:?})", self);
        let data = match &self.dhcp {
            Some(agent) => client.list_networks_on_dhcp_agent(agent).await?,
            None => {
                let filter = NetworkFilter {
                    external: self.external,
                };
                client.list_networks(&filter).await?
            }
        };

        let available = data.first().map(Record::sorted_keys).unwrap_or_default();
        let columns = self.select_columns(available);

        let mut formatters = Formatters::new();
        formatters.insert("subnets".to_string(), Box::new(format_list));

        let row_columns = columns.clone();
        let rows = data
            .into_iter()
            .map(move |network| dict_properties(&network, &row_columns, &formatters));

        Ok(Listing::new(columns, rows))
    }
}

#[derive(Args, Debug)]
pub struct SetNetwork {
    /// Network to modify (name or ID)
    #[arg(value_name = "NETWORK", value_parser = NonEmptyStringValueParser::new())]
    pub identifier: String,

    /// Set network name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub admin_state: AdminStateFlags,

    #[command(flatten)]
    pub share: ShareFlags,
}

impl SetNetwork {
    /// Partial update containing only the flags given
    pub fn body(&self) -> UpdateNetwork {
        UpdateNetwork {
            name: self.name.clone(),
            admin_state_up: self.admin_state.toggle().as_option(),
            shared: self.share.toggle().as_option(),
        }
    }
}

#[async_trait]
impl Action for SetNetwork {
    type Client = dyn NetworkApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<()> {
        debug!("take_action({:?})", self);
        let body = self.body();
        if body.is_empty() {
            return Err(CliError::command("Nothing specified to be set"));
        }

        let id = resolve_network_id(client, &self.identifier).await?;
        client.update_network(&id, &body).await?;
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowNetwork {
    /// Network to display (name or ID)
    #[arg(value_name = "NETWORK", value_parser = NonEmptyStringValueParser::new())]
    pub identifier: String,
}

#[async_trait]
impl ShowOne for ShowNetwork {
    type Client = dyn NetworkApi;

    async fn take_action(&self, client: &Self::Client) -> CliResult<ShowData> {
        debug!("take_action({:?})", self);
        let id = resolve_network_id(client, &self.identifier).await?;
        let network = client.show_network(&id).await?;
        Ok(ShowData::from_record(filters(network.strip_links())))
    }
}
