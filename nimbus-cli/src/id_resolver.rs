//! ID resolver module
//!
//! Resolves user-supplied names or IDs to canonical resource IDs. Candidates
//! come from the collection listing of the resource; matching is done here
//! so the policy is the same for every resource type.
//!
//! Matching order:
//! 1. exact ID
//! 2. exact name (must be unique)
//! 3. case-insensitive ID prefix (must be unique)

use nimbus_client::{NetworkApi, VolumeApi};
use nimbus_core::Record;
use nimbus_core::dto::network::NetworkFilter;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Resolve a name or ID against a set of candidate records
///
/// # Arguments
/// * `candidates` - Records of the resource collection
/// * `resource` - Resource type, used in error messages
/// * `identifier` - The name, ID or ID prefix supplied by the user
///
/// # Errors
/// Returns an error if:
/// - Nothing matches (`NotFound`)
/// - Several records share the name or ID prefix (`Ambiguous`)
pub fn resolve(candidates: &[Record], resource: &str, identifier: &str) -> CliResult<String> {
    // Every ID starts with the empty string; never treat it as a prefix
    if identifier.is_empty() {
        return unique(Vec::new(), resource, identifier);
    }

    // An exact ID always wins, even if another record is named the same
    if let Some(id) = candidates
        .iter()
        .filter_map(Record::id)
        .find(|id| *id == identifier)
    {
        return Ok(id.to_string());
    }

    let by_name: Vec<&str> = candidates
        .iter()
        .filter(|r| r.name() == Some(identifier))
        .filter_map(Record::id)
        .collect();
    if !by_name.is_empty() {
        return unique(by_name, resource, identifier);
    }

    let prefix = identifier.to_lowercase();
    let by_prefix: Vec<&str> = candidates
        .iter()
        .filter_map(Record::id)
        .filter(|id| id.to_lowercase().starts_with(&prefix))
        .collect();

    unique(by_prefix, resource, identifier)
}

fn unique(matches: Vec<&str>, resource: &str, identifier: &str) -> CliResult<String> {
    match matches.len() {
        0 => Err(CliError::NotFound {
            resource: resource.to_string(),
            identifier: identifier.to_string(),
        }),
        1 => Ok(matches[0].to_string()),
        _ => Err(CliError::Ambiguous {
            resource: resource.to_string(),
            identifier: identifier.to_string(),
            matches: matches.into_iter().map(str::to_string).collect(),
        }),
    }
}

/// Resolve a network name or ID
pub async fn resolve_network_id(client: &dyn NetworkApi, identifier: &str) -> CliResult<String> {
    let networks = client.list_networks(&NetworkFilter::default()).await?;
    let id = resolve(&networks, "network", identifier)?;
    debug!("Resolved network '{}' to {}", identifier, id);
    Ok(id)
}

/// Resolve a volume name or ID
pub async fn resolve_volume_id(client: &dyn VolumeApi, identifier: &str) -> CliResult<String> {
    let volumes = client.list_volumes().await?;
    let id = resolve(&volumes, "volume", identifier)?;
    debug!("Resolved volume '{}' to {}", identifier, id);
    Ok(id)
}

/// Resolve a volume snapshot name or ID
pub async fn resolve_snapshot_id(client: &dyn VolumeApi, identifier: &str) -> CliResult<String> {
    let snapshots = client.list_snapshots().await?;
    let id = resolve(&snapshots, "snapshot", identifier)?;
    debug!("Resolved snapshot '{}' to {}", identifier, id);
    Ok(id)
}

/// Resolve a backup name or ID
pub async fn resolve_backup_id(client: &dyn VolumeApi, identifier: &str) -> CliResult<String> {
    let backups = client.list_backups().await?;
    let id = resolve(&backups, "backup", identifier)?;
    debug!("Resolved backup '{}' to {}", identifier, id);
    Ok(id)
}
