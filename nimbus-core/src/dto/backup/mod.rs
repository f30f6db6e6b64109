//! Volume backup DTOs

use serde::{Deserialize, Serialize};

/// Request to create a backup of a volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBackup {
    /// Resolved ID of the volume to back up
    pub volume_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Object-store container the backup is written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    /// Resolved ID of a snapshot of the volume to back up instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,

    /// Allow backing up an in-use volume
    pub force: bool,

    pub incremental: bool,
}

/// Request to restore a backup onto a volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreBackup {
    pub volume_id: String,
}
