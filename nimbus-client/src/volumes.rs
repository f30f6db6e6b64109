//! Block-storage service endpoints
//!
//! Volumes and snapshots are only read (to resolve names); backups support
//! the full create/list/show/delete/restore cycle.

use async_trait::async_trait;
use nimbus_core::Record;
use nimbus_core::dto::backup::{CreateBackup, RestoreBackup};
use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::CloudClient;
use crate::error::Result;

#[derive(Serialize)]
struct BackupBody<'a> {
    backup: &'a CreateBackup,
}

#[derive(Serialize)]
struct RestoreBody<'a> {
    restore: &'a RestoreBackup,
}

#[derive(Deserialize)]
struct BackupEnvelope {
    backup: Record,
}

#[derive(Deserialize)]
struct BackupsEnvelope {
    backups: Vec<Record>,
}

#[derive(Deserialize)]
struct RestoreEnvelope {
    restore: Record,
}

#[derive(Deserialize)]
struct VolumesEnvelope {
    volumes: Vec<Record>,
}

#[derive(Deserialize)]
struct SnapshotsEnvelope {
    snapshots: Vec<Record>,
}

/// Operations on the block-storage service
#[async_trait]
pub trait VolumeApi: Send + Sync {
    /// List volumes with details
    async fn list_volumes(&self) -> Result<Vec<Record>>;

    /// List volume snapshots with details
    async fn list_snapshots(&self) -> Result<Vec<Record>>;

    /// Start a backup and return the created record
    async fn create_backup(&self, body: &CreateBackup) -> Result<Record>;

    /// List backups with details
    async fn list_backups(&self) -> Result<Vec<Record>>;

    /// Fetch a single backup by ID
    async fn show_backup(&self, id: &str) -> Result<Record>;

    /// Delete a backup
    ///
    /// With `force`, the backup is deleted regardless of its state.
    async fn delete_backup(&self, id: &str, force: bool) -> Result<()>;

    /// Restore a backup onto an existing volume
    async fn restore_backup(&self, id: &str, body: &RestoreBackup) -> Result<Record>;
}

impl CloudClient {
    /// Force delete goes through the backup action endpoint, plain delete does not
    fn delete_backup_request(&self, id: &str, force: bool) -> RequestBuilder {
        if force {
            let url = self.volume_endpoint(&format!("/backups/{}/action", id));
            self.request(Method::POST, &url)
                .json(&json!({"os-force_delete": {}}))
        } else {
            let url = self.volume_endpoint(&format!("/backups/{}", id));
            self.request(Method::DELETE, &url)
        }
    }
}

#[async_trait]
impl VolumeApi for CloudClient {
    async fn list_volumes(&self) -> Result<Vec<Record>> {
        let url = self.volume_endpoint("/volumes/detail");
        let response = self.request(Method::GET, &url).send().await?;

        let envelope: VolumesEnvelope = self.handle_response(response).await?;
        Ok(envelope.volumes)
    }

    async fn list_snapshots(&self) -> Result<Vec<Record>> {
        let url = self.volume_endpoint("/snapshots/detail");
        let response = self.request(Method::GET, &url).send().await?;

        let envelope: SnapshotsEnvelope = self.handle_response(response).await?;
        Ok(envelope.snapshots)
    }

    async fn create_backup(&self, body: &CreateBackup) -> Result<Record> {
        let url = self.volume_endpoint("/backups");
        let response = self
            .request(Method::POST, &url)
            .json(&BackupBody { backup: body })
            .send()
            .await?;

        let envelope: BackupEnvelope = self.handle_response(response).await?;
        Ok(envelope.backup)
    }

    async fn list_backups(&self) -> Result<Vec<Record>> {
        let url = self.volume_endpoint("/backups/detail");
        let response = self.request(Method::GET, &url).send().await?;

        let envelope: BackupsEnvelope = self.handle_response(response).await?;
        Ok(envelope.backups)
    }

    async fn show_backup(&self, id: &str) -> Result<Record> {
        let url = self.volume_endpoint(&format!("/backups/{}", id));
        let response = self.request(Method::GET, &url).send().await?;

        let envelope: BackupEnvelope = self.handle_response(response).await?;
        Ok(envelope.backup)
    }

    async fn delete_backup(&self, id: &str, force: bool) -> Result<()> {
        let response = self.delete_backup_request(id, force).send().await?;
        self.handle_empty_response(response).await
    }

    async fn restore_backup(&self, id: &str, body: &RestoreBackup) -> Result<Record> {
        let url = self.volume_endpoint(&format!("/backups/{}/restore", id));
        let response = self
            .request(Method::POST, &url)
            .json(&RestoreBody { restore: body })
            .send()
            .await?;

        let envelope: RestoreEnvelope = self.handle_response(response).await?;
        Ok(envelope.restore)
    }
}
