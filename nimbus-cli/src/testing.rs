//! In-memory service fakes for command tests
//!
//! Each fake records the calls made against it, in order, as
//! `"method"` or `"method:id"` strings.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use nimbus_client::{ClientError, NetworkApi, Result, VolumeApi};
use nimbus_core::Record;
use nimbus_core::dto::backup::{CreateBackup, RestoreBackup};
use nimbus_core::dto::network::{CreateNetwork, NetworkFilter, UpdateNetwork};
use serde_json::{Value, json};

/// Build a record from a JSON object literal
pub fn record(value: Value) -> Record {
    serde_json::from_value(value).expect("record must be a JSON object")
}

fn self_link(kind: &str, id: &str) -> Value {
    json!([{"rel": "self", "href": format!("http://localhost/{}/{}", kind, id)}])
}

fn merge(mut base: Record, body: Value) -> Record {
    if let Value::Object(fields) = body {
        for (key, value) in fields {
            base.insert(key, value);
        }
    }
    base
}

#[derive(Default)]
pub struct FakeNetworkApi {
    networks: Vec<Record>,
    dhcp: HashMap<String, Vec<Record>>,
    failing_deletes: HashSet<String>,
    calls: Mutex<Vec<String>>,
    filters: Mutex<Vec<NetworkFilter>>,
    created: Mutex<Vec<CreateNetwork>>,
    updated: Mutex<Vec<(String, UpdateNetwork)>>,
    deleted: Mutex<Vec<String>>,
}

impl FakeNetworkApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_networks(mut self, networks: Vec<Record>) -> Self {
        self.networks = networks;
        self
    }

    pub fn with_dhcp_agent(mut self, agent_id: &str, networks: Vec<Record>) -> Self {
        self.dhcp.insert(agent_id.to_string(), networks);
        self
    }

    /// Make deleting this network ID fail with a 409
    pub fn failing_delete(mut self, id: &str) -> Self {
        self.failing_deletes.insert(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn filters(&self) -> Vec<NetworkFilter> {
        self.filters.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<CreateNetwork> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(String, UpdateNetwork)> {
        self.updated.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    fn record_call(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn find(&self, id: &str) -> Result<Record> {
        self.networks
            .iter()
            .find(|n| n.id() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::api_error(404, format!("Network {} could not be found", id)))
    }
}

#[async_trait]
impl NetworkApi for FakeNetworkApi {
    async fn create_network(&self, body: &CreateNetwork) -> Result<Record> {
        self.record_call("create_network");
        self.created.lock().unwrap().push(body.clone());

        let mut network = record(json!({
            "id": "new-net",
            "status": "ACTIVE",
            "subnets": [],
            "links": self_link("networks", "new-net"),
        }));
        network = merge(network, serde_json::to_value(body).unwrap());
        Ok(network)
    }

    async fn list_networks(&self, filter: &NetworkFilter) -> Result<Vec<Record>> {
        self.record_call("list_networks");
        self.filters.lock().unwrap().push(filter.clone());
        Ok(self.networks.clone())
    }

    async fn list_networks_on_dhcp_agent(&self, agent_id: &str) -> Result<Vec<Record>> {
        self.record_call(format!("list_networks_on_dhcp_agent:{}", agent_id));
        Ok(self.dhcp.get(agent_id).cloned().unwrap_or_default())
    }

    async fn show_network(&self, id: &str) -> Result<Record> {
        self.record_call(format!("show_network:{}", id));
        self.find(id)
    }

    async fn update_network(&self, id: &str, body: &UpdateNetwork) -> Result<Record> {
        self.record_call(format!("update_network:{}", id));
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), body.clone()));
        Ok(merge(self.find(id)?, serde_json::to_value(body).unwrap()))
    }

    async fn delete_network(&self, id: &str) -> Result<()> {
        self.record_call(format!("delete_network:{}", id));
        if self.failing_deletes.contains(id) {
            return Err(ClientError::api_error(409, "Network is in use"));
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeVolumeApi {
    volumes: Vec<Record>,
    snapshots: Vec<Record>,
    backups: Vec<Record>,
    volume_list_fails: bool,
    failing_deletes: HashSet<String>,
    calls: Mutex<Vec<String>>,
    created: Mutex<Vec<CreateBackup>>,
    deleted: Mutex<Vec<(String, bool)>>,
}

impl FakeVolumeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_volumes(mut self, volumes: Vec<Record>) -> Self {
        self.volumes = volumes;
        self
    }

    pub fn with_snapshots(mut self, snapshots: Vec<Record>) -> Self {
        self.snapshots = snapshots;
        self
    }

    pub fn with_backups(mut self, backups: Vec<Record>) -> Self {
        self.backups = backups;
        self
    }

    /// Make `list_volumes` fail with a 503
    pub fn failing_volume_list(mut self) -> Self {
        self.volume_list_fails = true;
        self
    }

    /// Make deleting this backup ID fail with a 400
    pub fn failing_delete(mut self, id: &str) -> Self {
        self.failing_deletes.insert(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<CreateBackup> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<(String, bool)> {
        self.deleted.lock().unwrap().clone()
    }

    fn record_call(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl VolumeApi for FakeVolumeApi {
    async fn list_volumes(&self) -> Result<Vec<Record>> {
        self.record_call("list_volumes");
        if self.volume_list_fails {
            return Err(ClientError::api_error(503, "Service unavailable"));
        }
        Ok(self.volumes.clone())
    }

    async fn list_snapshots(&self) -> Result<Vec<Record>> {
        self.record_call("list_snapshots");
        Ok(self.snapshots.clone())
    }

    async fn create_backup(&self, body: &CreateBackup) -> Result<Record> {
        self.record_call("create_backup");
        self.created.lock().unwrap().push(body.clone());
        Ok(record(json!({
            "id": "new-backup",
            "name": body.name,
            "links": self_link("backups", "new-backup"),
        })))
    }

    async fn list_backups(&self) -> Result<Vec<Record>> {
        self.record_call("list_backups");
        Ok(self.backups.clone())
    }

    async fn show_backup(&self, id: &str) -> Result<Record> {
        self.record_call(format!("show_backup:{}", id));
        self.backups
            .iter()
            .find(|b| b.id() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::api_error(404, format!("Backup {} could not be found", id)))
    }

    async fn delete_backup(&self, id: &str, force: bool) -> Result<()> {
        self.record_call(format!("delete_backup:{}", id));
        if self.failing_deletes.contains(id) {
            return Err(ClientError::api_error(400, "Invalid backup: status must be available or error"));
        }
        self.deleted.lock().unwrap().push((id.to_string(), force));
        Ok(())
    }

    async fn restore_backup(&self, id: &str, body: &RestoreBackup) -> Result<Record> {
        self.record_call(format!("restore_backup:{}", id));
        Ok(record(json!({
            "backup_id": id,
            "volume_id": body.volume_id,
        })))
    }
}
