//! Network service endpoints

use async_trait::async_trait;
use nimbus_core::Record;
use nimbus_core::dto::network::{CreateNetwork, NetworkFilter, UpdateNetwork};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::CloudClient;
use crate::error::Result;

const NETWORKS_PATH: &str = "/v2.0/networks";

/// Request envelope: `{"network": {...}}`
#[derive(Serialize)]
struct NetworkBody<'a, T> {
    network: &'a T,
}

/// Response envelope: `{"network": {...}}`
#[derive(Deserialize)]
struct NetworkEnvelope {
    network: Record,
}

/// Response envelope: `{"networks": [...]}`
#[derive(Deserialize)]
struct NetworksEnvelope {
    networks: Vec<Record>,
}

/// Operations on the network service
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// Create a network and return the created record
    async fn create_network(&self, body: &CreateNetwork) -> Result<Record>;

    /// List networks matching the server-side filter
    async fn list_networks(&self, filter: &NetworkFilter) -> Result<Vec<Record>>;

    /// List the networks hosted by a DHCP agent
    async fn list_networks_on_dhcp_agent(&self, agent_id: &str) -> Result<Vec<Record>>;

    /// Fetch a single network by ID
    async fn show_network(&self, id: &str) -> Result<Record>;

    /// Apply a partial update to a network
    async fn update_network(&self, id: &str, body: &UpdateNetwork) -> Result<Record>;

    /// Delete a network by ID
    async fn delete_network(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl NetworkApi for CloudClient {
    async fn create_network(&self, body: &CreateNetwork) -> Result<Record> {
        let url = self.network_endpoint(NETWORKS_PATH);
        let response = self
            .request(Method::POST, &url)
            .json(&NetworkBody { network: body })
            .send()
            .await?;

        let envelope: NetworkEnvelope = self.handle_response(response).await?;
        Ok(envelope.network)
    }

    async fn list_networks(&self, filter: &NetworkFilter) -> Result<Vec<Record>> {
        let url = self.network_endpoint(NETWORKS_PATH);
        let response = self
            .request(Method::GET, &url)
            .query(&filter.query())
            .send()
            .await?;

        let envelope: NetworksEnvelope = self.handle_response(response).await?;
        Ok(envelope.networks)
    }

    async fn list_networks_on_dhcp_agent(&self, agent_id: &str) -> Result<Vec<Record>> {
        let url = self.network_endpoint(&format!("/v2.0/agents/{}/dhcp-networks", agent_id));
        let response = self.request(Method::GET, &url).send().await?;

        let envelope: NetworksEnvelope = self.handle_response(response).await?;
        Ok(envelope.networks)
    }

    async fn show_network(&self, id: &str) -> Result<Record> {
        let url = self.network_endpoint(&format!("{}/{}", NETWORKS_PATH, id));
        let response = self.request(Method::GET, &url).send().await?;

        let envelope: NetworkEnvelope = self.handle_response(response).await?;
        Ok(envelope.network)
    }

    async fn update_network(&self, id: &str, body: &UpdateNetwork) -> Result<Record> {
        let url = self.network_endpoint(&format!("{}/{}", NETWORKS_PATH, id));
        let response = self
            .request(Method::PUT, &url)
            .json(&NetworkBody { network: body })
            .send()
            .await?;

        let envelope: NetworkEnvelope = self.handle_response(response).await?;
        Ok(envelope.network)
    }

    async fn delete_network(&self, id: &str) -> Result<()> {
        let url = self.network_endpoint(&format!("{}/{}", NETWORKS_PATH, id));
        let response = self.request(Method::DELETE, &url).send().await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_envelope() {
        let body = UpdateNetwork {
            name: Some("renamed".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(NetworkBody { network: &body }).unwrap(),
            json!({"network": {"name": "renamed"}})
        );
    }

    #[test]
    fn test_list_envelope() {
        let envelope: NetworksEnvelope = serde_json::from_value(json!({
            "networks": [
                {"id": "n1", "name": "private", "subnets": ["s1"]},
                {"id": "n2", "name": "public", "router:external": true}
            ]
        }))
        .unwrap();

        assert_eq!(envelope.networks.len(), 2);
        assert_eq!(envelope.networks[1].name(), Some("public"));
    }

    #[test]
    fn test_external_filter_in_query_string() {
        let client = CloudClient::new("http://localhost:9696", "http://localhost:8776/v3");
        let request = client
            .request(Method::GET, &client.network_endpoint(NETWORKS_PATH))
            .query(&NetworkFilter { external: true }.query())
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("router%3Aexternal=True"));
    }
}
