//! Nimbus HTTP Client
//!
//! A small, typed HTTP client for the cloud network and block-storage APIs.
//!
//! Operations are grouped into traits, one per service, so that command
//! handlers can be exercised against in-memory implementations:
//! - [`NetworkApi`]: networks (create, list, show, update, delete)
//! - [`VolumeApi`]: volumes, snapshots and backups
//!
//! [`CloudClient`] implements both over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use nimbus_client::{CloudClient, NetworkApi};
//! use nimbus_core::dto::network::NetworkFilter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CloudClient::new("http://localhost:9696", "http://localhost:8776/v3");
//!
//!     for network in client.list_networks(&NetworkFilter::default()).await? {
//!         println!("{:?}", network.name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod networks;
mod volumes;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use networks::NetworkApi;
pub use volumes::VolumeApi;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the pre-issued auth token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// HTTP client for the cloud service APIs
#[derive(Debug, Clone)]
pub struct CloudClient {
    /// Base URL of the network service (e.g., "http://localhost:9696")
    network_url: String,
    /// Base URL of the block-storage service, including any project path
    volume_url: String,
    /// Token sent with every request, if any
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl CloudClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `network_url` - Base URL of the network service
    /// * `volume_url` - Base URL of the block-storage service
    ///
    /// # Example
    /// ```
    /// use nimbus_client::CloudClient;
    ///
    /// let client = CloudClient::new("http://localhost:9696", "http://localhost:8776/v3");
    /// ```
    pub fn new(network_url: impl Into<String>, volume_url: impl Into<String>) -> Self {
        Self::with_client(network_url, volume_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use nimbus_client::CloudClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = CloudClient::with_client("http://localhost:9696", "http://localhost:8776/v3", http_client);
    /// ```
    pub fn with_client(
        network_url: impl Into<String>,
        volume_url: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            network_url: network_url.into().trim_end_matches('/').to_string(),
            volume_url: volume_url.into().trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    /// Attach an auth token sent as `X-Auth-Token`
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn network_url(&self) -> &str {
        &self.network_url
    }

    pub fn volume_url(&self) -> &str {
        &self.volume_url
    }

    /// Full URL of a network service path such as `/v2.0/networks`
    fn network_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.network_url, path)
    }

    /// Full URL of a block-storage path such as `/backups`
    fn volume_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.volume_url, path)
    }

    /// Start a request with the auth header applied
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    ///
    /// This method checks the status code and returns an error if the request failed.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
