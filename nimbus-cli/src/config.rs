//! Configuration module
//!
//! Handles CLI configuration: service endpoints, auth token, request timeout
//! and output format.

use std::time::Duration;

use nimbus_client::{ClientError, CloudClient};

use crate::error::CliResult;
use crate::output::OutputFormat;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the network service
    pub network_url: String,

    /// Base URL of the block-storage service
    pub volume_url: String,

    /// Pre-issued auth token, sent with every request
    pub token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    /// How results are printed
    pub format: OutputFormat,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(network_url: String, volume_url: String) -> Self {
        Self {
            network_url,
            volume_url,
            token: None,
            timeout: Duration::from_secs(30),
            format: OutputFormat::Table,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("network_url", &self.network_url),
            ("volume_url", &self.volume_url),
        ] {
            if url.is_empty() {
                anyhow::bail!("{} cannot be empty", name);
            }

            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build the HTTP client for both services
    pub fn build_client(&self) -> CliResult<CloudClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ClientError::from)?;

        let client = CloudClient::with_client(&self.network_url, &self.volume_url, http);
        Ok(match &self.token {
            Some(token) => client.with_token(token),
            None => client,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "http://localhost:9696".to_string(),
            "http://localhost:8776/v3".to_string(),
        )
    }
}
