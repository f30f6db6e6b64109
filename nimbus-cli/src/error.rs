//! CLI error types
//!
//! Usage errors never reach this type: clap rejects bad or conflicting flags
//! before a command runs.

use nimbus_client::ClientError;
use thiserror::Error;

/// Result type alias for command execution
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Errors raised while executing a command
#[derive(Debug, Error)]
pub enum CliError {
    /// No resource matched a name or ID
    #[error("No {resource} with a name or ID of '{identifier}' exists.")]
    NotFound { resource: String, identifier: String },

    /// More than one resource matched a name or ID
    #[error(
        "More than one {resource} exists with the name or ID '{identifier}': {}",
        .matches.join(", ")
    )]
    Ambiguous {
        resource: String,
        identifier: String,
        matches: Vec<String>,
    },

    /// Domain-level failure with a human-readable message
    #[error("{0}")]
    Command(String),

    /// Transport or API failure, passed through unchanged
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing the result failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding the result as JSON failed
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }

    /// True when the resource is gone, whether the resolver or the service said so
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Client(e) => e.is_not_found(),
            _ => false,
        }
    }
}
