//! Error types for the Nimbus client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the cloud services
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the service answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_404_only() {
        assert!(ClientError::api_error(404, "no such network").is_not_found());
        assert!(!ClientError::api_error(409, "network in use").is_not_found());
        assert!(!ClientError::ParseError("truncated".to_string()).is_not_found());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api_error(409, "Backup status must be available");
        assert_eq!(
            err.to_string(),
            "API error (status 409): Backup status must be available"
        );
    }
}
