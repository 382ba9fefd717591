//! Error types for authflow.

use thiserror::Error;

/// Primary error type for all authflow operations.
///
/// Journey execution folds these into a failed outcome at the state-machine
/// boundary; token issuance propagates them to the caller.
#[derive(Error, Debug)]
pub enum AuthflowError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Token exchange failed (status {status}): {body}")]
    Exchange { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AuthflowError {
    /// Create an exchange error from a response status and body.
    pub fn exchange(status: u16, body: impl Into<String>) -> Self {
        Self::Exchange {
            status,
            body: body.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AuthflowError>;
