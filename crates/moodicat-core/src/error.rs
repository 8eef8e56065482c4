//! Error types for moodicat-core

use thiserror::Error;

/// Result type alias using moodicat-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in moodicat-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The server rejected the session token
    #[error("Session expired. Please sign in again.")]
    Unauthorized,

    /// Non-success response from the API
    ///
    /// `message` is the text the server sent, empty when the body had none.
    #[error("{}", describe_api_error(*.status, .message))]
    Api { status: u16, message: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Response body did not have the expected shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Secure session storage error
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

impl Error {
    /// HTTP status attached to this error, if the server produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message for API errors.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

fn describe_api_error(status: u16, message: &str) -> String {
    if message.trim().is_empty() {
        format!("HTTP {status}")
    } else {
        format!("{message} ({status})")
    }
}
