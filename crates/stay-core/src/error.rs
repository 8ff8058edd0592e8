//! Error Types

use thiserror::Error;

/// Result type alias for self-service flows
pub type Result<T> = std::result::Result<T, FlowError>;

/// Fallback text when the login endpoint rejects without a message
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Text reported when login succeeds but carries no bearer token
pub const TOKEN_MISSING: &str = "Failed to get authentication token";

/// Fallback text when the profile deletion is rejected without a message
pub const DELETE_FAILED: &str = "Failed to delete account";

/// Fallback text when an owner application is rejected without a message
pub const SUBMIT_FAILED: &str = "Failed to submit application";

/// Fallback text for transport failures
pub const NETWORK_ERROR: &str = "Network error";

/// Errors raised by the lead and account deletion flows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// A required field is missing or malformed; no request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials rejected by the login endpoint
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Login succeeded but the response had no access token
    #[error("Login response did not include an access token")]
    TokenMissing,

    /// Profile deletion rejected after a successful login
    #[error("Deletion failed: {0}")]
    Deletion(String),

    /// Owner application rejected by the backend
    #[error("Submission failed: {0}")]
    Submission(String),

    /// No HTTP response was obtained (connection failure or timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlowError {
    /// Only transport failures may succeed on a manual retry
    pub fn is_retryable(&self) -> bool {
        matches!(self, FlowError::Transport(_))
    }

    /// Notification text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Validation(msg)
            | FlowError::Authentication(msg)
            | FlowError::Deletion(msg)
            | FlowError::Submission(msg) => msg.clone(),
            FlowError::TokenMissing => TOKEN_MISSING.into(),
            FlowError::Transport(_) => NETWORK_ERROR.into(),
            FlowError::Config(_) => "Service configuration error.".into(),
        }
    }
}

impl From<reqwest::Error> for FlowError {
    fn from(err: reqwest::Error) -> Self {
        FlowError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for FlowError {
    fn from(err: url::ParseError) -> Self {
        FlowError::Config(err.to_string())
    }
}
