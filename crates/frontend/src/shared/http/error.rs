use std::time::Duration;
use thiserror::Error;

/// Placeholder used when an error response body cannot be read
pub const UNKNOWN_ERROR_BODY: &str = "Unknown error";

/// Every way a call through [`super::ApiClient`] (or a use case on top of
/// it) can fail. The `Display` text is what the user is shown.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Refresh failed or the retried request was still unauthorized.
    #[error("Session expired. Please re-auth")]
    SessionExpired,

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Connection error: {0}")]
    Network(#[from] NetworkError),

    /// Rejected on the client before any request was issued.
    #[error("{0}")]
    Validation(String),

    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("{0}")]
    Transport(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl FetchError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, FetchError::SessionExpired)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(NetworkError::Timeout(_)))
    }
}
