/*
[INPUT]:  Usage mistakes and construction failures
[OUTPUT]: Structured error type for failures raised before any network I/O
[POS]:    Error handling layer - the only errors surfaced through `Err`
[UPDATE]: When adding new usage checks or construction steps
*/

use thiserror::Error;

/// Errors raised synchronously, before a request is sent.
///
/// Transport and exchange failures are not represented here; they arrive
/// as [`crate::types::ApiFailure`] inside an [`crate::types::ApiResult`].
#[derive(Error, Debug)]
pub enum HitbtcError {
    /// A private endpoint was called on a client without credentials
    #[error("API key and secret key required to use authenticated methods")]
    MissingCredentials,

    /// A required parameter was missing or empty
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// WebSocket error
    #[error("WebSocket error: {0}")]
    WebSocket(String),
}

impl HitbtcError {
    /// Check if the error is caused by how the client was used
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            HitbtcError::MissingCredentials | HitbtcError::InvalidParameter(_)
        )
    }

    /// Check if error indicates missing authentication
    pub fn is_auth_error(&self) -> bool {
        matches!(self, HitbtcError::MissingCredentials)
    }
}

/// Result type alias for HitBTC operations
pub type Result<T> = std::result::Result<T, HitbtcError>;
