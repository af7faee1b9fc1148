//! Error types for the registry admin client.

use thiserror::Error;

/// Errors surfaced by BFF calls, configuration loading and the CLI.
///
/// The availability state machine never produces these; an unconfigured
/// application is the steady state `available == false`, not an error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, DNS, timeout or body-read failure from the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The BFF answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The response did not match the expected `{ "data": ... }` envelope.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A client was requested while the API state is not available.
    #[error("API not available: {0}")]
    Unavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Runtime construction or output formatting failure in the CLI.
    #[error("CLI error: {0}")]
    Cli(String),
}

impl ApiError {
    /// Whether the failure came from the transport layer rather than from
    /// the shape of a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::RequestFailed { .. })
    }

    /// Whether the failure is an envelope/shape mismatch.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ApiError::MalformedResponse(_))
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
