//! Tailscale API error types.

use thiserror::Error;

/// Errors returned by the Tailscale API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("Tailscale API error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response (connection refused, DNS, TLS...).
    #[error("Tailscale API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("Invalid response from Tailscale API: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API key cannot be sent as an HTTP header.
    #[error("Invalid Tailscale API key: {0}")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
        }
    }
}
