//! Error types and handling for the MCP server.
//!
//! This module defines the error type for server startup. Per-call failures
//! never reach it; they are turned into tool envelopes by the tool registry.
//! Transport failures have their own type in `transport`.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Tailscale API client.
    #[error("API error: {0}")]
    Api(#[from] crate::domains::devices::ApiError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
