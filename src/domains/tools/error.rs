//! Tool-specific error types.

use thiserror::Error;

use crate::domains::devices::ApiError;

/// Errors that can occur while handling a tool call.
///
/// The display string of each variant is what the client sees in the
/// `{"error": ...}` envelope.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required argument was absent or empty.
    #[error("{0} parameter is required")]
    MissingArgument(String),

    /// Arguments were present but of the wrong shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The device listing could not be fetched.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The tool output could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ToolError::unknown_tool("nope").to_string(), "Unknown tool: nope");
        assert_eq!(
            ToolError::missing_argument("deviceId").to_string(),
            "deviceId parameter is required"
        );
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: ToolError = ApiError::status(500, "Internal Server Error").into();
        assert_eq!(err.to_string(), "Tailscale API error: 500 Internal Server Error");
    }
}
