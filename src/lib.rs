//! Tailscale MCP Server Library
//!
//! This crate exposes the device inventory of a Tailscale network (tailnet)
//! to MCP clients as a small set of read-only tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **devices**: Tailscale API client and device model
//!   - **tools**: tool catalog, request validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use tailscale_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
