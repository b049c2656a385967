//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, and serves the Tailscale tools
//! over stdio. A missing `TAILSCALE_API_KEY` ends the process with exit code 1.

use anyhow::Result;
use tracing::info;

use tailscale_mcp_server::core::logging::init_logging;
use tailscale_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Fails before anything touches stdio if the API key is absent
    let config = Config::from_env()?;

    init_logging(&config.logging.level)?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config)?;

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}
