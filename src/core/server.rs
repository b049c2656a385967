//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! `list_tools` and `call_tool` are implemented by hand rather than through
//! rmcp's tool router so that an unknown tool name yields an `isError`
//! result instead of a JSON-RPC error.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::devices::{DeviceService, DeviceSource, TailscaleClient};
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Catalog and dispatcher for tool calls.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server reading devices from the Tailscale API.
    pub fn new(config: Config) -> Result<Self> {
        let client = TailscaleClient::new(&config.tailscale)?;
        let devices = DeviceService::new(client, &config.tailscale.tailnet);
        Ok(Self::with_source(config, Arc::new(devices)))
    }

    /// Create a server reading devices from an arbitrary source.
    pub fn with_source(config: Config, source: Arc<dyn DeviceSource>) -> Self {
        Self {
            config: Arc::new(config),
            registry: ToolRegistry::new(source),
        }
    }

    /// The static tool catalog.
    pub fn tool_catalog(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name. Always returns an envelope.
    pub async fn dispatch(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.registry.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Query the Tailscale device inventory: list devices, look one up, filter by online state, check for client updates, or get a summary."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_catalog(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        Ok(self.dispatch(&request.name, request.arguments).await)
    }
}
