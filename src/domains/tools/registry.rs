//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static catalog advertised to clients
//! - Dispatch of tool calls to the matching definition
//!
//! Dispatch is the single place where failures are recovered: whatever goes
//! wrong while parsing arguments or fetching devices comes back as an error
//! envelope rather than a protocol error.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{instrument, warn};

use super::ToolError;
use super::definitions::common::{error_result, success_result};
use super::definitions::{
    CheckUpdatesTool, DeviceSummaryTool, GetDeviceTool, ListDevicesTool, ListOfflineDevicesTool,
    ListOnlineDevicesTool,
};
use super::request::ToolRequest;
use crate::domains::devices::{Device, DeviceSource};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the device source every tool reads from.
#[derive(Clone)]
pub struct ToolRegistry {
    source: Arc<dyn DeviceSource>,
}

impl ToolRegistry {
    /// Create a new tool registry reading devices from `source`.
    pub fn new(source: Arc<dyn DeviceSource>) -> Self {
        Self { source }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ListDevicesTool::NAME,
            GetDeviceTool::NAME,
            ListOnlineDevicesTool::NAME,
            ListOfflineDevicesTool::NAME,
            CheckUpdatesTool::NAME,
            DeviceSummaryTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the catalog.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListDevicesTool::to_tool(),
            GetDeviceTool::to_tool(),
            ListOnlineDevicesTool::to_tool(),
            ListOfflineDevicesTool::to_tool(),
            CheckUpdatesTool::to_tool(),
            DeviceSummaryTool::to_tool(),
        ]
    }

    /// Dispatch a tool call. Never fails: errors become error envelopes.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        match self.try_call_tool(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                error_result(&e)
            }
        }
    }

    async fn try_call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let request = ToolRequest::parse(name, arguments)?;
        let devices = self.source.fetch_devices().await?;
        run(request, devices)
    }
}

/// Run a validated request against a device snapshot.
fn run(request: ToolRequest, devices: Vec<Device>) -> Result<CallToolResult, ToolError> {
    match request {
        ToolRequest::ListDevices(params) => {
            success_result(&ListDevicesTool::execute(devices, &params)?)
        }
        ToolRequest::GetDevice(params) => success_result(&GetDeviceTool::execute(devices, &params)),
        ToolRequest::ListOnlineDevices => success_result(&ListOnlineDevicesTool::execute(&devices)),
        ToolRequest::ListOfflineDevices => {
            success_result(&ListOfflineDevicesTool::execute(&devices))
        }
        ToolRequest::CheckUpdates => success_result(&CheckUpdatesTool::execute(&devices)),
        ToolRequest::DeviceSummary => success_result(&DeviceSummaryTool::execute(&devices)),
    }
}
