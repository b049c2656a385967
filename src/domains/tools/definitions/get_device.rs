//! Get device tool definition.
//!
//! Looks a single device up by id, MagicDNS name or hostname. A miss is a
//! normal result carrying `error` and `hint`, not a failed call.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::ListDevicesTool;
use crate::domains::devices::Device;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get device tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDeviceParams {
    #[schemars(
        description = "Device ID (numeric) or device name (e.g., 'opus.centaur-snapper.ts.net')"
    )]
    pub device_id: String,
}

/// Result of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DeviceLookup {
    Found(Device),
    NotFound { error: String, hint: String },
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get device tool - single device lookup.
pub struct GetDeviceTool;

impl GetDeviceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tailscale_get_device";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get detailed information about a specific device by its device ID or name.";

    /// Execute the tool logic. The first matching device wins.
    #[instrument(skip_all, fields(device_id = %params.device_id))]
    pub fn execute(devices: Vec<Device>, params: &GetDeviceParams) -> DeviceLookup {
        match devices.into_iter().find(|d| d.matches(&params.device_id)) {
            Some(device) => DeviceLookup::Found(device),
            None => {
                info!("No device matches {}", params.device_id);
                DeviceLookup::NotFound {
                    error: format!("Device not found: {}", params.device_id),
                    hint: format!(
                        "Try using {} to see available devices",
                        ListDevicesTool::NAME
                    ),
                }
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetDeviceParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
