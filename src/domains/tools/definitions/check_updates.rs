//! Check updates tool definition.
//!
//! Lists devices whose Tailscale client reports an available update.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::DeviceList;
use crate::domains::devices::Device;

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CheckUpdatesParams {}

/// A device with a pending client update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUpdate {
    pub name: String,
    pub hostname: String,
    pub os: String,
    /// The client version currently installed.
    pub current_version: String,
    pub connected_to_control: bool,
}

impl From<&Device> for PendingUpdate {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name.clone(),
            hostname: device.hostname.clone(),
            os: device.os.clone(),
            current_version: device.client_version.clone(),
            connected_to_control: device.connected_to_control,
        }
    }
}

pub struct CheckUpdatesTool;

impl CheckUpdatesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tailscale_check_updates";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check which devices have updates available for their Tailscale client.";

    /// Execute the tool logic.
    pub fn execute(devices: &[Device]) -> DeviceList<PendingUpdate> {
        DeviceList::new(
            devices
                .iter()
                .filter(|d| d.update_available)
                .map(PendingUpdate::from)
                .collect(),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CheckUpdatesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
