//! List offline devices tool definition.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::DeviceList;
use crate::domains::devices::Device;

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListOfflineDevicesParams {}

/// Summary row for a disconnected device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineDevice {
    pub name: String,
    pub hostname: String,
    pub os: String,
    pub last_seen: String,
}

impl From<&Device> for OfflineDevice {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name.clone(),
            hostname: device.hostname.clone(),
            os: device.os.clone(),
            last_seen: device.last_seen.clone(),
        }
    }
}

/// List offline devices tool - complement of the online listing.
pub struct ListOfflineDevicesTool;

impl ListOfflineDevicesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tailscale_list_offline_devices";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List devices that are currently offline or disconnected.";

    /// Execute the tool logic.
    pub fn execute(devices: &[Device]) -> DeviceList<OfflineDevice> {
        DeviceList::new(
            devices
                .iter()
                .filter(|d| !d.is_online())
                .map(OfflineDevice::from)
                .collect(),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListOfflineDevicesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
