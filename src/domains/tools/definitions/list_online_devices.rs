//! List online devices tool definition.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::DeviceList;
use crate::domains::devices::Device;

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListOnlineDevicesParams {}

/// Summary row for a connected device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineDevice {
    pub name: String,
    pub hostname: String,
    pub addresses: Vec<String>,
    pub os: String,
    pub last_seen: String,
}

impl From<&Device> for OnlineDevice {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name.clone(),
            hostname: device.hostname.clone(),
            addresses: device.addresses.clone(),
            os: device.os.clone(),
            last_seen: device.last_seen.clone(),
        }
    }
}

/// List online devices tool - devices connected to the control plane.
pub struct ListOnlineDevicesTool;

impl ListOnlineDevicesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tailscale_list_online_devices";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List only devices that are currently online and connected to the control plane.";

    /// Execute the tool logic.
    pub fn execute(devices: &[Device]) -> DeviceList<OnlineDevice> {
        DeviceList::new(
            devices
                .iter()
                .filter(|d| d.is_online())
                .map(OnlineDevice::from)
                .collect(),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListOnlineDevicesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
