//! Device summary tool definition.
//!
//! Aggregates the inventory in a single pass: count per OS, online versus
//! offline, and pending updates.

use std::collections::BTreeMap;

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::devices::Device;

/// The tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DeviceSummaryParams {}

/// Aggregate counts over the tailnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub total_devices: usize,
    pub online: usize,
    pub offline: usize,
    pub updates_available: usize,
    #[serde(rename = "devicesByOS")]
    pub devices_by_os: BTreeMap<String, usize>,
}

pub struct DeviceSummaryTool;

impl DeviceSummaryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tailscale_device_summary";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a summary of devices by OS type, online/offline status, and update availability.";

    /// Execute the tool logic.
    pub fn execute(devices: &[Device]) -> DeviceSummary {
        let mut summary = DeviceSummary {
            total_devices: devices.len(),
            ..Default::default()
        };

        for device in devices {
            *summary.devices_by_os.entry(device.os.clone()).or_default() += 1;

            if device.is_online() {
                summary.online += 1;
            } else {
                summary.offline += 1;
            }

            if device.update_available {
                summary.updates_available += 1;
            }
        }

        summary
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeviceSummaryParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
