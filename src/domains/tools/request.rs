//! Typed tool requests.
//!
//! A tool call arrives as a name plus a loose JSON object. [`ToolRequest`]
//! turns that pair into one variant per tool before any handler runs, so
//! handlers only ever see validated parameters.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ToolError;
use super::definitions::{
    CheckUpdatesTool, DeviceSummaryTool, GetDeviceParams, GetDeviceTool, ListDevicesParams,
    ListDevicesTool, ListOfflineDevicesTool, ListOnlineDevicesTool,
};

/// A validated call to one of the catalog's tools.
#[derive(Debug, Clone)]
pub enum ToolRequest {
    ListDevices(ListDevicesParams),
    GetDevice(GetDeviceParams),
    ListOnlineDevices,
    ListOfflineDevices,
    CheckUpdates,
    DeviceSummary,
}

impl ToolRequest {
    /// Validate `arguments` against the tool called `name`.
    ///
    /// Absent arguments count as an empty object. Unknown keys are ignored.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        let args = arguments.unwrap_or_default();

        match name {
            ListDevicesTool::NAME => Ok(Self::ListDevices(from_args(args)?)),
            GetDeviceTool::NAME => {
                const KEY: &str = "deviceId";
                if matches!(args.get(KEY), None | Some(Value::Null)) {
                    return Err(ToolError::missing_argument(KEY));
                }
                let params: GetDeviceParams = from_args(args)?;
                if params.device_id.is_empty() {
                    return Err(ToolError::missing_argument(KEY));
                }
                Ok(Self::GetDevice(params))
            }
            ListOnlineDevicesTool::NAME => Ok(Self::ListOnlineDevices),
            ListOfflineDevicesTool::NAME => Ok(Self::ListOfflineDevices),
            CheckUpdatesTool::NAME => Ok(Self::CheckUpdates),
            DeviceSummaryTool::NAME => Ok(Self::DeviceSummary),
            _ => Err(ToolError::unknown_tool(name)),
        }
    }
}

fn from_args<T: DeserializeOwned>(args: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
