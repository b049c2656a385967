//! List devices tool definition.
//!
//! Returns every device in the tailnet, optionally projected down to a
//! caller-chosen set of fields.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::common::DeviceList;
use crate::domains::devices::Device;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list devices tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDevicesParams {
    /// Fields to keep on each device. Unknown names are ignored.
    #[schemars(
        description = "Optional: Specific fields to return (e.g., ['name', 'addresses', 'os']). If not specified, returns all fields."
    )]
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List devices tool - full inventory with optional field projection.
pub struct ListDevicesTool;

impl ListDevicesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "tailscale_list_devices";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all devices in your Tailscale network (tailnet). Shows device name, hostname, IP addresses, OS, connection status, and more.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(count = devices.len()))]
    pub fn execute(
        devices: Vec<Device>,
        params: &ListDevicesParams,
    ) -> Result<DeviceList<Value>, ToolError> {
        let entries: Vec<Value> = match params.fields.as_deref() {
            Some(fields) if !fields.is_empty() => {
                debug!("Projecting devices to {:?}", fields);
                devices
                    .iter()
                    .map(|device| Value::Object(project(device, fields)))
                    .collect()
            }
            _ => devices
                .into_iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(DeviceList::new(entries))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListDevicesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Keep only the requested fields the device carries, typed or untyped.
fn project(device: &Device, fields: &[String]) -> Map<String, Value> {
    fields
        .iter()
        .filter_map(|name| device.field(name).map(|value| (name.clone(), value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialized key count of a device with no untyped upstream keys.
    const TYPED_FIELD_COUNT: usize = 16;

    fn devices() -> Vec<Device> {
        vec![
            Device {
                id: "1".into(),
                name: "a.ts.net".into(),
                hostname: "a".into(),
                os: "linux".into(),
                addresses: vec!["100.64.0.1".into()],
                ..Default::default()
            },
            Device {
                id: "2".into(),
                name: "b.ts.net".into(),
                hostname: "b".into(),
                os: "windows".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_params_fields_optional() {
        let params: ListDevicesParams = serde_json::from_str("{}").unwrap();
        assert!(params.fields.is_none());
    }

    #[test]
    fn test_full_devices_without_fields() {
        let out = ListDevicesTool::execute(devices(), &ListDevicesParams::default()).unwrap();
        assert_eq!(out.total, 2);
        let first = out.devices[0].as_object().unwrap();
        assert_eq!(first.len(), TYPED_FIELD_COUNT);
        assert_eq!(first["hostname"], "a");
    }

    #[test]
    fn test_empty_fields_means_full_devices() {
        let params = ListDevicesParams { fields: Some(vec![]) };
        let out = ListDevicesTool::execute(devices(), &params).unwrap();
        assert_eq!(out.devices[1].as_object().unwrap().len(), TYPED_FIELD_COUNT);
    }

    #[test]
    fn test_projection_keeps_exactly_requested_keys() {
        let params = ListDevicesParams {
            fields: Some(vec!["name".into(), "os".into()]),
        };
        let out = ListDevicesTool::execute(devices(), &params).unwrap();
        assert_eq!(out.total, 2);
        for device in &out.devices {
            let keys: Vec<_> = device.as_object().unwrap().keys().cloned().collect();
            assert_eq!(keys.len(), 2);
            assert!(keys.contains(&"name".to_string()));
            assert!(keys.contains(&"os".to_string()));
        }
        assert_eq!(out.devices[1]["os"], "windows");
    }

    #[test]
    fn test_projection_drops_unknown_fields() {
        let params = ListDevicesParams {
            fields: Some(vec!["addresses".into(), "tags".into(), "bogus".into()]),
        };
        let out = ListDevicesTool::execute(devices(), &params).unwrap();
        let first = out.devices[0].as_object().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first["addresses"], serde_json::json!(["100.64.0.1"]));
    }

    #[test]
    fn test_projection_only_unknown_fields_yields_empty_objects() {
        let params = ListDevicesParams {
            fields: Some(vec!["bogus".into()]),
        };
        let out = ListDevicesTool::execute(devices(), &params).unwrap();
        assert_eq!(out.total, 2);
        assert!(out.devices.iter().all(|d| d.as_object().unwrap().is_empty()));
    }

    #[test]
    fn test_untyped_keys_kept_and_projectable() {
        let mut tagged = devices();
        tagged[0]
            .extra
            .insert("tags".into(), serde_json::json!(["tag:prod"]));

        let out = ListDevicesTool::execute(tagged.clone(), &ListDevicesParams::default()).unwrap();
        let first = out.devices[0].as_object().unwrap();
        assert_eq!(first.len(), TYPED_FIELD_COUNT + 1);
        assert_eq!(first["tags"], serde_json::json!(["tag:prod"]));

        let params = ListDevicesParams {
            fields: Some(vec!["hostname".into(), "tags".into()]),
        };
        let out = ListDevicesTool::execute(tagged, &params).unwrap();
        assert_eq!(out.devices[0]["tags"], serde_json::json!(["tag:prod"]));
        assert_eq!(out.devices[1].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_to_tool_schema_has_fields() {
        let tool = ListDevicesTool::to_tool();
        assert_eq!(tool.name, ListDevicesTool::NAME);
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("fields").is_some());
    }
}
