//! Helpers shared by the device tools: list output and result envelopes.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::domains::tools::ToolError;

/// `{total, devices}` payload returned by the listing tools.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceList<T> {
    pub total: usize,
    pub devices: Vec<T>,
}

impl<T> DeviceList<T> {
    pub fn new(devices: Vec<T>) -> Self {
        Self {
            total: devices.len(),
            devices,
        }
    }
}

/// Wrap a tool payload as pretty-printed JSON text.
pub fn success_result<T: Serialize>(output: &T) -> Result<CallToolResult, ToolError> {
    let value = serde_json::to_value(output)?;
    Ok(CallToolResult::success(vec![Content::text(format!("{:#}", value))]))
}

/// Wrap a failure as `{"error": "..."}` with `isError` set.
pub fn error_result(error: &ToolError) -> CallToolResult {
    let body = serde_json::json!({ "error": error.to_string() });
    CallToolResult::error(vec![Content::text(format!("{:#}", body))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_device_list_counts() {
        let list = DeviceList::new(vec!["a", "b", "c"]);
        assert_eq!(list.total, 3);
    }

    #[test]
    fn test_success_result_is_pretty_json() {
        let result = success_result(&DeviceList::new(vec![1, 2])).unwrap();
        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert!(text.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, serde_json::json!({ "total": 2, "devices": [1, 2] }));
    }

    #[test]
    fn test_error_result_shape() {
        let result = error_result(&ToolError::unknown_tool("bogus"));
        assert_eq!(result.is_error, Some(true));
        let parsed: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(parsed, serde_json::json!({ "error": "Unknown tool: bogus" }));
    }
}
