//! Response creation utilities for MCP tool calls

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};

use crate::mcp::serialization::WirePayload;

/// Create a success response for MCP tool calls
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Render a serialized tool payload as a tool-call result.
///
/// Structured payloads are emitted as JSON text; the MCP content model
/// carries text either way, the distinction matters to the registry contract
/// upstream of this point.
pub fn payload_response(payload: WirePayload) -> CallToolResult {
    match payload {
        WirePayload::Text(text) => create_success_response(text),
        WirePayload::Structured(map) => create_success_response(
            serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_text_payload_passes_through() {
        let result = payload_response(WirePayload::Text("done".to_string()));
        assert_eq!(result.is_error, Some(false));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "done"),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_structured_payload_renders_as_json() {
        let mut map = serde_json::Map::new();
        map.insert("result".to_string(), serde_json::json!([]));
        let result = payload_response(WirePayload::Structured(map));
        match &result.content[0].raw {
            RawContent::Text(text) => {
                let parsed: serde_json::Value = serde_json::from_str(&text.text).unwrap();
                assert!(parsed["result"].is_array());
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
