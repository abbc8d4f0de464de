//! Output serialization for registered tools
//!
//! Every registered tool declares a [`SerializationMode`] describing how its
//! raw [`ToolOutput`] is converted to the wire representation the dispatcher
//! returns. The mode must match what the implementation actually returns; a
//! mismatch is a registry defect and fails loudly rather than producing a
//! best-effort payload.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ServiceNowError};

/// How a tool's raw output is converted to its wire representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationMode {
    /// The implementation returns a plain string, passed through unchanged
    Text,
    /// The implementation returns a JSON value, serialized to a JSON-encoded string
    JsonText,
    /// The implementation returns a typed record, emitted as a JSON object string
    ModelJson,
    /// The implementation returns a plain JSON object, passed through as a mapping
    Structured,
}

/// Raw value produced by a tool implementation, before serialization
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// A human-readable confirmation message
    Text(String),
    /// An arbitrary JSON value (listing envelopes, raw mappings)
    Json(Value),
    /// A typed record converted to its JSON representation
    Model(Value),
}

impl ToolOutput {
    /// Wrap a serializable record as [`ToolOutput::Model`].
    pub fn model<T: Serialize>(record: &T) -> Result<Self> {
        Ok(ToolOutput::Model(serde_json::to_value(record)?))
    }

    fn kind(&self) -> &'static str {
        match self {
            ToolOutput::Text(_) => "text",
            ToolOutput::Json(_) => "json value",
            ToolOutput::Model(_) => "model record",
        }
    }
}

/// Serialized payload handed back to the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub enum WirePayload {
    /// Plain or JSON-encoded text
    Text(String),
    /// A structured mapping, passed through for the protocol layer to render
    Structured(serde_json::Map<String, Value>),
}

impl SerializationMode {
    fn expects(&self) -> &'static str {
        match self {
            SerializationMode::Text => "text",
            SerializationMode::JsonText => "json value",
            SerializationMode::ModelJson => "model record",
            SerializationMode::Structured => "json object",
        }
    }

    /// Convert a tool's raw output into its wire representation.
    ///
    /// Fails with [`ServiceNowError::SerializationMismatch`] when the output
    /// variant is not the one this mode was registered for.
    pub fn serialize(&self, tool: &str, output: ToolOutput) -> Result<WirePayload> {
        let mismatch = |output: &ToolOutput| ServiceNowError::SerializationMismatch {
            tool: tool.to_string(),
            expected: self.expects(),
            actual: output.kind(),
        };

        match (self, output) {
            (SerializationMode::Text, ToolOutput::Text(text)) => Ok(WirePayload::Text(text)),
            (SerializationMode::JsonText, ToolOutput::Json(value)) => {
                Ok(WirePayload::Text(serde_json::to_string(&value)?))
            }
            (SerializationMode::ModelJson, ToolOutput::Model(value)) => match value {
                Value::Object(_) => Ok(WirePayload::Text(serde_json::to_string(&value)?)),
                _ => Err(ServiceNowError::SerializationMismatch {
                    tool: tool.to_string(),
                    expected: "json object",
                    actual: "non-object model value",
                }),
            },
            (SerializationMode::Structured, ToolOutput::Json(Value::Object(map))) => {
                Ok(WirePayload::Structured(map))
            }
            (_, output) => Err(mismatch(&output)),
        }
    }
}
