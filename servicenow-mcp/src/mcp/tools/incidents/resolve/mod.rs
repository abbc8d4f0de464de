//! Incident resolution tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::incidents;
use crate::mcp::incident_types::ResolveIncidentParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for resolving incidents
#[derive(Default)]
pub struct ResolveIncidentTool;

impl ResolveIncidentTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for ResolveIncidentTool {
    fn name(&self) -> &'static str {
        "resolve_incident"
    }

    fn description(&self) -> &'static str {
        "Resolve an incident in ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "incident_id": {
                    "type": "string",
                    "description": "Incident number (INC...) or sys_id of the incident to resolve"
                },
                "resolution_code": {
                    "type": "string",
                    "description": "Close code describing how the incident was resolved"
                },
                "resolution_notes": {
                    "type": "string",
                    "description": "Notes describing the resolution"
                }
            },
            "required": ["incident_id", "resolution_code", "resolution_notes"]
        })
    }

    fn serialization(&self) -> SerializationMode {
        SerializationMode::Text
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, Value>,
        context: &ToolContext,
    ) -> Result<ToolOutput> {
        let params: ResolveIncidentParams = BaseToolImpl::parse_arguments(arguments)?;
        let message = incidents::resolve_incident(&context.client, params).await?;
        Ok(ToolOutput::Text(message))
    }
}
