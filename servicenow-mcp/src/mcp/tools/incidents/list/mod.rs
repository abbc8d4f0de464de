//! Incident listing tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::incidents;
use crate::mcp::incident_types::ListIncidentsParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for listing incidents
#[derive(Default)]
pub struct ListIncidentsTool;

impl ListIncidentsTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for ListIncidentsTool {
    fn name(&self) -> &'static str {
        "list_incidents"
    }

    fn description(&self) -> &'static str {
        "List incidents from ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of incidents to return (1-100)",
                    "default": 10
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of incidents to skip",
                    "default": 0
                },
                "state": {
                    "type": "string",
                    "description": "Filter by incident state"
                },
                "assigned_to": {
                    "type": "string",
                    "description": "Filter by assigned user"
                },
                "category": {
                    "type": "string",
                    "description": "Filter by category"
                },
                "query": {
                    "type": "string",
                    "description": "Free-text search over short description and description"
                }
            },
            "required": []
        })
    }

    fn serialization(&self) -> SerializationMode {
        SerializationMode::JsonText
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, Value>,
        context: &ToolContext,
    ) -> Result<ToolOutput> {
        let params: ListIncidentsParams = BaseToolImpl::parse_arguments(arguments)?;
        let listing = incidents::list_incidents(&context.client, params).await?;
        Ok(ToolOutput::Json(listing))
    }
}
