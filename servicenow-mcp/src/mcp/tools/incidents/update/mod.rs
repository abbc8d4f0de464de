//! Incident update tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::incidents;
use crate::mcp::incident_types::UpdateIncidentParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for updating existing incidents
#[derive(Default)]
pub struct UpdateIncidentTool;

impl UpdateIncidentTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for UpdateIncidentTool {
    fn name(&self) -> &'static str {
        "update_incident"
    }

    fn description(&self) -> &'static str {
        "Update an existing incident in ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "incident_id": {
                    "type": "string",
                    "description": "Incident number (INC...) or sys_id of the incident to update"
                },
                "short_description": {
                    "type": "string",
                    "description": "New short description"
                },
                "description": {
                    "type": "string",
                    "description": "New detailed description"
                },
                "state": {
                    "type": "string",
                    "description": "New state of the incident"
                },
                "category": {
                    "type": "string",
                    "description": "New category"
                },
                "priority": {
                    "type": "string",
                    "description": "New priority (1-5)"
                },
                "impact": {
                    "type": "string",
                    "description": "New impact (1-3)"
                },
                "urgency": {
                    "type": "string",
                    "description": "New urgency (1-3)"
                },
                "assigned_to": {
                    "type": "string",
                    "description": "User to assign the incident to"
                },
                "assignment_group": {
                    "type": "string",
                    "description": "Group to assign the incident to"
                },
                "work_notes": {
                    "type": "string",
                    "description": "Work notes to add to the incident"
                },
                "close_notes": {
                    "type": "string",
                    "description": "Close notes, when closing the incident"
                },
                "close_code": {
                    "type": "string",
                    "description": "Close code, when closing the incident"
                }
            },
            "required": ["incident_id"]
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
        let params: UpdateIncidentParams = BaseToolImpl::parse_arguments(arguments)?;
        let message = incidents::update_incident(&context.client, params).await?;
        Ok(ToolOutput::Text(message))
    }
}
