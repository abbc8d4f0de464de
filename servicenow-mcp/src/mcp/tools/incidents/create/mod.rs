//! Incident creation tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::incidents;
use crate::mcp::incident_types::CreateIncidentParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for creating new incidents
#[derive(Default)]
pub struct CreateIncidentTool;

impl CreateIncidentTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for CreateIncidentTool {
    fn name(&self) -> &'static str {
        "create_incident"
    }

    fn description(&self) -> &'static str {
        "Create a new incident in ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "short_description": {
                    "type": "string",
                    "description": "Short description of the incident"
                },
                "description": {
                    "type": "string",
                    "description": "Detailed description of the incident"
                },
                "caller_id": {
                    "type": "string",
                    "description": "User who reported the incident (sys_id or user name)"
                },
                "category": {
                    "type": "string",
                    "description": "Category of the incident"
                },
                "subcategory": {
                    "type": "string",
                    "description": "Subcategory of the incident"
                },
                "priority": {
                    "type": "string",
                    "description": "Priority of the incident (1-5)"
                },
                "impact": {
                    "type": "string",
                    "description": "Impact of the incident (1-3)"
                },
                "urgency": {
                    "type": "string",
                    "description": "Urgency of the incident (1-3)"
                },
                "assigned_to": {
                    "type": "string",
                    "description": "User assigned to the incident"
                },
                "assignment_group": {
                    "type": "string",
                    "description": "Group assigned to the incident"
                }
            },
            "required": ["short_description"]
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
        let params: CreateIncidentParams = BaseToolImpl::parse_arguments(arguments)?;
        let message = incidents::create_incident(&context.client, params).await?;
        Ok(ToolOutput::Text(message))
    }
}
