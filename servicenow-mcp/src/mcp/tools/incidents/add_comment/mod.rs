//! Incident comment tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::incidents;
use crate::mcp::incident_types::AddCommentParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for adding comments and work notes to incidents
#[derive(Default)]
pub struct AddCommentTool;

impl AddCommentTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for AddCommentTool {
    fn name(&self) -> &'static str {
        "add_comment"
    }

    fn description(&self) -> &'static str {
        "Add a comment to an incident in ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "incident_id": {
                    "type": "string",
                    "description": "Incident number (INC...) or sys_id of the incident to comment on"
                },
                "comment": {
                    "type": "string",
                    "description": "The comment text"
                },
                "is_work_note": {
                    "type": "boolean",
                    "description": "Record the comment as an internal work note instead of a customer-visible comment",
                    "default": false
                }
            },
            "required": ["incident_id", "comment"]
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
        let params: AddCommentParams = BaseToolImpl::parse_arguments(arguments)?;
        let message = incidents::add_comment(&context.client, params).await?;
        Ok(ToolOutput::Text(message))
    }
}
