//! Knowledge base creation tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::CreateKnowledgeBaseParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for creating new knowledge bases
#[derive(Default)]
pub struct CreateKnowledgeBaseTool;

impl CreateKnowledgeBaseTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for CreateKnowledgeBaseTool {
    fn name(&self) -> &'static str {
        "create_knowledge_base"
    }

    fn description(&self) -> &'static str {
        "Create a new knowledge base in ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Title of the knowledge base"
                },
                "description": {
                    "type": "string",
                    "description": "Description of the knowledge base"
                },
                "owner": {
                    "type": "string",
                    "description": "User who owns the knowledge base"
                },
                "managers": {
                    "type": "string",
                    "description": "Users who manage the knowledge base"
                },
                "publish_workflow": {
                    "type": "string",
                    "description": "Workflow applied when publishing articles"
                },
                "retire_workflow": {
                    "type": "string",
                    "description": "Workflow applied when retiring articles"
                }
            },
            "required": ["title"]
        })
    }

    fn serialization(&self) -> SerializationMode {
        SerializationMode::ModelJson
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, Value>,
        context: &ToolContext,
    ) -> Result<ToolOutput> {
        let params: CreateKnowledgeBaseParams = BaseToolImpl::parse_arguments(arguments)?;
        let record = knowledge::create_knowledge_base(&context.client, params).await?;
        ToolOutput::model(&record)
    }
}
