//! Knowledge base listing tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::ListKnowledgeBasesParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for listing knowledge bases
#[derive(Default)]
pub struct ListKnowledgeBasesTool;

impl ListKnowledgeBasesTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for ListKnowledgeBasesTool {
    fn name(&self) -> &'static str {
        "list_knowledge_bases"
    }

    fn description(&self) -> &'static str {
        "List knowledge bases from ServiceNow"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of knowledge bases to return (1-100)",
                    "default": 10
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of knowledge bases to skip",
                    "default": 0
                },
                "active": {
                    "type": "boolean",
                    "description": "Filter by active status"
                },
                "query": {
                    "type": "string",
                    "description": "Free-text search over titles"
                }
            },
            "required": []
        })
    }

    fn serialization(&self) -> SerializationMode {
        SerializationMode::Structured
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, Value>,
        context: &ToolContext,
    ) -> Result<ToolOutput> {
        let params: ListKnowledgeBasesParams = BaseToolImpl::parse_arguments(arguments)?;
        let listing = knowledge::list_knowledge_bases(&context.client, params).await?;
        Ok(ToolOutput::Json(listing))
    }
}
