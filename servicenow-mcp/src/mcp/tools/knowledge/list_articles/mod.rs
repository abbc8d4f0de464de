//! Knowledge article listing tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::ListArticlesParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for listing knowledge articles
#[derive(Default)]
pub struct ListArticlesTool;

impl ListArticlesTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for ListArticlesTool {
    fn name(&self) -> &'static str {
        "list_articles"
    }

    fn description(&self) -> &'static str {
        "List knowledge articles"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of articles to return (1-100)",
                    "default": 10
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of articles to skip",
                    "default": 0
                },
                "knowledge_base": {
                    "type": "string",
                    "description": "Filter by knowledge base (sys_id)"
                },
                "category": {
                    "type": "string",
                    "description": "Filter by category (sys_id)"
                },
                "query": {
                    "type": "string",
                    "description": "Free-text search over short description and body"
                },
                "workflow_state": {
                    "type": "string",
                    "description": "Filter by workflow state (e.g. published, draft)"
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
        let params: ListArticlesParams = BaseToolImpl::parse_arguments(arguments)?;
        let listing = knowledge::list_articles(&context.client, params).await?;
        Ok(ToolOutput::Json(listing))
    }
}
