//! Knowledge article retrieval tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::GetArticleParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for fetching a single knowledge article
#[derive(Default)]
pub struct GetArticleTool;

impl GetArticleTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for GetArticleTool {
    fn name(&self) -> &'static str {
        "get_article"
    }

    fn description(&self) -> &'static str {
        "Get a specific knowledge article by ID"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "article_id": {
                    "type": "string",
                    "description": "Sys_id of the article to retrieve"
                }
            },
            "required": ["article_id"]
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
        let params: GetArticleParams = BaseToolImpl::parse_arguments(arguments)?;
        let article = knowledge::get_article(&context.client, params).await?;
        Ok(ToolOutput::Json(article))
    }
}
