//! Knowledge article update tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::UpdateArticleParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for updating knowledge articles
#[derive(Default)]
pub struct UpdateArticleTool;

impl UpdateArticleTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for UpdateArticleTool {
    fn name(&self) -> &'static str {
        "update_article"
    }

    fn description(&self) -> &'static str {
        "Update an existing knowledge article"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "article_id": {
                    "type": "string",
                    "description": "Sys_id of the article to update"
                },
                "title": {
                    "type": "string",
                    "description": "New title"
                },
                "short_description": {
                    "type": "string",
                    "description": "New short description"
                },
                "text": {
                    "type": "string",
                    "description": "New body text"
                },
                "category": {
                    "type": "string",
                    "description": "New category (sys_id)"
                },
                "keywords": {
                    "type": "string",
                    "description": "New keywords"
                }
            },
            "required": ["article_id"]
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
        let params: UpdateArticleParams = BaseToolImpl::parse_arguments(arguments)?;
        let record = knowledge::update_article(&context.client, params).await?;
        ToolOutput::model(&record)
    }
}
