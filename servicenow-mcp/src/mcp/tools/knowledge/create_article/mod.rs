//! Knowledge article creation tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::CreateArticleParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for creating knowledge articles
#[derive(Default)]
pub struct CreateArticleTool;

impl CreateArticleTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for CreateArticleTool {
    fn name(&self) -> &'static str {
        "create_article"
    }

    fn description(&self) -> &'static str {
        "Create a new knowledge article"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Title of the article"
                },
                "short_description": {
                    "type": "string",
                    "description": "Short description of the article"
                },
                "text": {
                    "type": "string",
                    "description": "Body text of the article"
                },
                "knowledge_base": {
                    "type": "string",
                    "description": "Knowledge base (sys_id) the article belongs to"
                },
                "category": {
                    "type": "string",
                    "description": "Category (sys_id) the article belongs to"
                },
                "keywords": {
                    "type": "string",
                    "description": "Keywords for searching the article"
                },
                "article_type": {
                    "type": "string",
                    "description": "Type of article content",
                    "default": "text"
                }
            },
            "required": ["title", "short_description", "text", "knowledge_base", "category"]
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
        let params: CreateArticleParams = BaseToolImpl::parse_arguments(arguments)?;
        let record = knowledge::create_article(&context.client, params).await?;
        ToolOutput::model(&record)
    }
}
