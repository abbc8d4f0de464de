//! Knowledge article publication tool

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::knowledge;
use crate::mcp::knowledge_types::PublishArticleParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ServiceNowTool, ToolContext};

/// Tool for publishing knowledge articles
#[derive(Default)]
pub struct PublishArticleTool;

impl PublishArticleTool {
    /// Creates a new instance of the tool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ServiceNowTool for PublishArticleTool {
    fn name(&self) -> &'static str {
        "publish_article"
    }

    fn description(&self) -> &'static str {
        "Publish a knowledge article"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "article_id": {
                    "type": "string",
                    "description": "Sys_id of the article to publish"
                },
                "workflow_state": {
                    "type": "string",
                    "description": "Target workflow state",
                    "default": "published"
                },
                "workflow_version": {
                    "type": "string",
                    "description": "Workflow version to use"
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
        let params: PublishArticleParams = BaseToolImpl::parse_arguments(arguments)?;
        let record = knowledge::publish_article(&context.client, params).await?;
        ToolOutput::model(&record)
    }
}
