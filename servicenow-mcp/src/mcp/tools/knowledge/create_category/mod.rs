//! Category creation tool (override slot)
//!
//! The implementation function is bound at registry construction through
//! [`CategoryToolOverrides`](crate::mcp::tool_registry::CategoryToolOverrides)
//! rather than hardwired here.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::mcp::knowledge_types::CreateCategoryParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, CreateCategoryFn, ServiceNowTool, ToolContext};

/// Tool for creating categories in a knowledge base
pub struct CreateCategoryTool {
    implementation: CreateCategoryFn,
}

impl CreateCategoryTool {
    /// Creates the tool with the implementation bound to its slot
    pub fn new(implementation: CreateCategoryFn) -> Self {
        Self { implementation }
    }
}

#[async_trait]
impl ServiceNowTool for CreateCategoryTool {
    fn name(&self) -> &'static str {
        "create_category"
    }

    fn description(&self) -> &'static str {
        "Create a new category in a knowledge base"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Title of the category"
                },
                "knowledge_base": {
                    "type": "string",
                    "description": "Knowledge base (sys_id) the category belongs to"
                },
                "description": {
                    "type": "string",
                    "description": "Description of the category"
                },
                "parent_category": {
                    "type": "string",
                    "description": "Parent category (sys_id) for nested categories"
                },
                "active": {
                    "type": "boolean",
                    "description": "Whether the category is active",
                    "default": true
                }
            },
            "required": ["title", "knowledge_base"]
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
        let params: CreateCategoryParams = BaseToolImpl::parse_arguments(arguments)?;
        let record = (self.implementation)(context.client.clone(), params).await?;
        ToolOutput::model(&record)
    }
}
