//! Category listing tool (override slot)
//!
//! Like `create_category`, the implementation function is bound at registry
//! construction through the override slots.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::mcp::knowledge_types::ListCategoriesParams;
use crate::mcp::serialization::{SerializationMode, ToolOutput};
use crate::mcp::tool_registry::{BaseToolImpl, ListCategoriesFn, ServiceNowTool, ToolContext};

/// Tool for listing categories in a knowledge base
pub struct ListCategoriesTool {
    implementation: ListCategoriesFn,
}

impl ListCategoriesTool {
    /// Creates the tool with the implementation bound to its slot
    pub fn new(implementation: ListCategoriesFn) -> Self {
        Self { implementation }
    }
}

#[async_trait]
impl ServiceNowTool for ListCategoriesTool {
    fn name(&self) -> &'static str {
        "list_categories"
    }

    fn description(&self) -> &'static str {
        "List categories in a knowledge base"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "knowledge_base": {
                    "type": "string",
                    "description": "Filter by knowledge base (sys_id)"
                },
                "parent_category": {
                    "type": "string",
                    "description": "Filter by parent category (sys_id)"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of categories to return (1-100)",
                    "default": 10
                },
                "offset": {
                    "type": "integer",
                    "description": "Number of categories to skip",
                    "default": 0
                },
                "active": {
                    "type": "boolean",
                    "description": "Filter by active status"
                },
                "query": {
                    "type": "string",
                    "description": "Free-text search over category labels"
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
        let params: ListCategoriesParams = BaseToolImpl::parse_arguments(arguments)?;
        let listing = (self.implementation)(context.client.clone(), params).await?;
        Ok(ToolOutput::Json(listing))
    }
}
