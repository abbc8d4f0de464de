//! Knowledge base management tools
//!
//! Tools covering knowledge bases, categories, and articles:
//!
//! - **create_knowledge_base** / **list_knowledge_bases**
//! - **create_category** / **list_categories** (override slots, see below)
//! - **create_article** / **update_article** / **publish_article**
//! - **list_articles** / **get_article**
//!
//! The two category tools are registered from
//! [`CategoryToolOverrides`](crate::mcp::tool_registry::CategoryToolOverrides)
//! slots rather than hardwired implementations, so the names stay stable
//! while the bound implementation remains visible at the registry call site.
//!
//! Mutation tools return the platform's canonical record as JSON text; list
//! and get tools pass a structured mapping through to the protocol layer.

pub mod create_article;
pub mod create_category;
pub mod create_knowledge_base;
pub mod get_article;
pub mod list_articles;
pub mod list_categories;
pub mod list_knowledge_bases;
pub mod publish_article;
pub mod update_article;

use crate::mcp::tool_registry::{CategoryToolOverrides, ToolRegistry};

/// Register all knowledge-base-related tools with the registry
pub fn register_knowledge_tools(registry: &mut ToolRegistry, overrides: CategoryToolOverrides) {
    registry.register(create_knowledge_base::CreateKnowledgeBaseTool::new());
    registry.register(list_knowledge_bases::ListKnowledgeBasesTool::new());
    registry.register(create_category::CreateCategoryTool::new(
        overrides.create_category,
    ));
    registry.register(list_categories::ListCategoriesTool::new(
        overrides.list_categories,
    ));
    registry.register(create_article::CreateArticleTool::new());
    registry.register(update_article::UpdateArticleTool::new());
    registry.register(publish_article::PublishArticleTool::new());
    registry.register(list_articles::ListArticlesTool::new());
    registry.register(get_article::GetArticleTool::new());
}
