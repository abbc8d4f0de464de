//! Request types for knowledge base MCP operations
//!
//! Covers knowledge bases, categories, and articles. Unknown fields supplied
//! by a caller are rejected on every request type, matching the incident
//! types.

use serde::{Deserialize, Serialize};

use super::types::{default_limit, default_true, require_non_empty, validate_limit};
use crate::error::Result;

fn default_article_type() -> String {
    "text".to_string()
}

fn default_workflow_state() -> String {
    "published".to_string()
}

/// Request to create a new knowledge base
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateKnowledgeBaseParams {
    /// Title of the knowledge base
    pub title: String,
    /// Description of the knowledge base
    pub description: Option<String>,
    /// User who owns the knowledge base
    pub owner: Option<String>,
    /// Users who manage the knowledge base
    pub managers: Option<String>,
    /// Workflow applied when publishing articles
    pub publish_workflow: Option<String>,
    /// Workflow applied when retiring articles
    pub retire_workflow: Option<String>,
}

impl CreateKnowledgeBaseParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)
    }
}

/// Request to list knowledge bases
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListKnowledgeBasesParams {
    /// Maximum number of knowledge bases to return (1-100, default 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of knowledge bases to skip (default 0)
    #[serde(default)]
    pub offset: u32,
    /// Filter by active status
    pub active: Option<bool>,
    /// Free-text search over titles
    pub query: Option<String>,
}

impl Default for ListKnowledgeBasesParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
            active: None,
            query: None,
        }
    }
}

impl ListKnowledgeBasesParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.limit)
    }
}

/// Request to create a category in a knowledge base
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCategoryParams {
    /// Title of the category
    pub title: String,
    /// Knowledge base (sys_id) the category belongs to
    pub knowledge_base: String,
    /// Description of the category
    pub description: Option<String>,
    /// Parent category (sys_id) for nested categories
    pub parent_category: Option<String>,
    /// Whether the category is active (default true)
    #[serde(default = "default_true")]
    pub active: bool,
}

impl CreateCategoryParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)?;
        require_non_empty("knowledge_base", &self.knowledge_base)
    }
}

/// Request to list categories in a knowledge base
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListCategoriesParams {
    /// Filter by knowledge base (sys_id)
    pub knowledge_base: Option<String>,
    /// Filter by parent category (sys_id)
    pub parent_category: Option<String>,
    /// Maximum number of categories to return (1-100, default 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of categories to skip (default 0)
    #[serde(default)]
    pub offset: u32,
    /// Filter by active status
    pub active: Option<bool>,
    /// Free-text search over category labels
    pub query: Option<String>,
}

impl Default for ListCategoriesParams {
    fn default() -> Self {
        Self {
            knowledge_base: None,
            parent_category: None,
            limit: default_limit(),
            offset: 0,
            active: None,
            query: None,
        }
    }
}

impl ListCategoriesParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.limit)
    }
}

/// Request to create a knowledge article
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateArticleParams {
    /// Title of the article
    pub title: String,
    /// Short description of the article
    pub short_description: String,
    /// Body text of the article
    pub text: String,
    /// Knowledge base (sys_id) the article belongs to
    pub knowledge_base: String,
    /// Category (sys_id) the article belongs to
    pub category: String,
    /// Keywords for searching the article
    pub keywords: Option<String>,
    /// Type of article content (default "text")
    #[serde(default = "default_article_type")]
    pub article_type: String,
}

impl CreateArticleParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("title", &self.title)?;
        require_non_empty("short_description", &self.short_description)?;
        require_non_empty("text", &self.text)?;
        require_non_empty("knowledge_base", &self.knowledge_base)?;
        require_non_empty("category", &self.category)
    }
}

/// Request to update a knowledge article
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateArticleParams {
    /// Sys_id of the article to update
    pub article_id: String,
    /// New title
    pub title: Option<String>,
    /// New short description
    pub short_description: Option<String>,
    /// New body text
    pub text: Option<String>,
    /// New category (sys_id)
    pub category: Option<String>,
    /// New keywords
    pub keywords: Option<String>,
}

impl UpdateArticleParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("article_id", &self.article_id)
    }
}

/// Request to publish a knowledge article
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PublishArticleParams {
    /// Sys_id of the article to publish
    pub article_id: String,
    /// Target workflow state (default "published")
    #[serde(default = "default_workflow_state")]
    pub workflow_state: String,
    /// Workflow version to use
    pub workflow_version: Option<String>,
}

impl PublishArticleParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("article_id", &self.article_id)?;
        require_non_empty("workflow_state", &self.workflow_state)
    }
}

/// Request to list knowledge articles
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListArticlesParams {
    /// Maximum number of articles to return (1-100, default 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of articles to skip (default 0)
    #[serde(default)]
    pub offset: u32,
    /// Filter by knowledge base (sys_id)
    pub knowledge_base: Option<String>,
    /// Filter by category (sys_id)
    pub category: Option<String>,
    /// Free-text search over short description and body
    pub query: Option<String>,
    /// Filter by workflow state (e.g. "published", "draft")
    pub workflow_state: Option<String>,
}

impl Default for ListArticlesParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
            knowledge_base: None,
            category: None,
            query: None,
            workflow_state: None,
        }
    }
}

impl ListArticlesParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.limit)
    }
}

/// Request to get a knowledge article by sys_id
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetArticleParams {
    /// Sys_id of the article to retrieve
    pub article_id: String,
}

impl GetArticleParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("article_id", &self.article_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_params_defaults_active() {
        let params: CreateCategoryParams = serde_json::from_value(serde_json::json!({
            "title": "Network",
            "knowledge_base": "kb001"
        }))
        .unwrap();
        assert!(params.active);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_create_article_params_defaults_type() {
        let params: CreateArticleParams = serde_json::from_value(serde_json::json!({
            "title": "Restarting the VPN",
            "short_description": "VPN restart steps",
            "text": "1. Turn it off. 2. Turn it on.",
            "knowledge_base": "kb001",
            "category": "cat001"
        }))
        .unwrap();
        assert_eq!(params.article_type, "text");
    }

    #[test]
    fn test_create_article_params_missing_required() {
        let result: std::result::Result<CreateArticleParams, _> =
            serde_json::from_value(serde_json::json!({"title": "Restarting the VPN"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_publish_article_params_default_state() {
        let params: PublishArticleParams =
            serde_json::from_value(serde_json::json!({"article_id": "art001"})).unwrap();
        assert_eq!(params.workflow_state, "published");
    }

    #[test]
    fn test_list_articles_params_defaults() {
        let params: ListArticlesParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 0);
    }

    #[test]
    fn test_list_articles_params_rejects_unknown_field() {
        let result: std::result::Result<ListArticlesParams, _> =
            serde_json::from_value(serde_json::json!({"page": 2}));
        assert!(result.is_err());
    }

    #[test]
    fn test_get_article_params_rejects_empty_id() {
        let params = GetArticleParams {
            article_id: "".to_string(),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_article_params_round_trip() {
        let params = UpdateArticleParams {
            article_id: "art001".to_string(),
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: UpdateArticleParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.article_id, params.article_id);
        assert_eq!(back.title, params.title);
    }
}
