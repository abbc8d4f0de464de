//! Knowledge base operations against the ServiceNow Table API
//!
//! Covers knowledge bases (`kb_knowledge_base`), categories (`kb_category`),
//! and articles (`kb_knowledge`). Mutations return the platform's canonical
//! record; list operations return the uniform `{"result", "count", "limit",
//! "offset"}` envelope shared with the incident listing.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::{Result, ServiceNowError};
use crate::mcp::knowledge_types::{
    CreateArticleParams, CreateCategoryParams, CreateKnowledgeBaseParams, GetArticleParams,
    ListArticlesParams, ListCategoriesParams, ListKnowledgeBasesParams, PublishArticleParams,
    UpdateArticleParams,
};
use crate::rest::RestClient;

const KNOWLEDGE_BASE_TABLE: &str = "kb_knowledge_base";
const CATEGORY_TABLE: &str = "kb_category";
const ARTICLE_TABLE: &str = "kb_knowledge";

/// A knowledge base as returned by the Table API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KnowledgeBaseRecord {
    /// Unique record identifier
    pub sys_id: String,
    /// Knowledge base title
    #[serde(default)]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Owning user
    #[serde(default)]
    pub owner: String,
    /// Managing users
    #[serde(default)]
    pub kb_managers: String,
    /// Whether the knowledge base is active ("true"/"false")
    #[serde(default)]
    pub active: String,
}

/// A knowledge base category as returned by the Table API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryRecord {
    /// Unique record identifier
    pub sys_id: String,
    /// Category label
    #[serde(default)]
    pub label: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Knowledge base the category belongs to
    #[serde(default)]
    pub kb_knowledge_base: String,
    /// Parent category, empty for top-level categories
    #[serde(default)]
    pub parent_id: String,
    /// Whether the category is active ("true"/"false")
    #[serde(default)]
    pub active: String,
}

/// A knowledge article as returned by the Table API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Unique record identifier
    pub sys_id: String,
    /// Article number, e.g. `KB0010001`
    #[serde(default)]
    pub number: String,
    /// Display title of the article
    #[serde(default)]
    pub short_description: String,
    /// Body text
    #[serde(default)]
    pub text: String,
    /// Knowledge base the article belongs to
    #[serde(default)]
    pub kb_knowledge_base: String,
    /// Category the article belongs to
    #[serde(default)]
    pub kb_category: String,
    /// Publication workflow state, e.g. "draft" or "published"
    #[serde(default)]
    pub workflow_state: String,
}

fn base_query() -> Vec<(&'static str, String)> {
    vec![("sysparm_exclude_reference_link", "true".to_string())]
}

fn parse_record<T: serde::de::DeserializeOwned>(table: &str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ServiceNowError::unexpected(table, format!("record does not parse: {e}")))
}

fn parse_listing<T: serde::de::DeserializeOwned>(table: &str, value: Value) -> Result<Vec<T>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| parse_record(table, item))
            .collect(),
        _ => Err(ServiceNowError::unexpected(
            table,
            "expected an array of records",
        )),
    }
}

fn insert_opt(fields: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(v) = value {
        fields.insert(key.to_string(), Value::String(v));
    }
}

fn listing_envelope<T: Serialize>(records: Vec<T>, limit: u32, offset: u32) -> Value {
    let count = records.len();
    json!({
        "result": records,
        "count": count,
        "limit": limit,
        "offset": offset,
    })
}

/// Create a new knowledge base. Returns the created record.
pub async fn create_knowledge_base(
    client: &RestClient,
    params: CreateKnowledgeBaseParams,
) -> Result<KnowledgeBaseRecord> {
    params.validate()?;

    let mut fields = Map::new();
    fields.insert("title".to_string(), Value::String(params.title));
    insert_opt(&mut fields, "description", params.description);
    insert_opt(&mut fields, "owner", params.owner);
    insert_opt(&mut fields, "kb_managers", params.managers);
    insert_opt(&mut fields, "workflow_publish", params.publish_workflow);
    insert_opt(&mut fields, "workflow_retire", params.retire_workflow);

    let value = client
        .create_record(KNOWLEDGE_BASE_TABLE, Value::Object(fields), &base_query())
        .await?;
    let record: KnowledgeBaseRecord = parse_record(KNOWLEDGE_BASE_TABLE, value)?;
    info!(sys_id = %record.sys_id, "created knowledge base");
    Ok(record)
}

/// List knowledge bases matching the given filters.
pub async fn list_knowledge_bases(
    client: &RestClient,
    params: ListKnowledgeBasesParams,
) -> Result<Value> {
    params.validate()?;

    let mut parts = Vec::new();
    if let Some(active) = params.active {
        parts.push(format!("active={active}"));
    }
    if let Some(text) = &params.query {
        parts.push(format!("titleLIKE{text}"));
    }

    let mut query = base_query();
    query.push(("sysparm_limit", params.limit.to_string()));
    query.push(("sysparm_offset", params.offset.to_string()));
    if !parts.is_empty() {
        query.push(("sysparm_query", parts.join("^")));
    }

    let value = client.query_records(KNOWLEDGE_BASE_TABLE, &query).await?;
    let records: Vec<KnowledgeBaseRecord> = parse_listing(KNOWLEDGE_BASE_TABLE, value)?;
    Ok(listing_envelope(records, params.limit, params.offset))
}

/// Create a category in a knowledge base. Returns the created record.
pub async fn create_category(
    client: &RestClient,
    params: CreateCategoryParams,
) -> Result<CategoryRecord> {
    params.validate()?;

    let mut fields = Map::new();
    fields.insert("label".to_string(), Value::String(params.title));
    fields.insert(
        "kb_knowledge_base".to_string(),
        Value::String(params.knowledge_base),
    );
    fields.insert(
        "active".to_string(),
        Value::String(params.active.to_string()),
    );
    insert_opt(&mut fields, "description", params.description);
    insert_opt(&mut fields, "parent_id", params.parent_category);

    let value = client
        .create_record(CATEGORY_TABLE, Value::Object(fields), &base_query())
        .await?;
    let record: CategoryRecord = parse_record(CATEGORY_TABLE, value)?;
    info!(sys_id = %record.sys_id, "created category");
    Ok(record)
}

/// List categories matching the given filters.
pub async fn list_categories(client: &RestClient, params: ListCategoriesParams) -> Result<Value> {
    params.validate()?;

    let mut parts = Vec::new();
    if let Some(kb) = &params.knowledge_base {
        parts.push(format!("kb_knowledge_base={kb}"));
    }
    if let Some(parent) = &params.parent_category {
        parts.push(format!("parent_id={parent}"));
    }
    if let Some(active) = params.active {
        parts.push(format!("active={active}"));
    }
    if let Some(text) = &params.query {
        parts.push(format!("labelLIKE{text}"));
    }

    let mut query = base_query();
    query.push(("sysparm_limit", params.limit.to_string()));
    query.push(("sysparm_offset", params.offset.to_string()));
    if !parts.is_empty() {
        query.push(("sysparm_query", parts.join("^")));
    }

    let value = client.query_records(CATEGORY_TABLE, &query).await?;
    let records: Vec<CategoryRecord> = parse_listing(CATEGORY_TABLE, value)?;
    Ok(listing_envelope(records, params.limit, params.offset))
}

/// Create a knowledge article. Returns the created record.
pub async fn create_article(
    client: &RestClient,
    params: CreateArticleParams,
) -> Result<ArticleRecord> {
    params.validate()?;

    let mut fields = Map::new();
    fields.insert("short_description".to_string(), Value::String(params.title));
    fields.insert(
        "meta_description".to_string(),
        Value::String(params.short_description),
    );
    fields.insert("text".to_string(), Value::String(params.text));
    fields.insert(
        "kb_knowledge_base".to_string(),
        Value::String(params.knowledge_base),
    );
    fields.insert("kb_category".to_string(), Value::String(params.category));
    fields.insert(
        "article_type".to_string(),
        Value::String(params.article_type),
    );
    insert_opt(&mut fields, "meta", params.keywords);

    let value = client
        .create_record(ARTICLE_TABLE, Value::Object(fields), &base_query())
        .await?;
    let record: ArticleRecord = parse_record(ARTICLE_TABLE, value)?;
    info!(sys_id = %record.sys_id, "created article");
    Ok(record)
}

/// Update fields on an existing knowledge article. Returns the updated record.
pub async fn update_article(
    client: &RestClient,
    params: UpdateArticleParams,
) -> Result<ArticleRecord> {
    params.validate()?;

    let mut fields = Map::new();
    insert_opt(&mut fields, "short_description", params.title);
    insert_opt(&mut fields, "meta_description", params.short_description);
    insert_opt(&mut fields, "text", params.text);
    insert_opt(&mut fields, "kb_category", params.category);
    insert_opt(&mut fields, "meta", params.keywords);

    if fields.is_empty() {
        return Err(ServiceNowError::validation(
            "article_id",
            "no fields to update were provided",
        ));
    }

    let value = client
        .update_record(
            ARTICLE_TABLE,
            &params.article_id,
            Value::Object(fields),
            &base_query(),
        )
        .await?;
    let record: ArticleRecord = parse_record(ARTICLE_TABLE, value)?;
    info!(sys_id = %record.sys_id, "updated article");
    Ok(record)
}

/// Move a knowledge article to a publication workflow state. Returns the
/// updated record.
pub async fn publish_article(
    client: &RestClient,
    params: PublishArticleParams,
) -> Result<ArticleRecord> {
    params.validate()?;

    let mut fields = Map::new();
    fields.insert(
        "workflow_state".to_string(),
        Value::String(params.workflow_state),
    );
    insert_opt(&mut fields, "workflow_version", params.workflow_version);

    let value = client
        .update_record(
            ARTICLE_TABLE,
            &params.article_id,
            Value::Object(fields),
            &base_query(),
        )
        .await?;
    let record: ArticleRecord = parse_record(ARTICLE_TABLE, value)?;
    info!(sys_id = %record.sys_id, state = %record.workflow_state, "published article");
    Ok(record)
}

/// List knowledge articles matching the given filters.
pub async fn list_articles(client: &RestClient, params: ListArticlesParams) -> Result<Value> {
    params.validate()?;

    let mut parts = Vec::new();
    if let Some(kb) = &params.knowledge_base {
        parts.push(format!("kb_knowledge_base={kb}"));
    }
    if let Some(category) = &params.category {
        parts.push(format!("kb_category={category}"));
    }
    if let Some(state) = &params.workflow_state {
        parts.push(format!("workflow_state={state}"));
    }
    if let Some(text) = &params.query {
        parts.push(format!("short_descriptionLIKE{text}^ORtextLIKE{text}"));
    }

    let mut query = base_query();
    query.push(("sysparm_limit", params.limit.to_string()));
    query.push(("sysparm_offset", params.offset.to_string()));
    if !parts.is_empty() {
        query.push(("sysparm_query", parts.join("^")));
    }

    let value = client.query_records(ARTICLE_TABLE, &query).await?;
    let records: Vec<ArticleRecord> = parse_listing(ARTICLE_TABLE, value)?;
    Ok(listing_envelope(records, params.limit, params.offset))
}

/// Get a single knowledge article by sys_id.
///
/// Returns `{"result": article}` so the shape matches the listing envelope.
pub async fn get_article(client: &RestClient, params: GetArticleParams) -> Result<Value> {
    params.validate()?;

    let value = client
        .get_record(ARTICLE_TABLE, &params.article_id, &base_query())
        .await?;
    let record: ArticleRecord = parse_record(ARTICLE_TABLE, value)?;
    Ok(json!({ "result": record }))
}
