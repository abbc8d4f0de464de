//! Tool registry for MCP operations
//!
//! The registry maps stable tool names to [`ServiceNowTool`] definitions:
//! implementation, parameter schema, description, and serialization mode.
//! It is built once at server startup through [`get_tool_definitions`] and
//! never mutated afterwards.
//!
//! The two knowledge-base category tools are name-aliased slots: their
//! implementations are passed into [`get_tool_definitions`] through
//! [`CategoryToolOverrides`] instead of being hardwired, keeping the
//! substitution visible at the call site.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use rmcp::model::Tool;
use serde_json::Value;

use super::serialization::{SerializationMode, ToolOutput};
use crate::error::{Result, ServiceNowError};
use crate::knowledge::{self, CategoryRecord};
use crate::mcp::knowledge_types::{CreateCategoryParams, ListCategoriesParams};
use crate::rest::RestClient;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// Authenticated transport to the ServiceNow instance
    pub client: Arc<RestClient>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

/// Trait defining the interface for all ServiceNow tools
#[async_trait::async_trait]
pub trait ServiceNowTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> Value;

    /// How the tool's raw output is converted to its wire representation
    fn serialization(&self) -> SerializationMode;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, Value>,
        context: &ToolContext,
    ) -> Result<ToolOutput>;
}

/// Registry for managing ServiceNow tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn ServiceNowTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: ServiceNowTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), Box::new(tool)).is_some() {
            tracing::warn!("tool '{name}' registered twice, keeping the latest registration");
        }
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn ServiceNowTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as Tool objects for the MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed parameter struct.
    ///
    /// Unknown fields are rejected by the parameter types themselves; the
    /// resulting error names the offending field.
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, Value>,
    ) -> Result<T> {
        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ServiceNowError::validation("arguments", e.to_string()))
    }
}

/// Implementation slot for the `create_category` tool
pub type CreateCategoryFn = Arc<
    dyn Fn(Arc<RestClient>, CreateCategoryParams) -> BoxFuture<'static, Result<CategoryRecord>>
        + Send
        + Sync,
>;

/// Implementation slot for the `list_categories` tool
pub type ListCategoriesFn = Arc<
    dyn Fn(Arc<RestClient>, ListCategoriesParams) -> BoxFuture<'static, Result<Value>>
        + Send
        + Sync,
>;

/// Override implementations for the name-aliased category tools.
///
/// `create_category` and `list_categories` collide conceptually with the
/// generic catalog tools of other ServiceNow surfaces, so their
/// implementations are bound at registry construction instead of being
/// hardwired. [`Default`] binds the knowledge-base implementations from
/// [`crate::knowledge`].
#[derive(Clone)]
pub struct CategoryToolOverrides {
    /// Implementation bound to the `create_category` tool
    pub create_category: CreateCategoryFn,
    /// Implementation bound to the `list_categories` tool
    pub list_categories: ListCategoriesFn,
}

impl Default for CategoryToolOverrides {
    fn default() -> Self {
        Self {
            create_category: Arc::new(|client, params| {
                Box::pin(async move { knowledge::create_category(&client, params).await })
            }),
            list_categories: Arc::new(|client, params| {
                Box::pin(async move { knowledge::list_categories(&client, params).await })
            }),
        }
    }
}

/// Build the full tool registry.
///
/// This is the sole public entry point for obtaining tool definitions: all
/// incident and knowledge base tools are registered, with the category slots
/// bound to the implementations in `overrides`.
pub fn get_tool_definitions(overrides: CategoryToolOverrides) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    crate::mcp::tools::incidents::register_incident_tools(&mut registry);
    crate::mcp::tools::knowledge::register_knowledge_tools(&mut registry, overrides);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, ServerConfig};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock tool for testing
    struct MockTool {
        name: &'static str,
        description: &'static str,
    }

    #[async_trait::async_trait]
    impl ServiceNowTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            self.description
        }

        fn schema(&self) -> Value {
            serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            })
        }

        fn serialization(&self) -> SerializationMode {
            SerializationMode::Text
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, Value>,
            _context: &ToolContext,
        ) -> Result<ToolOutput> {
            Ok(ToolOutput::Text(format!("Mock tool {} executed", self.name)))
        }
    }

    fn test_context() -> ToolContext {
        let config = ServerConfig::new(
            "https://example.service-now.com",
            AuthConfig::basic("admin", "secret"),
        );
        ToolContext::new(Arc::new(RestClient::new(&config).unwrap()))
    }

    #[test]
    fn test_tool_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_tool_registration_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        assert_eq!(registry.len(), 1);
        let tool = registry.get_tool("test_tool").unwrap();
        assert_eq!(tool.name(), "test_tool");
        assert_eq!(tool.description(), "A test tool");
        assert!(registry.get_tool("nonexistent").is_none());
    }

    #[test]
    fn test_list_tools_exposes_schemas() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool {
            name: "test_tool",
            description: "A test tool",
        });

        let tools = registry.list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "test_tool");
        assert!(tools[0].input_schema.contains_key("type"));
    }

    #[test]
    fn test_registry_census() {
        let registry = get_tool_definitions(CategoryToolOverrides::default());
        let mut names = registry.list_tool_names();
        names.sort();
        assert_eq!(
            names,
            vec![
                "add_comment",
                "create_article",
                "create_category",
                "create_incident",
                "create_knowledge_base",
                "get_article",
                "list_articles",
                "list_categories",
                "list_incidents",
                "list_knowledge_bases",
                "publish_article",
                "resolve_incident",
                "update_article",
                "update_incident",
            ]
        );
    }

    #[tokio::test]
    async fn test_category_override_routes_to_stub() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_seen = calls.clone();
        let overrides = CategoryToolOverrides {
            create_category: Arc::new(move |_client, params| {
                let calls = calls_seen.clone();
                Box::pin(async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(CategoryRecord {
                        sys_id: "stub001".to_string(),
                        label: params.title,
                        description: String::new(),
                        kb_knowledge_base: params.knowledge_base,
                        parent_id: String::new(),
                        active: "true".to_string(),
                    })
                })
            }),
            ..Default::default()
        };

        let registry = get_tool_definitions(overrides);
        let tool = registry.get_tool("create_category").unwrap();
        let mut arguments = serde_json::Map::new();
        arguments.insert("title".to_string(), Value::String("Network".to_string()));
        arguments.insert(
            "knowledge_base".to_string(),
            Value::String("kb001".to_string()),
        );

        let output = tool.execute(arguments, &test_context()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        match output {
            ToolOutput::Model(value) => assert_eq!(value["sys_id"], "stub001"),
            other => panic!("expected model output, got {other:?}"),
        }
    }

    #[test]
    fn test_base_tool_impl_parse_arguments() {
        use serde::Deserialize;

        #[derive(Deserialize, PartialEq, Debug)]
        struct TestArgs {
            name: String,
            count: Option<i32>,
        }

        let mut args = serde_json::Map::new();
        args.insert("name".to_string(), Value::String("test".to_string()));
        args.insert(
            "count".to_string(),
            Value::Number(serde_json::Number::from(42)),
        );

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.count, Some(42));
    }

    #[test]
    fn test_base_tool_impl_parse_arguments_missing_field() {
        use serde::Deserialize;

        #[derive(Deserialize, Debug)]
        struct TestArgs {
            #[serde(rename = "required_field")]
            _required_field: String,
        }

        let result: Result<TestArgs> = BaseToolImpl::parse_arguments(serde_json::Map::new());
        assert!(matches!(
            result.unwrap_err(),
            ServiceNowError::Validation { .. }
        ));
    }
}
