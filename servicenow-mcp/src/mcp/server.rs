//! MCP server implementation exposing the ServiceNow tool registry
//!
//! The server is the dispatch layer of the registry contract: look the tool
//! up by name, let it parse and validate its arguments, invoke it, then
//! serialize the raw output per the tool's registered mode.

use std::sync::Arc;

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};

use super::error_handling::McpErrorHandler;
use super::responses::payload_response;
use super::tool_registry::{get_tool_definitions, CategoryToolOverrides, ToolContext, ToolRegistry};
use crate::config::ServerConfig;
use crate::error::Result;
use crate::rest::RestClient;

/// MCP server for ServiceNow incident and knowledge base tools
#[derive(Clone)]
pub struct ServiceNowMcp {
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl ServiceNowMcp {
    /// Create a server with the default tool set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        Self::with_overrides(config, CategoryToolOverrides::default())
    }

    /// Create a server with custom category tool implementations.
    pub fn with_overrides(config: &ServerConfig, overrides: CategoryToolOverrides) -> Result<Self> {
        let client = Arc::new(RestClient::new(config)?);
        let registry = get_tool_definitions(overrides);
        tracing::info!(
            instance = %client.base_url(),
            tools = registry.len(),
            "initialized ServiceNow tool registry"
        );
        Ok(Self {
            tool_registry: Arc::new(registry),
            tool_context: Arc::new(ToolContext::new(client)),
        })
    }

    /// Access the underlying tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }
}

impl ServerHandler for ServiceNowMcp {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let Some(tool) = self.tool_registry.get_tool(&request.name) else {
            return Err(McpError::invalid_request(
                format!("Unknown tool: {}", request.name),
                None,
            ));
        };

        let output = tool
            .execute(request.arguments.unwrap_or_default(), &self.tool_context)
            .await
            .map_err(|e| McpErrorHandler::handle_error(e, tool.name()))?;

        let payload = tool
            .serialization()
            .serialize(tool.name(), output)
            .map_err(|e| McpErrorHandler::handle_error(e, tool.name()))?;

        Ok(payload_response(payload))
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: "servicenow-mcp".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(
                "ServiceNow incident and knowledge base tools. Use create_incident, \
                 update_incident, add_comment, resolve_incident and list_incidents to manage \
                 incidents. Use the knowledge base tools to create and organize knowledge \
                 bases, categories and articles."
                    .into(),
            ),
        }
    }
}
