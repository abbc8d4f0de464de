//! MCP tool implementations, grouped by ServiceNow resource
//!
//! Each tool lives in its own submodule with a dedicated `ServiceNowTool`
//! implementation. Per-group registration functions are consumed by
//! [`crate::mcp::tool_registry::get_tool_definitions`].

pub mod incidents;
pub mod knowledge;
