//! Model Context Protocol (MCP) surface for the ServiceNow adapter
//!
//! This module holds the registry contract and everything the dispatcher
//! consumes: parameter types, tool implementations, the registry itself, and
//! the `rmcp` server handler that performs lookup, validation, invocation,
//! and output serialization.

pub mod error_handling;
pub mod incident_types;
pub mod knowledge_types;
pub mod responses;
pub mod serialization;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

pub use serialization::{SerializationMode, ToolOutput, WirePayload};
pub use server::ServiceNowMcp;
pub use tool_registry::{
    get_tool_definitions, CategoryToolOverrides, ServiceNowTool, ToolContext, ToolRegistry,
};
