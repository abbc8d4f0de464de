//! # ServiceNow MCP
//!
//! A thin adapter exposing ServiceNow incidents and knowledge base
//! articles/categories as callable tools for MCP assistants.
//!
//! ## Features
//!
//! - **Incident tools**: create, update, comment on, resolve, and list
//!   incidents
//! - **Knowledge base tools**: create and list knowledge bases, categories,
//!   and articles; update and publish articles
//! - **Tool registry**: immutable name-to-definition mapping with explicit
//!   override slots for the name-aliased category tools
//! - **MCP support**: `rmcp` server handler serving the registry over stdio
//!
//! Every operation is a single synchronous round trip to the ServiceNow
//! Table API; the adapter holds no state beyond a shared HTTP client.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use servicenow_mcp::config::{AuthConfig, ServerConfig};
//! use servicenow_mcp::mcp::ServiceNowMcp;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::new(
//!     "https://dev309760.service-now.com",
//!     AuthConfig::basic("admin", "password"),
//! );
//! let server = ServiceNowMcp::new(&config)?;
//! println!("{} tools registered", server.registry().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Shared utilities
pub mod common;

/// Server configuration and credential types
pub mod config;

/// Unified error handling
pub mod error;

/// Incident operations against the Table API
pub mod incidents;

/// Knowledge base operations against the Table API
pub mod knowledge;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Authenticated HTTP transport
pub mod rest;

pub use config::ServerConfig;
pub use error::{Result, ServiceNowError};
pub use rest::RestClient;

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
