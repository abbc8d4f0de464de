//! Error mapping for MCP operations
//!
//! Converts [`ServiceNowError`] values into MCP protocol errors with a
//! consistent policy: caller mistakes map to parameter errors, remote 4xx
//! statuses to request errors, everything else to internal errors. The
//! original error text is preserved so failures are diagnosable without
//! re-running with verbose logging.

use rmcp::Error as McpError;

use crate::error::ServiceNowError;

/// Common error handling for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert a ServiceNowError to the appropriate MCP error response.
    pub fn handle_error(error: ServiceNowError, operation: &str) -> McpError {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);

        match &error {
            ServiceNowError::Validation { .. } => McpError::invalid_params(error.to_string(), None),
            ServiceNowError::RemoteOperation { status, .. } if (400u16..500).contains(status) => {
                McpError::invalid_request(format!("{operation}: {error}"), None)
            }
            _ => McpError::internal_error(format!("{operation}: {error}"), None),
        }
    }
}
