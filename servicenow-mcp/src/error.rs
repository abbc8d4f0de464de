//! Unified error handling for the ServiceNow MCP library
//!
//! All fallible operations in this crate return [`ServiceNowError`]. Errors
//! propagate to the immediate caller; no operation retries or recovers
//! locally, so every variant carries enough context (tool name, offending
//! field, or remote status) to diagnose a failure from the message alone.

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for the ServiceNow MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceNowError {
    /// Input parameters failed validation before any remote call was made
    #[error("Validation error for '{field}': {message}")]
    Validation {
        /// The parameter field that failed validation
        field: String,
        /// What was wrong with the supplied value
        message: String,
    },

    /// ServiceNow returned a non-success HTTP status
    #[error("ServiceNow request failed with status {status}: {message}")]
    RemoteOperation {
        /// HTTP status code returned by the platform
        status: u16,
        /// Error message extracted from the platform's response body
        message: String,
    },

    /// ServiceNow returned a payload whose shape does not match the Table API
    #[error("Unexpected response from {resource}: {reason}")]
    UnexpectedResponse {
        /// The resource (table or record) that produced the payload
        resource: String,
        /// Why the payload was rejected
        reason: String,
    },

    /// A registered serialization mode cannot represent what the tool returned
    #[error("Serialization mode mismatch for tool '{tool}': expected {expected}, got {actual}")]
    SerializationMismatch {
        /// Name of the misregistered tool
        tool: String,
        /// Output kind the registered mode requires
        expected: &'static str,
        /// Output kind the implementation actually produced
        actual: &'static str,
    },

    /// HTTP transport failure (connection, timeout, TLS)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid server configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ServiceNowError {
    /// Shorthand for a [`ServiceNowError::Validation`] error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`ServiceNowError::UnexpectedResponse`] error
    pub fn unexpected(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for operations in this crate
pub type Result<T> = std::result::Result<T, ServiceNowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_names_field() {
        let err = ServiceNowError::validation("short_description", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error for 'short_description': must not be empty"
        );
    }

    #[test]
    fn test_remote_operation_error_carries_status() {
        let err = ServiceNowError::RemoteOperation {
            status: 404,
            message: "No Record found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("No Record found"));
    }

    #[test]
    fn test_serialization_mismatch_names_tool() {
        let err = ServiceNowError::SerializationMismatch {
            tool: "create_incident".to_string(),
            expected: "text",
            actual: "json value",
        };
        assert!(err.to_string().contains("create_incident"));
    }
}
