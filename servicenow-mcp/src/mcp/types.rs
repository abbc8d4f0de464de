//! Shared types and validation helpers for MCP parameter schemas

use crate::error::{Result, ServiceNowError};

/// Default page size for list operations
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Largest page size a caller may request
pub const MAX_LIST_LIMIT: u32 = 100;

pub(crate) fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

pub(crate) fn default_true() -> bool {
    true
}

/// Reject empty or whitespace-only identifier fields.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceNowError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Enforce the uniform list paging bounds: 1 <= limit <= 100.
pub(crate) fn validate_limit(limit: u32) -> Result<()> {
    if limit == 0 || limit > MAX_LIST_LIMIT {
        return Err(ServiceNowError::validation(
            "limit",
            format!("must be between 1 and {MAX_LIST_LIMIT}"),
        ));
    }
    Ok(())
}
