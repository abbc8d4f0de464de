//! Request types for incident MCP operations
//!
//! Unknown fields supplied by a caller are rejected on every request type;
//! the same policy applies across all tools.

use serde::{Deserialize, Serialize};

use super::types::{default_limit, require_non_empty, validate_limit};
use crate::error::Result;

/// Request to create a new incident
///
/// # Examples
///
/// ```ignore
/// CreateIncidentParams {
///     short_description: "Printer on floor 3 is down".to_string(),
///     urgency: Some("3".to_string()),
///     ..Default::default()
/// }
/// ```
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateIncidentParams {
    /// Short description of the incident
    pub short_description: String,
    /// Detailed description of the incident
    pub description: Option<String>,
    /// User who reported the incident (sys_id or user name)
    pub caller_id: Option<String>,
    /// Category of the incident
    pub category: Option<String>,
    /// Subcategory of the incident
    pub subcategory: Option<String>,
    /// Priority of the incident (1-5)
    pub priority: Option<String>,
    /// Impact of the incident (1-3)
    pub impact: Option<String>,
    /// Urgency of the incident (1-3)
    pub urgency: Option<String>,
    /// User assigned to the incident
    pub assigned_to: Option<String>,
    /// Group assigned to the incident
    pub assignment_group: Option<String>,
}

impl CreateIncidentParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("short_description", &self.short_description)
    }
}

/// Request to update an existing incident
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateIncidentParams {
    /// Incident number (INC…) or sys_id of the incident to update
    pub incident_id: String,
    /// New short description
    pub short_description: Option<String>,
    /// New detailed description
    pub description: Option<String>,
    /// New state of the incident
    pub state: Option<String>,
    /// New category
    pub category: Option<String>,
    /// New priority (1-5)
    pub priority: Option<String>,
    /// New impact (1-3)
    pub impact: Option<String>,
    /// New urgency (1-3)
    pub urgency: Option<String>,
    /// User to assign the incident to
    pub assigned_to: Option<String>,
    /// Group to assign the incident to
    pub assignment_group: Option<String>,
    /// Work notes to add to the incident
    pub work_notes: Option<String>,
    /// Close notes, when closing the incident
    pub close_notes: Option<String>,
    /// Close code, when closing the incident
    pub close_code: Option<String>,
}

impl UpdateIncidentParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("incident_id", &self.incident_id)
    }
}

/// Request to add a comment or work note to an incident
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AddCommentParams {
    /// Incident number (INC…) or sys_id of the incident to comment on
    pub incident_id: String,
    /// The comment text
    pub comment: String,
    /// Record the comment as an internal work note instead of a customer-visible comment
    #[serde(default)]
    pub is_work_note: bool,
}

impl AddCommentParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("incident_id", &self.incident_id)?;
        require_non_empty("comment", &self.comment)
    }
}

/// Request to resolve an incident
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ResolveIncidentParams {
    /// Incident number (INC…) or sys_id of the incident to resolve
    pub incident_id: String,
    /// Close code describing how the incident was resolved
    pub resolution_code: String,
    /// Notes describing the resolution
    pub resolution_notes: String,
}

impl ResolveIncidentParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        require_non_empty("incident_id", &self.incident_id)?;
        require_non_empty("resolution_code", &self.resolution_code)?;
        require_non_empty("resolution_notes", &self.resolution_notes)
    }
}

/// Request to list incidents
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListIncidentsParams {
    /// Maximum number of incidents to return (1-100, default 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of incidents to skip (default 0)
    #[serde(default)]
    pub offset: u32,
    /// Filter by incident state
    pub state: Option<String>,
    /// Filter by assigned user
    pub assigned_to: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Free-text search over short description and description
    pub query: Option<String>,
}

impl Default for ListIncidentsParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
            state: None,
            assigned_to: None,
            category: None,
            query: None,
        }
    }
}

impl ListIncidentsParams {
    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_limit(self.limit)
    }
}
