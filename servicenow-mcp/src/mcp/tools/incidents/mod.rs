//! Incident management tools
//!
//! Tools covering the incident lifecycle against the `incident` table:
//!
//! - **create**: open a new incident
//! - **update**: change fields on an existing incident
//! - **add_comment**: add a customer-visible comment or internal work note
//! - **resolve**: close out an incident with a resolution code and notes
//! - **list**: page through incidents with optional filters
//!
//! Request types live in `crate::mcp::incident_types`; the REST shaping is in
//! `crate::incidents`. Mutation tools return confirmation text carrying the
//! incident number; the list tool returns a JSON-encoded listing envelope.

pub mod add_comment;
pub mod create;
pub mod list;
pub mod resolve;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all incident-related tools with the registry
pub fn register_incident_tools(registry: &mut ToolRegistry) {
    registry.register(create::CreateIncidentTool::new());
    registry.register(update::UpdateIncidentTool::new());
    registry.register(add_comment::AddCommentTool::new());
    registry.register(resolve::ResolveIncidentTool::new());
    registry.register(list::ListIncidentsTool::new());
}
