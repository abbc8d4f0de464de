//! Incident operations against the ServiceNow Table API
//!
//! Each operation is a single round trip through a [`RestClient`]: build the
//! request, parse the `result` payload into an [`IncidentRecord`], and either
//! return a confirmation message (mutations) or a paged listing envelope.
//! Callers may identify an incident by number (`INC…`) or by sys_id; numbers
//! are resolved with a lookup query first.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::{Result, ServiceNowError};
use crate::mcp::incident_types::{
    AddCommentParams, CreateIncidentParams, ListIncidentsParams, ResolveIncidentParams,
    UpdateIncidentParams,
};
use crate::rest::RestClient;

const INCIDENT_TABLE: &str = "incident";

/// Table API value for the "Resolved" incident state
const STATE_RESOLVED: &str = "6";

/// An incident as returned by the Table API.
///
/// Only the fields this adapter exposes are parsed; the platform returns
/// many more, which are ignored. All Table API field values arrive as
/// strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IncidentRecord {
    /// Unique record identifier
    pub sys_id: String,
    /// Incident number, e.g. `INC0010001`
    pub number: String,
    /// Short description
    #[serde(default)]
    pub short_description: String,
    /// Detailed description
    #[serde(default)]
    pub description: String,
    /// Incident state code
    #[serde(default)]
    pub state: String,
    /// Priority (1-5)
    #[serde(default)]
    pub priority: String,
    /// Impact (1-3)
    #[serde(default)]
    pub impact: String,
    /// Urgency (1-3)
    #[serde(default)]
    pub urgency: String,
    /// Category
    #[serde(default)]
    pub category: String,
    /// Assigned user
    #[serde(default)]
    pub assigned_to: String,
    /// Assigned group
    #[serde(default)]
    pub assignment_group: String,
}

fn base_query() -> Vec<(&'static str, String)> {
    vec![("sysparm_exclude_reference_link", "true".to_string())]
}

fn parse_incident(value: Value) -> Result<IncidentRecord> {
    serde_json::from_value(value).map_err(|e| {
        ServiceNowError::unexpected(INCIDENT_TABLE, format!("record does not parse: {e}"))
    })
}

fn insert_opt(fields: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(v) = value {
        fields.insert(key.to_string(), Value::String(v));
    }
}

/// Resolve an incident number (`INC…`) to a sys_id. Sys_ids pass through.
async fn resolve_incident_sys_id(client: &RestClient, incident_id: &str) -> Result<String> {
    if !incident_id.starts_with("INC") {
        return Ok(incident_id.to_string());
    }
    let query = [
        ("sysparm_query", format!("number={incident_id}")),
        ("sysparm_fields", "sys_id,number".to_string()),
        ("sysparm_limit", "1".to_string()),
    ];
    let result = client.query_records(INCIDENT_TABLE, &query).await?;
    match result {
        Value::Array(items) => items
            .into_iter()
            .next()
            .and_then(|item| {
                item.get("sys_id")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .ok_or_else(|| ServiceNowError::RemoteOperation {
                status: 404,
                message: format!("Incident '{incident_id}' not found"),
            }),
        _ => Err(ServiceNowError::unexpected(
            INCIDENT_TABLE,
            "expected an array of records",
        )),
    }
}

/// Create a new incident. Returns a confirmation carrying the generated
/// incident number.
pub async fn create_incident(client: &RestClient, params: CreateIncidentParams) -> Result<String> {
    params.validate()?;

    let mut fields = Map::new();
    fields.insert(
        "short_description".to_string(),
        Value::String(params.short_description),
    );
    insert_opt(&mut fields, "description", params.description);
    insert_opt(&mut fields, "caller_id", params.caller_id);
    insert_opt(&mut fields, "category", params.category);
    insert_opt(&mut fields, "subcategory", params.subcategory);
    insert_opt(&mut fields, "priority", params.priority);
    insert_opt(&mut fields, "impact", params.impact);
    insert_opt(&mut fields, "urgency", params.urgency);
    insert_opt(&mut fields, "assigned_to", params.assigned_to);
    insert_opt(&mut fields, "assignment_group", params.assignment_group);

    let value = client
        .create_record(INCIDENT_TABLE, Value::Object(fields), &base_query())
        .await?;
    let record = parse_incident(value)?;
    info!(number = %record.number, "created incident");
    Ok(format!(
        "Incident {} created successfully (sys_id: {})",
        record.number, record.sys_id
    ))
}

/// Update fields on an existing incident.
pub async fn update_incident(client: &RestClient, params: UpdateIncidentParams) -> Result<String> {
    params.validate()?;
    let sys_id = resolve_incident_sys_id(client, &params.incident_id).await?;

    let mut fields = Map::new();
    insert_opt(&mut fields, "short_description", params.short_description);
    insert_opt(&mut fields, "description", params.description);
    insert_opt(&mut fields, "state", params.state);
    insert_opt(&mut fields, "category", params.category);
    insert_opt(&mut fields, "priority", params.priority);
    insert_opt(&mut fields, "impact", params.impact);
    insert_opt(&mut fields, "urgency", params.urgency);
    insert_opt(&mut fields, "assigned_to", params.assigned_to);
    insert_opt(&mut fields, "assignment_group", params.assignment_group);
    insert_opt(&mut fields, "work_notes", params.work_notes);
    insert_opt(&mut fields, "close_notes", params.close_notes);
    insert_opt(&mut fields, "close_code", params.close_code);

    if fields.is_empty() {
        return Err(ServiceNowError::validation(
            "incident_id",
            "no fields to update were provided",
        ));
    }

    let value = client
        .update_record(INCIDENT_TABLE, &sys_id, Value::Object(fields), &base_query())
        .await?;
    let record = parse_incident(value)?;
    info!(number = %record.number, "updated incident");
    Ok(format!("Incident {} updated successfully", record.number))
}

/// Add a comment or work note to an incident.
pub async fn add_comment(client: &RestClient, params: AddCommentParams) -> Result<String> {
    params.validate()?;
    let sys_id = resolve_incident_sys_id(client, &params.incident_id).await?;

    let field = if params.is_work_note {
        "work_notes"
    } else {
        "comments"
    };
    let value = client
        .update_record(
            INCIDENT_TABLE,
            &sys_id,
            json!({ field: params.comment }),
            &base_query(),
        )
        .await?;
    let record = parse_incident(value)?;
    let kind = if params.is_work_note {
        "Work note"
    } else {
        "Comment"
    };
    Ok(format!("{} added to incident {}", kind, record.number))
}

/// Resolve an incident with a close code and notes.
pub async fn resolve_incident(
    client: &RestClient,
    params: ResolveIncidentParams,
) -> Result<String> {
    params.validate()?;
    let sys_id = resolve_incident_sys_id(client, &params.incident_id).await?;

    let value = client
        .update_record(
            INCIDENT_TABLE,
            &sys_id,
            json!({
                "state": STATE_RESOLVED,
                "close_code": params.resolution_code,
                "close_notes": params.resolution_notes,
            }),
            &base_query(),
        )
        .await?;
    let record = parse_incident(value)?;
    info!(number = %record.number, "resolved incident");
    Ok(format!(
        "Incident {} resolved with close code '{}'",
        record.number, params.resolution_code
    ))
}

fn build_incident_query(params: &ListIncidentsParams) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(state) = &params.state {
        parts.push(format!("state={state}"));
    }
    if let Some(assigned_to) = &params.assigned_to {
        parts.push(format!("assigned_to={assigned_to}"));
    }
    if let Some(category) = &params.category {
        parts.push(format!("category={category}"));
    }
    if let Some(text) = &params.query {
        parts.push(format!(
            "short_descriptionLIKE{text}^ORdescriptionLIKE{text}"
        ));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("^"))
    }
}

/// List incidents matching the given filters.
///
/// Returns the uniform listing envelope: `{"result": […], "count": n,
/// "limit": l, "offset": o}`.
pub async fn list_incidents(client: &RestClient, params: ListIncidentsParams) -> Result<Value> {
    params.validate()?;

    let mut query = base_query();
    query.push(("sysparm_limit", params.limit.to_string()));
    query.push(("sysparm_offset", params.offset.to_string()));
    if let Some(filter) = build_incident_query(&params) {
        query.push(("sysparm_query", filter));
    }

    let result = client.query_records(INCIDENT_TABLE, &query).await?;
    let items = match result {
        Value::Array(items) => items,
        _ => {
            return Err(ServiceNowError::unexpected(
                INCIDENT_TABLE,
                "expected an array of records",
            ))
        }
    };
    let records = items
        .into_iter()
        .map(parse_incident)
        .collect::<Result<Vec<_>>>()?;
    let count = records.len();

    Ok(json!({
        "result": records,
        "count": count,
        "limit": params.limit,
        "offset": params.offset,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, ServerConfig};
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RestClient {
        let config = ServerConfig::new(server.uri(), AuthConfig::basic("admin", "secret"));
        RestClient::new(&config).unwrap()
    }

    fn incident_body(number: &str, sys_id: &str) -> Value {
        json!({
            "result": {
                "sys_id": sys_id,
                "number": number,
                "short_description": "printer down",
                "state": "1",
                "urgency": "3",
                "opened_by": "somebody else entirely"
            }
        })
    }

    #[tokio::test]
    async fn test_create_incident_returns_number() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/now/table/incident"))
            .and(body_partial_json(json!({
                "short_description": "printer down",
                "urgency": "3"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(incident_body("INC0010001", "abc123")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = CreateIncidentParams {
            short_description: "printer down".to_string(),
            urgency: Some("3".to_string()),
            ..Default::default()
        };
        let message = create_incident(&client_for(&server), params).await.unwrap();
        assert!(message.contains("INC0010001"));
    }

    #[tokio::test]
    async fn test_create_incident_rejects_empty_description() {
        let server = MockServer::start().await;
        let params = CreateIncidentParams {
            short_description: " ".to_string(),
            ..Default::default()
        };
        let err = create_incident(&client_for(&server), params)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceNowError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_incident_resolves_number_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .and(query_param("sysparm_query", "number=INC0010001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [{"sys_id": "abc123", "number": "INC0010001"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/now/table/incident/abc123"))
            .and(body_partial_json(json!({"priority": "2"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(incident_body("INC0010001", "abc123")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = UpdateIncidentParams {
            incident_id: "INC0010001".to_string(),
            priority: Some("2".to_string()),
            ..Default::default()
        };
        let message = update_incident(&client_for(&server), params).await.unwrap();
        assert!(message.contains("INC0010001"));
    }

    #[tokio::test]
    async fn test_update_incident_unknown_number_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
            .mount(&server)
            .await;

        let params = UpdateIncidentParams {
            incident_id: "INC9999999".to_string(),
            priority: Some("2".to_string()),
            ..Default::default()
        };
        let err = update_incident(&client_for(&server), params)
            .await
            .unwrap_err();
        match err {
            ServiceNowError::RemoteOperation { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("INC9999999"));
            }
            other => panic!("expected RemoteOperation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_incident_requires_some_field() {
        let server = MockServer::start().await;
        let params = UpdateIncidentParams {
            incident_id: "abc123".to_string(),
            ..Default::default()
        };
        let err = update_incident(&client_for(&server), params)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceNowError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_add_comment_uses_work_notes_field() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/now/table/incident/abc123"))
            .and(body_partial_json(json!({"work_notes": "swapped toner"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(incident_body("INC0010001", "abc123")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = AddCommentParams {
            incident_id: "abc123".to_string(),
            comment: "swapped toner".to_string(),
            is_work_note: true,
        };
        let message = add_comment(&client_for(&server), params).await.unwrap();
        assert!(message.starts_with("Work note"));
    }

    #[tokio::test]
    async fn test_resolve_incident_sets_state_and_code() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/now/table/incident/abc123"))
            .and(body_partial_json(json!({
                "state": "6",
                "close_code": "Solved (Permanently)"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(incident_body("INC0010001", "abc123")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let params = ResolveIncidentParams {
            incident_id: "abc123".to_string(),
            resolution_code: "Solved (Permanently)".to_string(),
            resolution_notes: "Replaced the fuser".to_string(),
        };
        let message = resolve_incident(&client_for(&server), params).await.unwrap();
        assert!(message.contains("INC0010001"));
        assert!(message.contains("Solved (Permanently)"));
    }

    #[tokio::test]
    async fn test_list_incidents_builds_filter_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .and(query_param("sysparm_limit", "5"))
            .and(query_param("sysparm_offset", "0"))
            .and(query_param("sysparm_query", "state=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [
                    {"sys_id": "a", "number": "INC0010001", "state": "1"},
                    {"sys_id": "b", "number": "INC0010002", "state": "1"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListIncidentsParams {
            limit: 5,
            state: Some("1".to_string()),
            ..Default::default()
        };
        let listing = list_incidents(&client_for(&server), params).await.unwrap();
        assert_eq!(listing["count"], 2);
        assert_eq!(listing["result"].as_array().unwrap().len(), 2);
        assert_eq!(listing["result"][0]["number"], "INC0010001");
    }

    #[test]
    fn test_build_incident_query_joins_filters() {
        let params = ListIncidentsParams {
            state: Some("2".to_string()),
            category: Some("hardware".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_incident_query(&params).unwrap(),
            "state=2^category=hardware"
        );
        assert_eq!(build_incident_query(&ListIncidentsParams::default()), None);
    }
}
