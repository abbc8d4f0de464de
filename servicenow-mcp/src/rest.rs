//! Authenticated HTTP transport for the ServiceNow Table API
//!
//! [`RestClient`] wraps a [`reqwest::Client`] carrying the instance base URL
//! and credentials. Every operation in this crate is a single round trip
//! through this client; there is no retry, backoff, or batching. The
//! underlying client is cheaply cloneable and safe for concurrent in-flight
//! calls.

use crate::config::{AuthType, ServerConfig};
use crate::error::{Result, ServiceNowError};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const TABLE_API_PATH: &str = "api/now/table";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client bound to a single ServiceNow instance
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    auth: AuthCredentials,
}

#[derive(Debug, Clone)]
enum AuthCredentials {
    Basic { username: String, password: String },
    ApiKey { header: String, key: String },
}

impl RestClient {
    /// Build a client from a validated [`ServerConfig`].
    pub fn new(config: &ServerConfig) -> Result<Self> {
        config.validate()?;
        // validate() guarantees the URL parses and the credentials for the
        // selected auth type are present.
        let base_url = Url::parse(&config.instance_url)
            .map(|u| u.as_str().trim_end_matches('/').to_string())
            .unwrap_or_else(|_| config.instance_url.clone());

        let auth = match config.auth.auth_type {
            AuthType::Basic => {
                let basic = config.auth.basic.as_ref().ok_or_else(|| {
                    ServiceNowError::validation("auth", "basic credentials missing")
                })?;
                AuthCredentials::Basic {
                    username: basic.username.clone(),
                    password: basic.password.clone(),
                }
            }
            AuthType::ApiKey => {
                let key = config.auth.api_key.as_ref().ok_or_else(|| {
                    ServiceNowError::validation("auth", "api key credentials missing")
                })?;
                AuthCredentials::ApiKey {
                    header: key.header.clone(),
                    key: key.api_key.clone(),
                }
            }
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("servicenow-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// Base URL of the instance this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_endpoint(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, TABLE_API_PATH, table)
    }

    fn record_endpoint(&self, table: &str, sys_id: &str) -> String {
        format!("{}/{}", self.table_endpoint(table), sys_id)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            AuthCredentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            AuthCredentials::ApiKey { header, key } => request.header(header.as_str(), key),
        }
    }

    /// Fetch a single record by sys_id. Returns the unwrapped `result` object.
    pub async fn get_record(
        &self,
        table: &str,
        sys_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.record_endpoint(table, sys_id);
        debug!(table, sys_id, "GET {url}");
        let request = self.http.get(&url).query(query);
        let body = self.execute(request, table).await?;
        unwrap_result(body, table)
    }

    /// Query a table. Returns the unwrapped `result` value (normally an array).
    pub async fn query_records(&self, table: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.table_endpoint(table);
        debug!(table, "GET {url}");
        let request = self.http.get(&url).query(query);
        let body = self.execute(request, table).await?;
        unwrap_result(body, table)
    }

    /// Insert a record. Returns the platform's representation of the new record.
    pub async fn create_record(
        &self,
        table: &str,
        fields: Value,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.table_endpoint(table);
        debug!(table, "POST {url}");
        let request = self.http.post(&url).query(query).json(&fields);
        let body = self.execute(request, table).await?;
        unwrap_result(body, table)
    }

    /// Patch a record by sys_id. Returns the updated record.
    pub async fn update_record(
        &self,
        table: &str,
        sys_id: &str,
        fields: Value,
        query: &[(&str, String)],
    ) -> Result<Value> {
        let url = self.record_endpoint(table, sys_id);
        debug!(table, sys_id, "PATCH {url}");
        let request = self.http.patch(&url).query(query).json(&fields);
        let body = self.execute(request, table).await?;
        unwrap_result(body, table)
    }

    async fn execute(&self, request: RequestBuilder, resource: &str) -> Result<Value> {
        let response = self
            .apply_auth(request)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(Value::Null);
            }
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|_| {
                ServiceNowError::unexpected(resource, "response body is not valid JSON")
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ServiceNowError::RemoteOperation {
                status: status.as_u16(),
                message: extract_error_message(&body, status),
            })
        }
    }
}

/// Pull the `result` payload out of a Table API envelope.
///
/// Every Table API response wraps its payload in `{"result": …}`; anything
/// else is rejected rather than passed through.
fn unwrap_result(body: Value, resource: &str) -> Result<Value> {
    match body {
        Value::Object(mut map) => map
            .remove("result")
            .ok_or_else(|| ServiceNowError::unexpected(resource, "missing 'result' envelope")),
        Value::Null => Ok(Value::Null),
        _ => Err(ServiceNowError::unexpected(
            resource,
            "expected a JSON object envelope",
        )),
    }
}

/// Extract a human-readable message from a ServiceNow error body.
///
/// Error responses look like `{"error": {"message": …, "detail": …}, "status":
/// "failure"}`; fall back to the raw body, then the status reason.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::Object(error)) = map.get("error") {
            let message = error.get("message").and_then(Value::as_str);
            let detail = error.get("detail").and_then(Value::as_str);
            match (message, detail) {
                (Some(m), Some(d)) if !d.is_empty() => return format!("{m} ({d})"),
                (Some(m), _) => return m.to_string(),
                _ => {}
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use wiremock::matchers::{header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RestClient {
        let config = ServerConfig::new(server.uri(), AuthConfig::basic("admin", "secret"));
        RestClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_basic_auth_header_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.query_records("incident", &[]).await.unwrap();
        assert_eq!(result, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_api_key_header_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .and(header("x-sn-apikey", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = ServerConfig::new(server.uri(), AuthConfig::api_key("abc123"));
        let client = RestClient::new(&config).unwrap();
        client.query_records("incident", &[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_params_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .and(query_param("sysparm_limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .query_records("incident", &[("sysparm_limit", "5".to_string())])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_not_found_maps_to_remote_operation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/kb_knowledge/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"message": "No Record found", "detail": "Record doesn't exist"},
                "status": "failure"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .get_record("kb_knowledge", "missing", &[])
            .await
            .unwrap_err();
        match err {
            ServiceNowError::RemoteOperation { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("No Record found"));
            }
            other => panic!("expected RemoteOperation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_result_envelope_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "records": []
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.query_records("incident", &[]).await.unwrap_err();
        assert!(matches!(err, ServiceNowError::UnexpectedResponse { .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/now/table/incident"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.query_records("incident", &[]).await.unwrap_err();
        assert!(matches!(err, ServiceNowError::UnexpectedResponse { .. }));
    }

    #[test]
    fn test_extract_error_message_falls_back_to_body() {
        let message = extract_error_message("upstream exploded", StatusCode::BAD_GATEWAY);
        assert_eq!(message, "upstream exploded");
    }

    #[test]
    fn test_extract_error_message_empty_body_uses_reason() {
        let message = extract_error_message("", StatusCode::FORBIDDEN);
        assert_eq!(message, "Forbidden");
    }
}
