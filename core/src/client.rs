//! Stateless HTTP request builder and response parser for the counter API.
//!
//! # Design
//! `DummyClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{LogEntry, NumberOperation, NumberResponse};

/// Synchronous, stateless client for the counter API.
#[derive(Debug, Clone)]
pub struct DummyClient {
    base_url: String,
}

impl DummyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_number(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/number", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_modify_number(&self, operation: &NumberOperation) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(operation).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/number", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_get_log(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/log", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_number(&self, response: HttpResponse) -> Result<NumberResponse, ApiError> {
        parse_json(response)
    }

    pub fn parse_modify_number(&self, response: HttpResponse) -> Result<NumberResponse, ApiError> {
        parse_json(response)
    }

    /// A JSON `null` body parses to `None`, which callers report differently
    /// from an empty array.
    pub fn parse_get_log(&self, response: HttpResponse) -> Result<Option<Vec<LogEntry>>, ApiError> {
        parse_json(response)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Every counter endpoint answers 200 on success.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> DummyClient {
        DummyClient::new("http://localhost:8000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_number_produces_correct_request() {
        let req = client().build_get_number();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/number");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_modify_number_add() {
        let req = client().build_modify_number(&NumberOperation::add(25)).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/number");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["action"], "add");
        assert_eq!(body["value"], 25);
    }

    #[test]
    fn build_modify_number_subtract() {
        let req = client().build_modify_number(&NumberOperation::subtract(10)).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"action": "subtract", "value": 10}));
    }

    #[test]
    fn build_get_log_produces_correct_request() {
        let req = client().build_get_log();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/log");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = DummyClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.build_get_log().path, "http://localhost:8000/log");
    }

    #[test]
    fn parse_get_number_success() {
        let number = client().parse_get_number(ok(r#"{"number":100}"#)).unwrap();
        assert_eq!(number, NumberResponse { number: 100 });
    }

    #[test]
    fn parse_modify_number_negative() {
        let number = client().parse_modify_number(ok(r#"{"number":-5}"#)).unwrap();
        assert_eq!(number.number, -5);
    }

    #[test]
    fn parse_get_number_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_get_number(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn parse_get_number_bad_json() {
        let err = client().parse_get_number(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_get_log_null_is_absent() {
        let log = client().parse_get_log(ok("null")).unwrap();
        assert!(log.is_none());
    }

    #[test]
    fn parse_get_log_empty_is_present() {
        let log = client().parse_get_log(ok("[]")).unwrap();
        assert_eq!(log, Some(Vec::new()));
    }

    #[test]
    fn parse_get_log_keeps_arbitrary_shapes() {
        let log = client()
            .parse_get_log(ok(r#"[{"action":"add"},42,"text",null]"#))
            .unwrap()
            .unwrap();
        assert_eq!(log.len(), 4);
        assert_eq!(log[0]["action"], "add");
        assert_eq!(log[1], 42);
        assert!(log[3].is_null());
    }

    #[test]
    fn parse_get_log_rejects_object_body() {
        let err = client().parse_get_log(ok(r#"{"entries":[]}"#)).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
