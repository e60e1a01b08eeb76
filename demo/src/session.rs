//! Blocking session that executes core requests over ureq.
//!
//! # Design
//! `Session` pairs the I/O-free `DummyClient` with a `ureq::Agent`. Every
//! operation is `build_*`, execute, `parse_*`. Status interpretation stays in
//! the core, so the agent is configured not to turn 4xx/5xx into errors.
//! `close` consumes the session; nothing can be called on it afterwards.

use dummy_core::{DummyClient, HttpMethod, HttpRequest, HttpResponse, LogEntry, NumberOperation, NumberResponse};
use tracing::{debug, info};
use ureq::http::Uri;

use crate::config::Config;
use crate::error::DemoError;

pub struct Session {
    client: DummyClient,
    agent: ureq::Agent,
}

impl Session {
    /// Fails with `ConnectionInit` when the base URL cannot address an HTTP
    /// server.
    pub fn create(config: &Config) -> Result<Self, DemoError> {
        validate_base_url(&config.base_url)?;
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        let client = DummyClient::new(&config.base_url);
        info!(base_url = client.base_url(), timeout = ?config.timeout, "session created");
        Ok(Self { client, agent })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn get_number(&self) -> Result<NumberResponse, DemoError> {
        let response = self.execute(self.client.build_get_number())?;
        self.client.parse_get_number(response).map_err(network_failure)
    }

    /// Sends `operation` once. A failed call is not retried: the server may
    /// already have applied it.
    pub fn modify_number(&self, operation: NumberOperation) -> Result<NumberResponse, DemoError> {
        let request = self.client.build_modify_number(&operation).map_err(network_failure)?;
        let response = self.execute(request)?;
        self.client.parse_modify_number(response).map_err(network_failure)
    }

    /// `Ok(None)` means the server answered with a JSON `null`.
    pub fn get_log(&self) -> Result<Option<Vec<LogEntry>>, DemoError> {
        let response = self.execute(self.client.build_get_log())?;
        self.client.parse_get_log(response).map_err(network_failure)
    }

    pub fn close(self) {
        info!(base_url = self.client.base_url(), "session closed");
    }

    /// Run any core-built request as-is, headers included. Only status and
    /// body come back.
    pub fn execute(&self, request: HttpRequest) -> Result<HttpResponse, DemoError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");

        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&request.path);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&request.path);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(network_failure)?;

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().map_err(network_failure)?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn network_failure(e: impl std::fmt::Display) -> DemoError {
    DemoError::NetworkFailure(e.to_string())
}

fn validate_base_url(base_url: &str) -> Result<(), DemoError> {
    let uri: Uri = base_url
        .parse()
        .map_err(|e| DemoError::ConnectionInit(format!("invalid base URL {base_url:?}: {e}")))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => {
            return Err(DemoError::ConnectionInit(format!(
                "base URL {base_url:?} must use http or https"
            )))
        }
    }
    match uri.host() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(DemoError::ConnectionInit(format!("base URL {base_url:?} has no host"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> Config {
        Config::resolve(Some(url.to_string()))
    }

    #[test]
    fn create_accepts_http_and_https() {
        assert!(Session::create(&config("http://localhost:8000")).is_ok());
        assert!(Session::create(&config("https://counter.example.test/api/")).is_ok());
    }

    #[test]
    fn create_strips_trailing_slash() {
        let session = Session::create(&config("http://localhost:8000/")).unwrap();
        assert_eq!(session.base_url(), "http://localhost:8000");
        session.close();
    }

    #[test]
    fn create_rejects_missing_scheme() {
        let err = Session::create(&config("localhost:8000")).err().unwrap();
        assert!(matches!(err, DemoError::ConnectionInit(_)));
    }

    #[test]
    fn create_rejects_other_schemes() {
        let err = Session::create(&config("ftp://localhost")).err().unwrap();
        assert!(matches!(err, DemoError::ConnectionInit(_)));
    }

    #[test]
    fn create_rejects_garbage() {
        let err = Session::create(&config("http://exa mple")).err().unwrap();
        assert!(matches!(err, DemoError::ConnectionInit(_)));
        assert!(err.to_string().starts_with("failed to create API client"));
    }
}
