//! Error kinds surfaced by the demo.
//!
//! Messages keep the underlying transport or parse error text so the printed
//! failure line says what actually went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// The session could not be set up for the configured base URL.
    #[error("failed to create API client: {0}")]
    ConnectionInit(String),

    /// A request produced no usable response: transport error, timeout,
    /// unexpected status, or an undecodable body.
    #[error("request failed: {0}")]
    NetworkFailure(String),

    /// A single log entry could not be rendered to text.
    #[error("failed to serialize log entry: {0}")]
    SerializationFailure(String),
}
