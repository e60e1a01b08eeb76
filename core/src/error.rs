//! Error types for the counter API client.
//!
//! # Design
//! Every non-200 response lands in `HttpError` with the raw status code and
//! body for debugging. The counter API has no addressable resources, so there
//! is no dedicated not-found variant.

use thiserror::Error;

/// Errors returned by `DummyClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned something other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
