//! Domain DTOs for the counter API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Log
//! entries are left as `serde_json::Value` because the server does not
//! promise a shape for them.

use serde::{Deserialize, Serialize};

/// Which way a `NumberOperation` moves the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Add,
    Subtract,
}

/// Request payload for `POST /number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberOperation {
    pub action: ActionType,
    pub value: i64,
}

impl NumberOperation {
    pub fn add(value: i64) -> Self {
        Self {
            action: ActionType::Add,
            value,
        }
    }

    pub fn subtract(value: i64) -> Self {
        Self {
            action: ActionType::Subtract,
            value,
        }
    }
}

/// Body of both `GET /number` and `POST /number` responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResponse {
    pub number: i64,
}

/// One opaque record from `GET /log`.
pub type LogEntry = serde_json::Value;
