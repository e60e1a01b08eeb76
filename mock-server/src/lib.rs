use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Add,
    Subtract,
}

#[derive(Debug, Deserialize)]
pub struct NumberOperation {
    pub action: ActionType,
    pub value: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResponse {
    pub number: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub action: ActionType,
    pub value: i64,
    pub before: i64,
    pub after: i64,
}

#[derive(Debug, Default)]
pub struct Counter {
    pub number: i64,
    pub log: Vec<LogEntry>,
}

impl Counter {
    pub fn new(number: i64) -> Self {
        Self {
            number,
            log: Vec::new(),
        }
    }

    /// Apply `op`, record it, and return the new value. Saturates at the
    /// `i64` bounds.
    pub fn apply(&mut self, op: &NumberOperation) -> i64 {
        let before = self.number;
        let after = match op.action {
            ActionType::Add => before.saturating_add(op.value),
            ActionType::Subtract => before.saturating_sub(op.value),
        };
        self.number = after;
        self.log.push(LogEntry {
            id: Uuid::new_v4(),
            action: op.action,
            value: op.value,
            before,
            after,
        });
        after
    }
}

pub type Db = Arc<RwLock<Counter>>;

pub fn app(initial: i64) -> Router {
    let db: Db = Arc::new(RwLock::new(Counter::new(initial)));
    Router::new()
        .route("/number", get(get_number).post(modify_number))
        .route("/log", get(get_log))
        .with_state(db)
}

pub async fn run(listener: TcpListener, initial: i64) -> Result<(), std::io::Error> {
    axum::serve(listener, app(initial)).await
}

async fn get_number(State(db): State<Db>) -> Json<NumberResponse> {
    let counter = db.read().await;
    Json(NumberResponse {
        number: counter.number,
    })
}

async fn modify_number(
    State(db): State<Db>,
    Json(op): Json<NumberOperation>,
) -> Json<NumberResponse> {
    let number = db.write().await.apply(&op);
    tracing::info!(action = ?op.action, value = op.value, number, "number modified");
    Json(NumberResponse { number })
}

async fn get_log(State(db): State<Db>) -> Json<Vec<LogEntry>> {
    let counter = db.read().await;
    Json(counter.log.clone())
}
