//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health: liveness check, with the size of the loaded snapshot.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let snapshot = state.snapshot().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "clients": snapshot.clients.len(),
        "jobs": snapshot.jobs.len(),
    }))
}
