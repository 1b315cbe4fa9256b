//! Client listing endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// A client with its number of active jobs.
#[derive(Debug, Serialize)]
pub struct ClientSummary {
    pub code: String,
    pub name: String,
    pub job_count: usize,
}

/// GET /api/v1/clients: clients in snapshot order.
pub async fn list_clients(State(state): State<AppState>) -> Json<Vec<ClientSummary>> {
    let snapshot = state.snapshot().await;
    let summaries = snapshot
        .clients
        .iter()
        .map(|c| ClientSummary {
            code: c.code.clone(),
            name: c.name.clone(),
            job_count: snapshot.active_job_count(&c.code),
        })
        .collect();
    Json(summaries)
}
