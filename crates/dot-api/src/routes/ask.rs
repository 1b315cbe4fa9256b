//! Question answering endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dot_protocol::{ResolvedQuery, ResponseDescriptor};

use crate::state::AppState;

/// Request body for `/ask`.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    /// Free-text question. Missing or empty gets the help response.
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub query_id: Uuid,
    /// How the question was understood, defaults applied.
    pub query: ResolvedQuery,
    pub response: ResponseDescriptor,
}

/// POST /api/v1/ask: run a question through the pipeline.
pub async fn ask(State(state): State<AppState>, Json(req): Json<AskRequest>) -> Json<AskResponse> {
    if !state.thinking_delay.is_zero() {
        tokio::time::sleep(state.thinking_delay).await;
    }

    let snapshot = state.snapshot().await;
    let today = state.today();
    let outcome = state.pipeline.run(&req.question, &snapshot, today);
    let query_id = Uuid::now_v7();

    tracing::info!(
        query_id = %query_id,
        core_request = ?outcome.resolved.core_request,
        client = ?outcome.resolved.modifiers.client,
        kind = ?outcome.response.kind,
        jobs = outcome.response.jobs.len(),
        "question answered"
    );

    Json(AskResponse {
        query_id,
        query: outcome.resolved,
        response: outcome.response,
    })
}
