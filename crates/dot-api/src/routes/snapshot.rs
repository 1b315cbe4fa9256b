//! Snapshot administration.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadSummary {
    pub source: String,
    pub clients: usize,
    pub jobs: usize,
}

/// POST /api/v1/snapshot/reload: re-read the data source.
pub async fn reload(State(state): State<AppState>) -> ApiResult<Json<ReloadSummary>> {
    let snapshot = state.reload().await?;
    Ok(Json(ReloadSummary {
        source: state.source.describe(),
        clients: snapshot.clients.len(),
        jobs: snapshot.jobs.len(),
    }))
}
