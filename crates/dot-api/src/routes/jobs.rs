//! Job listing and lookup endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use dot_protocol::Job;
use dot_query::engine::sort_by_due;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for listing jobs.
#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    /// Client code; case-insensitive.
    pub client: Option<String>,
}

/// GET /api/v1/jobs: active jobs, earliest due first, undated last.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> ApiResult<Json<Vec<Job>>> {
    let snapshot = state.snapshot().await;

    let client = match params.client.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => Some(
            snapshot
                .client(code)
                .ok_or_else(|| ApiError::NotFound(format!("client '{code}' not found")))?,
        ),
        _ => None,
    };

    let mut jobs: Vec<&Job> = snapshot
        .jobs
        .iter()
        .filter(|j| j.status.is_active())
        .filter(|j| client.is_none_or(|c| j.client_code == c.code))
        .collect();
    sort_by_due(&mut jobs);

    Ok(Json(jobs.into_iter().cloned().collect()))
}

/// GET /api/v1/jobs/{job_number}: one job by number.
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_number): Path<String>,
) -> ApiResult<Json<Job>> {
    let snapshot = state.snapshot().await;
    snapshot
        .job(&job_number)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("job '{job_number}' not found")))
}
