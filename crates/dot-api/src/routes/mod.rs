//! API route definitions and router builder.

pub mod ask;
pub mod clients;
pub mod health;
pub mod jobs;
pub mod snapshot;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/clients", get(clients::list_clients))
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/{job_number}", get(jobs::get_job))
        .route("/ask", post(ask::ask))
        .route("/snapshot/reload", post(snapshot::reload));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
