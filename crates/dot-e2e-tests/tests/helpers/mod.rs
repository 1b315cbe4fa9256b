//! Shared test harness for E2E integration tests.
//!
//! Drives the real router over a snapshot loaded through a real data source,
//! with the clock pinned to Wednesday 11 March 2026, 09:00 UTC.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, NaiveDate, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dot_api::clock::FixedClock;
use dot_api::error::DataSourceError;
use dot_api::routes::build_router;
use dot_api::source::{DataSource, FileDataSource};
use dot_api::state::AppState;
use dot_protocol::Snapshot;

/// The pinned "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        DateTime::parse_from_rfc3339("2026-03-11T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc),
    ))
}

/// End-to-end test harness: app state plus the router serving it.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness over the built-in sample clients and jobs.
    pub fn with_sample_data() -> Self {
        Self::from_state(AppState::with_sample_data_at(clock()))
    }

    /// Harness whose snapshot is loaded (and reloaded) from `source`.
    pub async fn with_source(source: Arc<dyn DataSource>) -> Result<Self, DataSourceError> {
        let state = AppState::load(source, clock()).await?;
        Ok(Self::from_state(state))
    }

    pub fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// POST /api/v1/ask. Returns (HTTP status code, response JSON body).
    pub async fn ask(&self, question: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "question": question });
        self.send(
            Request::post("/api/v1/ask")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// GET `uri`.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// POST /api/v1/snapshot/reload.
    pub async fn reload(&self) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::post("/api/v1/snapshot/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}

/// Job numbers from a JSON array of jobs.
pub fn job_numbers(jobs: &serde_json::Value) -> Vec<String> {
    jobs.as_array()
        .map(|jobs| {
            jobs.iter()
                .filter_map(|j| j["job_number"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// A JSON snapshot file in the temp dir, removed on drop.
pub struct TempSnapshotFile {
    path: PathBuf,
}

impl TempSnapshotFile {
    pub fn new(snapshot: &Snapshot) -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let path = std::env::temp_dir().join(format!(
            "dot-e2e-{}-{}.json",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        let file = Self { path };
        file.write(snapshot);
        file
    }

    pub fn write(&self, snapshot: &Snapshot) {
        std::fs::write(&self.path, serde_json::to_vec_pretty(snapshot).unwrap()).unwrap();
    }

    pub fn write_raw(&self, contents: &str) {
        std::fs::write(&self.path, contents).unwrap();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> Arc<dyn DataSource> {
        Arc::new(FileDataSource::new(&self.path))
    }
}

impl Drop for TempSnapshotFile {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).ok();
    }
}

/// Give the harness a thinking delay.
pub fn with_delay(harness: TestHarness, delay: Duration) -> TestHarness {
    TestHarness::from_state(harness.state.with_thinking_delay(delay))
}
