//! Shared application state for the Axum server.
//!
//! The current snapshot sits behind `RwLock<Arc<Snapshot>>`: a query clones
//! the `Arc` under a short read lock and works on it lock-free, so a reload
//! only becomes visible to the next query.

use std::sync::Arc;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use tokio::sync::RwLock;

use dot_protocol::Snapshot;
use dot_query::Pipeline;

use crate::clock::{Clock, SystemClock};
use crate::error::DataSourceError;
use crate::source::{DataSource, SampleDataSource, sample_snapshot};

/// Shared application state, wrapped in `Arc`s for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    snapshot: Arc<RwLock<Arc<Snapshot>>>,
    /// Where reloads read from.
    pub source: Arc<dyn DataSource>,
    pub clock: Arc<dyn Clock>,
    pub pipeline: Arc<Pipeline>,
    /// Offset used to turn the clock's instant into today's date.
    pub utc_offset: FixedOffset,
    /// Artificial pause before answering `/ask`.
    pub thinking_delay: Duration,
}

impl AppState {
    /// Build state around an already-loaded snapshot.
    pub fn new(snapshot: Snapshot, source: Arc<dyn DataSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(snapshot))),
            source,
            clock,
            pipeline: Arc::new(Pipeline::new()),
            utc_offset: Utc.fix(),
            thinking_delay: Duration::ZERO,
        }
    }

    /// Load the initial snapshot from `source`.
    pub async fn load(
        source: Arc<dyn DataSource>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DataSourceError> {
        let snapshot = source.load().await?;
        tracing::info!(
            source = %source.describe(),
            clients = snapshot.clients.len(),
            jobs = snapshot.jobs.len(),
            "snapshot loaded"
        );
        Ok(Self::new(snapshot, source, clock))
    }

    /// Create state with the built-in sample data, dated from the system clock.
    pub fn with_sample_data() -> Self {
        Self::with_sample_data_at(Arc::new(SystemClock))
    }

    /// Create state with the built-in sample data, dated from `clock` (UTC).
    pub fn with_sample_data_at(clock: Arc<dyn Clock>) -> Self {
        let today = clock.today(Utc.fix());
        Self::new(
            sample_snapshot(today),
            Arc::new(SampleDataSource::new(today)),
            clock,
        )
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    /// Today's date in the configured offset.
    pub fn today(&self) -> NaiveDate {
        self.clock.today(self.utc_offset)
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        self.snapshot.read().await.clone()
    }

    /// Re-read the data source and swap in the new snapshot. On error the
    /// old snapshot stays in place.
    pub async fn reload(&self) -> Result<Arc<Snapshot>, DataSourceError> {
        let fresh = Arc::new(self.source.load().await?);
        *self.snapshot.write().await = fresh.clone();
        tracing::info!(
            source = %self.source.describe(),
            clients = fresh.clients.len(),
            jobs = fresh.jobs.len(),
            "snapshot reloaded"
        );
        Ok(fresh)
    }
}
