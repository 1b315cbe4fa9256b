//! Ask Dot API: HTTP server over the query pipeline.
//!
//! Serves clients, jobs and `/ask` from an in-memory snapshot loaded from a
//! JSON file (`DOT_DATA_FILE`) or, when none is configured, built-in sample
//! data.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dot_api::clock::{Clock, SystemClock};
use dot_api::config::ApiConfig;
use dot_api::routes;
use dot_api::source::{DataSource, FileDataSource, SampleDataSource};
use dot_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dot-api starting");

    let config = ApiConfig::load()?;
    let offset = config.utc_offset()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let source: Arc<dyn DataSource> = match &config.data_file {
        Some(path) => Arc::new(FileDataSource::new(path)),
        None => {
            tracing::warn!("DOT_DATA_FILE not set, serving sample data");
            Arc::new(SampleDataSource::new(clock.today(offset)))
        }
    };

    let state = AppState::load(source, clock)
        .await?
        .with_utc_offset(offset)
        .with_thinking_delay(config.thinking_delay());
    tracing::info!(
        utc_offset = %offset,
        thinking_delay_ms = config.thinking_delay_ms,
        "state ready"
    );

    let app = routes::build_router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
