//! Pipeline façade: parse → defaults → select → compose, once each.

use chrono::NaiveDate;
use serde::Serialize;

use dot_protocol::{ResolvedQuery, ResponseDescriptor, Snapshot};

use crate::composer::compose;
use crate::defaults::apply_defaults;
use crate::engine::resolve_jobs;
use crate::parser::QueryParser;

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub resolved: ResolvedQuery,
    pub response: ResponseDescriptor,
}

/// Runs a query end to end against a snapshot.
#[derive(Default)]
pub struct Pipeline {
    parser: QueryParser,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(parser: QueryParser) -> Self {
        Self { parser }
    }

    /// Answer `query` from `snapshot`. Deterministic in all three inputs.
    pub fn run(&self, query: &str, snapshot: &Snapshot, today: NaiveDate) -> PipelineOutcome {
        let span = tracing::debug_span!("pipeline", %today, query_len = query.len());
        let _enter = span.enter();

        let parsed = self.parser.parse(query, &snapshot.clients);
        let resolved = apply_defaults(parsed);
        let resolution = resolve_jobs(&resolved, &snapshot.jobs, today);
        let response = compose(&resolved, &resolution, &snapshot.clients, today);

        tracing::debug!(
            kind = ?response.kind,
            jobs = response.jobs.len(),
            "query answered"
        );
        PipelineOutcome { resolved, response }
    }
}
