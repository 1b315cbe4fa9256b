use serde::{Deserialize, Serialize};

use crate::job::JobStatus;

/// The classified purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoreRequest {
    /// What is due (today, this week, next).
    Due,
    /// Show or search a client's jobs.
    Find,
    /// Start an update on a job.
    Update,
    Tracker,
    Help,
    /// Nothing recognisable; answered like `Help`.
    #[default]
    None,
}

/// Time window for `Due` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateRange {
    /// Due today or earlier (overdue included).
    Today,
    /// Due within the next seven days, overdue included.
    Week,
    /// The single earliest upcoming due date.
    Next,
}

/// Secondary filter dimensions as parsed. `None` means "not mentioned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Client code.
    pub client: Option<String>,
    pub status: Option<JobStatus>,
    pub with_client: Option<bool>,
    pub date_range: Option<DateRange>,
}

/// Structured reading of one free-text query. Built fresh per query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub core_request: CoreRequest,
    pub modifiers: Modifiers,
    /// Left-to-right, duplicates kept.
    pub search_terms: Vec<String>,
    /// The query exactly as received.
    pub raw: String,
}

impl ParsedQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }
}

/// Modifiers after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModifiers {
    pub client: Option<String>,
    pub status: JobStatus,
    pub with_client: bool,
    /// Always set when the request is `Due`.
    pub date_range: Option<DateRange>,
}

/// A query whose filter dimensions all carry concrete values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    pub core_request: CoreRequest,
    pub modifiers: ResolvedModifiers,
    pub search_terms: Vec<String>,
    pub raw: String,
}

impl From<ResolvedModifiers> for Modifiers {
    fn from(m: ResolvedModifiers) -> Self {
        Self {
            client: m.client,
            status: Some(m.status),
            with_client: Some(m.with_client),
            date_range: m.date_range,
        }
    }
}

impl From<ResolvedQuery> for ParsedQuery {
    fn from(q: ResolvedQuery) -> Self {
        Self {
            core_request: q.core_request,
            modifiers: q.modifiers.into(),
            search_terms: q.search_terms,
            raw: q.raw,
        }
    }
}
