use serde::{Deserialize, Serialize};

use crate::job::Job;

/// Which layout a renderer should use for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// A ranked list of jobs.
    JobList,
    /// One job, picked with confidence.
    SingleJob,
    /// A short list of possible matches.
    Candidates,
    /// No client known; the caller should offer a client choice.
    ClientPicker,
    /// A follow-up question for the user.
    Clarify,
    /// Fixed informational text.
    Info,
    /// Nothing matched.
    Empty,
}

/// Display-ready answer to one query. The core never renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    pub kind: ResponseKind,
    /// Message text. May contain `**emphasis**` markers.
    pub text: String,
    pub jobs: Vec<Job>,
    /// Suggested next queries, shown as buttons.
    pub prompts: Vec<String>,
}

impl ResponseDescriptor {
    pub fn new(kind: ResponseKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            jobs: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn with_jobs<'a>(mut self, jobs: impl IntoIterator<Item = &'a Job>) -> Self {
        self.jobs = jobs.into_iter().cloned().collect();
        self
    }

    pub fn with_prompts(mut self, prompts: &[&str]) -> Self {
        self.prompts = prompts.iter().map(|p| (*p).to_string()).collect();
        self
    }
}
