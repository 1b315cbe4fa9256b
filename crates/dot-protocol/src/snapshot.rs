use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::job::Job;

/// Read-only view of clients and jobs for one pipeline run.
///
/// Client order is significant: client resolution picks the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Snapshot {
    pub fn new(clients: Vec<Client>, jobs: Vec<Job>) -> Self {
        Self { clients, jobs }
    }

    /// Look up a client by code, ignoring ASCII case.
    pub fn client(&self, code: &str) -> Option<&Client> {
        self.clients
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Look up a job by its number, ignoring ASCII case.
    pub fn job(&self, job_number: &str) -> Option<&Job> {
        self.jobs
            .iter()
            .find(|j| j.job_number.eq_ignore_ascii_case(job_number.trim()))
    }

    /// Number of active (not completed or archived) jobs for a client.
    pub fn active_job_count(&self, client_code: &str) -> usize {
        self.jobs
            .iter()
            .filter(|j| j.client_code == client_code && j.status.is_active())
            .count()
    }
}
