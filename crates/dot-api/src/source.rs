//! Snapshot sources: where clients and jobs come from.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime};
use dot_protocol::{Client, Job, JobStatus, Snapshot};

use crate::error::DataSourceError;

/// Async source of client/job snapshots.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Load a complete snapshot.
    async fn load(&self) -> Result<Snapshot, DataSourceError>;

    /// Short human-readable name for logs and reload responses.
    fn describe(&self) -> String;
}

/// Reads a JSON snapshot (`{"clients": [...], "jobs": [...]}`) from disk.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn load(&self) -> Result<Snapshot, DataSourceError> {
        let path_display = self.path.display().to_string();
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataSourceError::NotFound(path_display.clone())
            } else {
                DataSourceError::Io(format!("{path_display}: {e}"))
            }
        })?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| DataSourceError::Decode {
                source_name: path_display.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(
            path = %path_display,
            clients = snapshot.clients.len(),
            jobs = snapshot.jobs.len(),
            "snapshot file loaded"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Built-in demo data, dated relative to a fixed day.
#[derive(Debug, Clone, Copy)]
pub struct SampleDataSource {
    today: NaiveDate,
}

impl SampleDataSource {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

#[async_trait]
impl DataSource for SampleDataSource {
    async fn load(&self) -> Result<Snapshot, DataSourceError> {
        Ok(sample_snapshot(self.today))
    }

    fn describe(&self) -> String {
        "sample".to_string()
    }
}

// ── Sample data ─────────────────────────────────────────────────

struct SampleJob {
    number: &'static str,
    name: &'static str,
    description: &'static str,
    stage: &'static str,
    due_in_days: i64,
    owner: Option<&'static str>,
    update: Option<&'static str>,
    with_client: bool,
    status: JobStatus,
}

const SAMPLE_CLIENTS: &[(&str, &str)] = &[
    ("SKY", "Sky"),
    ("ONE", "One NZ"),
    ("TOW", "Tower"),
    ("FIS", "Fisher Funds"),
];

const SAMPLE_JOBS: &[SampleJob] = &[
    SampleJob {
        number: "SKY 014",
        name: "Brand Refresh",
        description: "Refresh of the Sky masterbrand across print and digital",
        stage: "Craft",
        due_in_days: 2,
        owner: Some("Aimee Mitchell"),
        update: Some("Layouts approved, moving to production."),
        with_client: false,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "SKY 016",
        name: "Q1 Campaign",
        description: "Q1 acquisition campaign, TV and social",
        stage: "Clarify",
        due_in_days: 5,
        owner: Some("Maja Lee"),
        update: Some("Brief in review with the account team."),
        with_client: false,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "SKY 017",
        name: "Social Templates",
        description: "Reusable social post templates",
        stage: "Deliver",
        due_in_days: 0,
        owner: Some("Mikaila Watts"),
        update: Some("Final files sent, awaiting sign-off."),
        with_client: true,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "ONE 083",
        name: "Simplification Phase 2",
        description: "Plan and pricing simplification, second wave",
        stage: "Craft",
        due_in_days: 4,
        owner: None,
        update: Some("Copy deck underway."),
        with_client: false,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "ONE 085",
        name: "Business Comms",
        description: "Business customer communications",
        stage: "Refine",
        due_in_days: 3,
        owner: None,
        update: Some("Second round of amends in progress."),
        with_client: false,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "ONE 090",
        name: "App Launch",
        description: "Launch campaign for the new One NZ app",
        stage: "Clarify",
        due_in_days: 14,
        owner: None,
        update: None,
        with_client: false,
        status: JobStatus::Incoming,
    },
    SampleJob {
        number: "TOW 083",
        name: "Claims Process",
        description: "Customer guide to the claims process",
        stage: "Refine",
        due_in_days: 2,
        owner: Some("Paige Buckland"),
        update: Some("Legal feedback incorporated."),
        with_client: false,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "TOW 087",
        name: "Policy Docs",
        description: "Rewrite of home and contents policy documents",
        stage: "Craft",
        due_in_days: 11,
        owner: None,
        update: Some("Structure agreed, drafting sections."),
        with_client: false,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "FIS 007",
        name: "Annual Report",
        description: "Annual report design and production",
        stage: "Deliver",
        due_in_days: -2,
        owner: Some("Jade Jordan"),
        update: Some("Proofs with client for final approval."),
        with_client: true,
        status: JobStatus::InProgress,
    },
    SampleJob {
        number: "FIS 023",
        name: "Fund Factsheets",
        description: "Monthly fund factsheet templates",
        stage: "Craft",
        due_in_days: 4,
        owner: None,
        update: Some("Data feed hooked up, styling next."),
        with_client: false,
        status: JobStatus::InProgress,
    },
];

/// The demo snapshot: four clients and their jobs, due dates relative to
/// `today`.
pub fn sample_snapshot(today: NaiveDate) -> Snapshot {
    let clients = SAMPLE_CLIENTS
        .iter()
        .map(|(code, name)| Client::new(*code, *name))
        .collect();
    let updated_at = today.and_time(NaiveTime::MIN).and_utc();

    let jobs = SAMPLE_JOBS
        .iter()
        .map(|s| {
            let client_code = s.number.split_whitespace().next().unwrap_or(s.number);
            let mut job = Job::new(s.number, client_code, s.name)
                .with_status(s.status)
                .with_due(today + Duration::days(s.due_in_days))
                .with_description(s.description);
            if let Some(update) = s.update {
                job = job.with_update(update);
            }
            if s.with_client {
                job = job.waiting_on_client();
            }
            job.stage = Some(s.stage.to_string());
            job.project_owner = s.owner.map(String::from);
            job.last_updated = Some(updated_at);
            job
        })
        .collect();

    Snapshot::new(clients, jobs)
}
