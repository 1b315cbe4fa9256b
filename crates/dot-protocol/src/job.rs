use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a job.
///
/// Serialized with the display labels used upstream ("In Progress",
/// "On Hold", ...). Decoding is lenient: snake_case and a few synonyms are
/// accepted, and anything unrecognised becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Incoming,
    #[default]
    InProgress,
    OnHold,
    Completed,
    Archived,
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incoming => "Incoming",
            Self::InProgress => "In Progress",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
            Self::Unknown => "Unknown",
        }
    }

    /// Lowercase phrase for running text ("on hold").
    pub fn describe(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Map a free-form label to a status.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "incoming" | "new" => Self::Incoming,
            "in progress" | "inprogress" | "active" => Self::InProgress,
            "on hold" | "onhold" | "hold" => Self::OnHold,
            "completed" | "complete" | "done" => Self::Completed,
            "archived" => Self::Archived,
            _ => Self::Unknown,
        }
    }

    /// Active jobs are those still on someone's plate.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Completed | Self::Archived)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for JobStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A trackable unit of client work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job number, formatted "<client code> <digits>" (e.g., "SKY 014").
    pub job_number: String,
    /// Owning client's code.
    pub client_code: String,
    /// Short job name (e.g., "Brand Refresh").
    pub job_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Latest free-text status update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    /// When the next update is due. Unreadable values decode as `None`.
    #[serde(
        default,
        with = "crate::dates::lenient_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_due: Option<NaiveDate>,
    /// When `update` was last written.
    #[serde(
        default,
        with = "crate::dates::lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
    /// True while the job is waiting on the client.
    #[serde(default)]
    pub with_client: bool,
    #[serde(default)]
    pub status: JobStatus,
    /// Workflow stage (Clarify, Craft, Refine, Deliver). Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
}

impl Job {
    /// Minimal in-progress job with no dates or free text.
    pub fn new(
        job_number: impl Into<String>,
        client_code: impl Into<String>,
        job_name: impl Into<String>,
    ) -> Self {
        Self {
            job_number: job_number.into(),
            client_code: client_code.into(),
            job_name: job_name.into(),
            description: None,
            update: None,
            update_due: None,
            last_updated: None,
            with_client: false,
            status: JobStatus::InProgress,
            stage: None,
            project_owner: None,
            channel_url: None,
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.update_due = Some(due);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_update(mut self, update: impl Into<String>) -> Self {
        self.update = Some(update.into());
        self
    }

    pub fn waiting_on_client(mut self) -> Self {
        self.with_client = true;
        self
    }

    /// "SKY 014 Brand Refresh".
    pub fn title(&self) -> String {
        format!("{} {}", self.job_number, self.job_name)
    }
}
