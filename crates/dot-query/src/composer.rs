//! Response composition, one composer per request kind.
//!
//! Texts are fixed templates; follow-up prompts come from the tables in
//! [`prompts`], never computed from the results.

use chrono::{Duration, NaiveDate};

use dot_protocol::{
    Client, CoreRequest, DateRange, Job, JobStatus, ResolvedQuery, ResponseDescriptor,
    ResponseKind,
};

use crate::engine::{Disambiguation, JobResolution, disambiguate};

/// Follow-up prompt table, one entry per composer branch.
pub mod prompts {
    pub const DUE_NEXT_EMPTY: &[&str] = &["What's due this week?", "Show me WIP"];
    pub const DUE_NEXT: &[&str] = &["What's due today?", "What's due this week?"];
    pub const DUE_TODAY_EMPTY: &[&str] = &["What's due this week?", "What's due next?"];
    pub const DUE_TODAY: &[&str] = &["What's due this week?", "What's with client?"];
    pub const DUE_WEEK_EMPTY: &[&str] = &["What's due next?", "Show me WIP"];
    pub const DUE_WEEK: &[&str] = &["What's due today?", "What's with client?"];
    pub const CLIENT_PICKER: &[&str] = &["Show all jobs", "What's due today?"];
    pub const NO_MATCH: &[&str] = &["What's due today?", "Another client"];
    pub const SINGLE_MATCH: &[&str] = &["Make an update", "What's due next?"];
    pub const CANDIDATES: &[&str] = &["Show all jobs", "Make an update"];
    pub const JOB_LIST: &[&str] = &["Another client", "What's with client?", "What's due this week?"];
    pub const JOB_LIST_EMPTY: &[&str] = &["Another client", "What's with client?"];
    pub const UPDATE: &[&str] = &["Show me WIP", "What's due today?"];
    pub const TRACKER: &[&str] = &["Show me WIP"];
    pub const HELP: &[&str] = &["Show me WIP", "What's due today?", "Make an update"];
    pub const FALLBACK: &[&str] = &["Show me WIP", "What's due today?", "What can Dot do?"];
}

const TRACKER_TEXT: &str =
    "The Tracker is coming soon! 🚀 For now, I can help you with WIP and project updates.";

const HELP_TEXT: &str = "I'm Dot, your project assistant! I can help you:\n\
    • Check on jobs and client work\n\
    • See what's due or overdue\n\
    • Find a specific job\n\
    • Make quick updates\n\
    Just ask me anything about your projects!";

const FALLBACK_TEXT: &str = "I'm not sure how to help with that yet. Try asking about:";

/// Build the response for a resolved query and its selected jobs.
pub fn compose(
    query: &ResolvedQuery,
    resolution: &JobResolution<'_>,
    clients: &[Client],
    today: NaiveDate,
) -> ResponseDescriptor {
    let client = query
        .modifiers
        .client
        .as_deref()
        .map(|code| client_name(clients, code));

    match query.core_request {
        CoreRequest::Due => compose_due(query, resolution, client, today),
        CoreRequest::Find => compose_find(query, resolution, client),
        CoreRequest::Update => compose_update(client),
        CoreRequest::Tracker => {
            ResponseDescriptor::new(ResponseKind::Info, TRACKER_TEXT).with_prompts(prompts::TRACKER)
        }
        CoreRequest::Help => {
            ResponseDescriptor::new(ResponseKind::Info, HELP_TEXT).with_prompts(prompts::HELP)
        }
        CoreRequest::None => ResponseDescriptor::new(ResponseKind::Info, FALLBACK_TEXT)
            .with_prompts(prompts::FALLBACK),
    }
}

fn compose_due(
    query: &ResolvedQuery,
    resolution: &JobResolution<'_>,
    client: Option<&str>,
    today: NaiveDate,
) -> ResponseDescriptor {
    let jobs = filtered(resolution);
    let suffix = client.map(|name| format!(" for {name}")).unwrap_or_default();

    match query.modifiers.date_range.unwrap_or(DateRange::Today) {
        DateRange::Next => match jobs.first() {
            None => ResponseDescriptor::new(
                ResponseKind::Empty,
                format!("No upcoming deadlines{suffix}."),
            )
            .with_prompts(prompts::DUE_NEXT_EMPTY),
            Some(job) => ResponseDescriptor::new(
                ResponseKind::SingleJob,
                format!(
                    "Next up{suffix}: **{}**, due {}.",
                    job.title(),
                    due_label(job.update_due, today)
                ),
            )
            .with_jobs([*job])
            .with_prompts(prompts::DUE_NEXT),
        },
        range => {
            let (window, empty_window, empty_prompts, list_prompts) = match range {
                DateRange::Week => (
                    "due this week",
                    "due this week",
                    prompts::DUE_WEEK_EMPTY,
                    prompts::DUE_WEEK,
                ),
                _ => (
                    "due today or overdue",
                    "due today",
                    prompts::DUE_TODAY_EMPTY,
                    prompts::DUE_TODAY,
                ),
            };
            if jobs.is_empty() {
                return ResponseDescriptor::new(
                    ResponseKind::Empty,
                    format!("Nothing {empty_window}{suffix}! 🎉"),
                )
                .with_prompts(empty_prompts);
            }
            ResponseDescriptor::new(
                ResponseKind::JobList,
                format!("{} {window}{suffix}:", count_jobs(jobs.len())),
            )
            .with_jobs(jobs.iter().copied())
            .with_prompts(list_prompts)
        }
    }
}

fn compose_find(
    query: &ResolvedQuery,
    resolution: &JobResolution<'_>,
    client: Option<&str>,
) -> ResponseDescriptor {
    let Some(client) = client else {
        return ResponseDescriptor::new(ResponseKind::ClientPicker, "Which client?")
            .with_prompts(prompts::CLIENT_PICKER);
    };

    match resolution {
        JobResolution::Search { ranked, fallback } => match disambiguate(ranked) {
            Disambiguation::NoMatch => ResponseDescriptor::new(
                ResponseKind::JobList,
                format!(
                    "I couldn't find a match for \"{}\" in {client}. Here's everything that's on:",
                    query.search_terms.join(" ")
                ),
            )
            .with_jobs(fallback.iter().copied())
            .with_prompts(prompts::NO_MATCH),
            Disambiguation::Confident(job) => ResponseDescriptor::new(
                ResponseKind::SingleJob,
                format!("I think you mean **{}**:", job.title()),
            )
            .with_jobs([job])
            .with_prompts(prompts::SINGLE_MATCH),
            Disambiguation::Candidates(candidates) => ResponseDescriptor::new(
                ResponseKind::Candidates,
                format!("I found a few possible matches for {client}. Which one?"),
            )
            .with_jobs(candidates)
            .with_prompts(prompts::CANDIDATES),
        },
        _ => {
            let jobs = filtered(resolution);
            if jobs.is_empty() {
                return ResponseDescriptor::new(
                    ResponseKind::Empty,
                    format!("No {} jobs found for {client}.", list_heading(query)),
                )
                .with_prompts(prompts::JOB_LIST_EMPTY);
            }
            let text = if query.modifiers.with_client {
                format!("Here's what's with {client}:")
            } else if query.modifiers.status == JobStatus::InProgress {
                format!("Here's what's on for {client}:")
            } else {
                format!("Here are the {} jobs for {client}:", list_heading(query))
            };
            ResponseDescriptor::new(ResponseKind::JobList, text)
                .with_jobs(jobs.iter().copied())
                .with_prompts(prompts::JOB_LIST)
        }
    }
}

fn compose_update(client: Option<&str>) -> ResponseDescriptor {
    let text = match client {
        Some(name) => format!("Which {name} job do you want to update?"),
        None => "Which job do you want to update?".to_string(),
    };
    ResponseDescriptor::new(ResponseKind::Clarify, text).with_prompts(prompts::UPDATE)
}

fn filtered<'r, 'a>(resolution: &'r JobResolution<'a>) -> &'r [&'a Job] {
    match resolution {
        JobResolution::Filtered(jobs) => jobs.as_slice(),
        _ => &[],
    }
}

fn client_name<'c>(clients: &'c [Client], code: &'c str) -> &'c str {
    clients
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.name.as_str())
        .unwrap_or(code)
}

/// "active" for the default view, otherwise the status ("on hold").
fn list_heading(query: &ResolvedQuery) -> String {
    match query.modifiers.status {
        JobStatus::InProgress => "active".to_string(),
        status => status.describe(),
    }
}

fn count_jobs(n: usize) -> String {
    if n == 1 {
        "1 job".to_string()
    } else {
        format!("{n} jobs")
    }
}

/// Human label for a due date relative to `today`.
pub fn due_label(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "TBC".to_string(),
        Some(date) if date == today => "Today".to_string(),
        Some(date) if date == today + Duration::days(1) => "Tomorrow".to_string(),
        Some(date) if date < today => format!("Overdue ({})", date.format("%a %-d %b")),
        Some(date) => date.format("%a %-d %b").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScoredJob;
    use dot_protocol::ResolvedModifiers;

    fn today() -> NaiveDate {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()
    }

    fn clients() -> Vec<Client> {
        vec![Client::new("SKY", "Sky"), Client::new("TOW", "Tower")]
    }

    fn query(core_request: CoreRequest, client: Option<&str>) -> ResolvedQuery {
        ResolvedQuery {
            core_request,
            modifiers: ResolvedModifiers {
                client: client.map(String::from),
                status: JobStatus::InProgress,
                with_client: false,
                date_range: (core_request == CoreRequest::Due).then_some(DateRange::Today),
            },
            search_terms: Vec::new(),
            raw: String::new(),
        }
    }

    fn compose_with(q: &ResolvedQuery, resolution: JobResolution<'_>) -> ResponseDescriptor {
        compose(q, &resolution, &clients(), today())
    }

    fn numbers(resp: &ResponseDescriptor) -> Vec<&str> {
        resp.jobs.iter().map(|j| j.job_number.as_str()).collect()
    }

    fn assert_prompts_sane(resp: &ResponseDescriptor) {
        assert!(
            (1..=3).contains(&resp.prompts.len()),
            "expected 1-3 prompts, got {:?}",
            resp.prompts
        );
    }

    // ── Due ─────────────────────────────────────────────────────

    #[test]
    fn due_today_lists_jobs_with_count() {
        let jobs = vec![
            Job::new("TOW 083", "TOW", "Claims Process"),
            Job::new("TOW 087", "TOW", "Policy Docs"),
        ];
        let q = query(CoreRequest::Due, Some("TOW"));
        let resp = compose_with(&q, JobResolution::Filtered(jobs.iter().collect()));
        assert_eq!(resp.kind, ResponseKind::JobList);
        assert_eq!(resp.text, "2 jobs due today or overdue for Tower:");
        assert_eq!(numbers(&resp), vec!["TOW 083", "TOW 087"]);
        assert_eq!(resp.prompts, prompts::DUE_TODAY);
    }

    #[test]
    fn due_week_label_reflects_range() {
        let jobs = vec![Job::new("SKY 014", "SKY", "Brand Refresh")];
        let mut q = query(CoreRequest::Due, None);
        q.modifiers.date_range = Some(DateRange::Week);
        let resp = compose_with(&q, JobResolution::Filtered(jobs.iter().collect()));
        assert_eq!(resp.text, "1 job due this week:");
        assert_eq!(resp.prompts, prompts::DUE_WEEK);
    }

    #[test]
    fn due_empty_is_celebratory() {
        let q = query(CoreRequest::Due, Some("SKY"));
        let resp = compose_with(&q, JobResolution::Filtered(Vec::new()));
        assert_eq!(resp.kind, ResponseKind::Empty);
        assert_eq!(resp.text, "Nothing due today for Sky! 🎉");
        assert!(resp.jobs.is_empty());
    }

    #[test]
    fn due_next_picks_the_earliest_only() {
        let jobs = vec![
            Job::new("SKY 014", "SKY", "Brand Refresh").with_due(today() + Duration::days(2)),
            Job::new("SKY 016", "SKY", "Q1 Campaign").with_due(today() + Duration::days(5)),
        ];
        let mut q = query(CoreRequest::Due, Some("SKY"));
        q.modifiers.date_range = Some(DateRange::Next);
        let resp = compose_with(&q, JobResolution::Filtered(jobs.iter().collect()));
        assert_eq!(resp.kind, ResponseKind::SingleJob);
        assert_eq!(numbers(&resp), vec!["SKY 014"]);
        assert_eq!(
            resp.text,
            "Next up for Sky: **SKY 014 Brand Refresh**, due Fri 13 Mar."
        );
    }

    #[test]
    fn due_next_empty() {
        let mut q = query(CoreRequest::Due, None);
        q.modifiers.date_range = Some(DateRange::Next);
        let resp = compose_with(&q, JobResolution::Filtered(Vec::new()));
        assert_eq!(resp.text, "No upcoming deadlines.");
        assert_eq!(resp.prompts, prompts::DUE_NEXT_EMPTY);
    }

    // ── Find ────────────────────────────────────────────────────

    #[test]
    fn find_without_client_asks_for_one() {
        let q = query(CoreRequest::Find, None);
        let resp = compose_with(&q, JobResolution::NotApplicable);
        assert_eq!(resp.kind, ResponseKind::ClientPicker);
        assert!(resp.jobs.is_empty());
        assert_eq!(resp.text, "Which client?");
    }

    #[test]
    fn find_confident_match() {
        let jobs = vec![
            Job::new("SKY 014", "SKY", "Brand Refresh"),
            Job::new("SKY 017", "SKY", "Social Templates"),
        ];
        let mut q = query(CoreRequest::Find, Some("SKY"));
        q.search_terms = vec!["brand".into(), "refresh".into()];
        let resolution = JobResolution::Search {
            ranked: vec![ScoredJob { job: &jobs[0], score: 20 }],
            fallback: jobs.iter().collect(),
        };
        let resp = compose_with(&q, resolution);
        assert_eq!(resp.kind, ResponseKind::SingleJob);
        assert_eq!(resp.text, "I think you mean **SKY 014 Brand Refresh**:");
        assert_eq!(numbers(&resp), vec!["SKY 014"]);
    }

    #[test]
    fn find_ambiguous_offers_top_three() {
        let jobs: Vec<Job> = (1..=4)
            .map(|n| Job::new(format!("SKY 00{n}"), "SKY", "Report"))
            .collect();
        let mut q = query(CoreRequest::Find, Some("SKY"));
        q.search_terms = vec!["report".into()];
        let resolution = JobResolution::Search {
            ranked: jobs.iter().map(|job| ScoredJob { job, score: 10 }).collect(),
            fallback: Vec::new(),
        };
        let resp = compose_with(&q, resolution);
        assert_eq!(resp.kind, ResponseKind::Candidates);
        assert_eq!(numbers(&resp), vec!["SKY 001", "SKY 002", "SKY 003"]);
    }

    #[test]
    fn find_no_match_falls_back_to_client_jobs() {
        let jobs = vec![Job::new("SKY 014", "SKY", "Brand Refresh")];
        let mut q = query(CoreRequest::Find, Some("SKY"));
        q.search_terms = vec!["invoice".into()];
        let resolution = JobResolution::Search {
            ranked: Vec::new(),
            fallback: jobs.iter().collect(),
        };
        let resp = compose_with(&q, resolution);
        assert_eq!(resp.kind, ResponseKind::JobList);
        assert!(resp.text.starts_with("I couldn't find a match for \"invoice\" in Sky."));
        assert_eq!(numbers(&resp), vec!["SKY 014"]);
    }

    #[test]
    fn find_lists_client_jobs() {
        let jobs = vec![Job::new("TOW 083", "TOW", "Claims Process")];
        let q = query(CoreRequest::Find, Some("TOW"));
        let resp = compose_with(&q, JobResolution::Filtered(jobs.iter().collect()));
        assert_eq!(resp.kind, ResponseKind::JobList);
        assert_eq!(resp.text, "Here's what's on for Tower:");
        assert_eq!(resp.prompts, prompts::JOB_LIST);
    }

    #[test]
    fn find_list_mentions_explicit_status() {
        let jobs = vec![Job::new("TOW 083", "TOW", "Claims Process").with_status(JobStatus::OnHold)];
        let mut q = query(CoreRequest::Find, Some("TOW"));
        q.modifiers.status = JobStatus::OnHold;
        let resp = compose_with(&q, JobResolution::Filtered(jobs.iter().collect()));
        assert_eq!(resp.text, "Here are the on hold jobs for Tower:");
    }

    #[test]
    fn find_list_empty() {
        let q = query(CoreRequest::Find, Some("TOW"));
        let resp = compose_with(&q, JobResolution::Filtered(Vec::new()));
        assert_eq!(resp.kind, ResponseKind::Empty);
        assert_eq!(resp.text, "No active jobs found for Tower.");
    }

    #[test]
    fn unknown_client_code_is_shown_verbatim() {
        let q = query(CoreRequest::Find, Some("ZZZ"));
        let resp = compose_with(&q, JobResolution::Filtered(Vec::new()));
        assert_eq!(resp.text, "No active jobs found for ZZZ.");
    }

    // ── Informational ───────────────────────────────────────────

    #[test]
    fn update_asks_which_job() {
        let resp = compose_with(&query(CoreRequest::Update, Some("SKY")), JobResolution::NotApplicable);
        assert_eq!(resp.kind, ResponseKind::Clarify);
        assert_eq!(resp.text, "Which Sky job do you want to update?");
        assert!(resp.jobs.is_empty());

        let resp = compose_with(&query(CoreRequest::Update, None), JobResolution::NotApplicable);
        assert_eq!(resp.text, "Which job do you want to update?");
    }

    #[test]
    fn none_is_help_shaped() {
        let help = compose_with(&query(CoreRequest::Help, None), JobResolution::NotApplicable);
        let none = compose_with(&query(CoreRequest::None, None), JobResolution::NotApplicable);
        assert_eq!(help.kind, none.kind);
        assert!(help.jobs.is_empty() && none.jobs.is_empty());
        assert!(!none.prompts.is_empty());
    }

    #[test]
    fn every_branch_has_one_to_three_prompts() {
        for request in [
            CoreRequest::Due,
            CoreRequest::Find,
            CoreRequest::Update,
            CoreRequest::Tracker,
            CoreRequest::Help,
            CoreRequest::None,
        ] {
            for client in [None, Some("SKY")] {
                let resp = compose_with(&query(request, client), JobResolution::Filtered(Vec::new()));
                assert_prompts_sane(&resp);
            }
        }
    }

    // ── Due labels ──────────────────────────────────────────────

    #[test]
    fn due_labels() {
        assert_eq!(due_label(None, today()), "TBC");
        assert_eq!(due_label(Some(today()), today()), "Today");
        assert_eq!(due_label(Some(today() + Duration::days(1)), today()), "Tomorrow");
        assert_eq!(
            due_label(Some(today() - Duration::days(2)), today()),
            "Overdue (Mon 9 Mar)"
        );
        assert_eq!(
            due_label(Some(today() + Duration::days(7)), today()),
            "Wed 18 Mar"
        );
    }
}
