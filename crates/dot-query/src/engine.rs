//! Job selection: structured filtering and fuzzy search.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use dot_protocol::{CoreRequest, DateRange, Job, ResolvedModifiers, ResolvedQuery};

/// `Week` covers today plus this many days.
pub const WEEK_HORIZON_DAYS: i64 = 7;

/// Score for a term found in the job name.
pub const NAME_WEIGHT: u32 = 10;
/// Score for a term found in the description.
pub const DESCRIPTION_WEIGHT: u32 = 5;
/// Score for a term found in the latest update.
pub const UPDATE_WEIGHT: u32 = 2;

/// The top search result is a confident pick when it beats the runner-up
/// by more than this factor.
pub const CONFIDENCE_RATIO: f64 = 1.5;

/// Maximum number of candidates offered when no single match is confident.
pub const MAX_CANDIDATES: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Skip the status predicate.
    pub include_all_statuses: bool,
}

/// Jobs matching every active predicate, ordered by due date.
///
/// Predicates: client (when set), status (unless `include_all_statuses`),
/// with-client, and date range (when set). Undated jobs never pass a date
/// range. The sort is stable and puts undated jobs last.
pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    modifiers: &ResolvedModifiers,
    options: FilterOptions,
    today: NaiveDate,
) -> Vec<&'a Job> {
    let mut matched: Vec<&Job> = jobs
        .iter()
        .filter(|job| {
            if let Some(client) = &modifiers.client
                && job.client_code != *client
            {
                return false;
            }
            if !options.include_all_statuses && job.status != modifiers.status {
                return false;
            }
            if job.with_client != modifiers.with_client {
                return false;
            }
            match modifiers.date_range {
                Some(range) => in_range(job.update_due, range, today),
                None => true,
            }
        })
        .collect();
    sort_by_due(&mut matched);
    matched
}

/// Stable ascending sort by `update_due`, undated jobs last.
pub fn sort_by_due(jobs: &mut [&Job]) {
    jobs.sort_by_key(|job| (job.update_due.is_none(), job.update_due));
}

fn in_range(due: Option<NaiveDate>, range: DateRange, today: NaiveDate) -> bool {
    let Some(due) = due else {
        return false;
    };
    match range {
        DateRange::Today => due <= today,
        DateRange::Week => due <= today + Duration::days(WEEK_HORIZON_DAYS),
        DateRange::Next => true,
    }
}

/// A search hit and its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredJob<'a> {
    pub job: &'a Job,
    pub score: u32,
}

/// Relevance of `job` for `terms`: per term, name +10, description +5,
/// update +2 on case-insensitive substring containment, summed.
pub fn score_job(job: &Job, terms: &[String]) -> u32 {
    let name = job.job_name.to_lowercase();
    let description = job.description.as_deref().unwrap_or_default().to_lowercase();
    let update = job.update.as_deref().unwrap_or_default().to_lowercase();

    terms
        .iter()
        .map(|term| term.to_lowercase())
        .map(|term| {
            let mut score = 0;
            if name.contains(&term) {
                score += NAME_WEIGHT;
            }
            if description.contains(&term) {
                score += DESCRIPTION_WEIGHT;
            }
            if update.contains(&term) {
                score += UPDATE_WEIGHT;
            }
            score
        })
        .sum()
}

/// Search one client's jobs, across every status.
///
/// With no terms, the client's full job list comes back in input order
/// with score 0. Otherwise zero-score jobs are dropped and the rest are
/// stable-sorted by descending score.
pub fn search_jobs<'a>(jobs: &'a [Job], client: &str, terms: &[String]) -> Vec<ScoredJob<'a>> {
    let client_jobs = jobs.iter().filter(|job| job.client_code == client);

    if terms.is_empty() {
        return client_jobs.map(|job| ScoredJob { job, score: 0 }).collect();
    }

    let mut scored: Vec<ScoredJob<'a>> = client_jobs
        .map(|job| ScoredJob {
            job,
            score: score_job(job, terms),
        })
        .filter(|hit| hit.score > 0)
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// How confidently a ranked search result points at one job.
#[derive(Debug, Clone, PartialEq)]
pub enum Disambiguation<'a> {
    NoMatch,
    Confident(&'a Job),
    /// Up to [`MAX_CANDIDATES`] jobs, best first.
    Candidates(Vec<&'a Job>),
}

/// Decide between a single confident pick and a short candidate list.
///
/// `ranked` must already be sorted by descending score.
pub fn disambiguate<'a>(ranked: &[ScoredJob<'a>]) -> Disambiguation<'a> {
    match ranked {
        [] => Disambiguation::NoMatch,
        [only] => Disambiguation::Confident(only.job),
        [top, runner_up, ..]
            if f64::from(top.score) > f64::from(runner_up.score) * CONFIDENCE_RATIO =>
        {
            Disambiguation::Confident(top.job)
        }
        _ => Disambiguation::Candidates(
            ranked.iter().take(MAX_CANDIDATES).map(|hit| hit.job).collect(),
        ),
    }
}

/// The job set a composer works from.
#[derive(Debug, Clone, PartialEq)]
pub enum JobResolution<'a> {
    /// The request does not resolve jobs (help, tracker, update, or a
    /// search with no client).
    NotApplicable,
    /// Output of [`filter_jobs`].
    Filtered(Vec<&'a Job>),
    /// Output of [`search_jobs`], plus the client's default list to fall
    /// back on when nothing scores.
    Search {
        ranked: Vec<ScoredJob<'a>>,
        fallback: Vec<&'a Job>,
    },
}

/// Select jobs for a resolved query.
pub fn resolve_jobs<'a>(
    query: &ResolvedQuery,
    jobs: &'a [Job],
    today: NaiveDate,
) -> JobResolution<'a> {
    let modifiers = &query.modifiers;
    match query.core_request {
        CoreRequest::Due => JobResolution::Filtered(filter_jobs(
            jobs,
            modifiers,
            FilterOptions::default(),
            today,
        )),
        CoreRequest::Find => {
            let Some(client) = modifiers.client.as_deref() else {
                return JobResolution::NotApplicable;
            };
            let listed = filter_jobs(jobs, modifiers, FilterOptions::default(), today);
            if query.search_terms.is_empty() {
                JobResolution::Filtered(listed)
            } else {
                JobResolution::Search {
                    ranked: search_jobs(jobs, client, &query.search_terms),
                    fallback: listed,
                }
            }
        }
        CoreRequest::Update | CoreRequest::Tracker | CoreRequest::Help | CoreRequest::None => {
            JobResolution::NotApplicable
        }
    }
}
