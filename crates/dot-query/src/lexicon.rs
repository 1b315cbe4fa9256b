//! Static keyword sets.
//!
//! All matching is lowercase substring containment against the folded
//! query. Phrases are checked as-is, so "overdue" also satisfies "due".

use dot_protocol::{CoreRequest, DateRange, JobStatus};

pub const HELP_KEYWORDS: &[&str] = &[
    "help",
    "what can dot do",
    "what can you do",
    "about dot",
    "how does this work",
];

pub const TRACKER_KEYWORDS: &[&str] = &["tracker"];

pub const UPDATE_KEYWORDS: &[&str] = &["update", "log progress"];

pub const DUE_KEYWORDS: &[&str] = &["due", "deadline"];

pub const FIND_KEYWORDS: &[&str] = &[
    "wip",
    "job",
    "project",
    "show",
    "find",
    "search",
    "look up",
    "where",
    "what's on",
    "whats on",
    "status",
    "list",
];

/// Intent classification order. The first category with a matching
/// keyword wins.
pub const INTENT_CASCADE: &[(CoreRequest, &[&str])] = &[
    (CoreRequest::Help, HELP_KEYWORDS),
    (CoreRequest::Tracker, TRACKER_KEYWORDS),
    (CoreRequest::Update, UPDATE_KEYWORDS),
    (CoreRequest::Due, DUE_KEYWORDS),
    (CoreRequest::Find, FIND_KEYWORDS),
];

/// Temporal phrases for `Due` queries, checked in order.
pub const DATE_RANGE_PHRASES: &[(DateRange, &[&str])] = &[
    (DateRange::Today, &["today", "now"]),
    (DateRange::Week, &["this week", "week"]),
    (DateRange::Next, &["next"]),
];

/// Status phrases, checked in order.
pub const STATUS_PHRASES: &[(JobStatus, &[&str])] = &[
    (JobStatus::OnHold, &["on hold", "hold"]),
    (JobStatus::Incoming, &["incoming", "new"]),
    (JobStatus::Completed, &["completed", "done"]),
];

pub const WITH_CLIENT_PHRASES: &[&str] = &["with client", "with them", "waiting"];

/// Words dropped from search terms: filler, intent keywords and the
/// vocabulary already consumed by modifiers.
pub const STOP_WORDS: &[&str] = &[
    // filler
    "the", "and", "for", "with", "what", "what's", "whats", "that", "this", "there", "are",
    "any", "all", "can", "you", "please", "give", "get", "got", "have", "has", "our", "your",
    "my", "about", "from", "into", "how", "which", "who", "when", "its", "it's", "latest",
    "current", "tell", "let", "see", "need", "needs", "want", "know", "one", "ones",
    // intent words
    "show", "find", "search", "look", "where", "wip", "job", "jobs", "project", "projects",
    "status", "list", "work", "due", "deadline", "deadlines", "overdue",
    // modifier words
    "today", "now", "week", "next", "hold", "incoming", "new", "completed", "done", "client",
    "clients", "them", "waiting",
];

/// True if `text` contains any of `patterns`.
pub fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// First intent whose keyword set matches, in cascade order.
pub fn classify(text: &str) -> Option<CoreRequest> {
    INTENT_CASCADE
        .iter()
        .find(|(_, keywords)| matches_any(text, keywords))
        .map(|(request, _)| *request)
}

pub fn detect_date_range(text: &str) -> Option<DateRange> {
    DATE_RANGE_PHRASES
        .iter()
        .find(|(_, phrases)| matches_any(text, phrases))
        .map(|(range, _)| *range)
}

pub fn detect_status(text: &str) -> Option<JobStatus> {
    STATUS_PHRASES
        .iter()
        .find(|(_, phrases)| matches_any(text, phrases))
        .map(|(status, _)| *status)
}
