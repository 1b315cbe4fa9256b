//! Query parser: free text to [`ParsedQuery`].
//!
//! Resolution runs in a fixed order: client first, then intent by keyword
//! cascade, then the intent-specific extras (date range, search terms),
//! then the intent-independent modifiers (status, with-client).

use dot_protocol::{Client, CoreRequest, DateRange, ParsedQuery};

use crate::lexicon::{self, WITH_CLIENT_PHRASES};
use crate::resolver::{ClientMatcher, SubstringMatcher};

/// Queries shorter than this (after trimming) never fall back to search.
const MIN_FALLBACK_QUERY_LEN: usize = 3;

/// Tokens must be longer than this to count as search terms.
const MIN_TERM_LEN: usize = 2;

/// Rule-based query parser.
pub struct QueryParser {
    matcher: Box<dyn ClientMatcher>,
}

impl QueryParser {
    pub fn new() -> Self {
        Self::with_matcher(Box::new(SubstringMatcher))
    }

    pub fn with_matcher(matcher: Box<dyn ClientMatcher>) -> Self {
        Self { matcher }
    }

    pub fn parse(&self, query: &str, clients: &[Client]) -> ParsedQuery {
        let lower = query.to_lowercase();
        let text = lower.trim();
        let mut parsed = ParsedQuery::new(query);

        let client = self.matcher.resolve(text, clients);
        parsed.modifiers.client = client.map(|c| c.code.clone());

        let mut core_request = lexicon::classify(text);
        if core_request.is_none() && client.is_some() {
            core_request = Some(CoreRequest::Find);
        }

        match core_request {
            Some(CoreRequest::Due) => {
                parsed.modifiers.date_range =
                    Some(lexicon::detect_date_range(text).unwrap_or(DateRange::Today));
            }
            Some(CoreRequest::Find) => {
                if let Some(client) = client {
                    parsed.search_terms = extract_search_terms(text, Some(client));
                }
            }
            None if text.chars().count() >= MIN_FALLBACK_QUERY_LEN => {
                let terms = extract_search_terms(text, None);
                if !terms.is_empty() {
                    core_request = Some(CoreRequest::Find);
                    parsed.search_terms = terms;
                }
            }
            _ => {}
        }
        parsed.core_request = core_request.unwrap_or(CoreRequest::None);

        parsed.modifiers.status = lexicon::detect_status(text);
        if lexicon::matches_any(text, WITH_CLIENT_PHRASES) {
            parsed.modifiers.with_client = Some(true);
        }

        tracing::debug!(
            core_request = ?parsed.core_request,
            client = ?parsed.modifiers.client,
            terms = parsed.search_terms.len(),
            "query parsed"
        );
        parsed
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse with the default substring client matcher.
pub fn parse(query: &str, clients: &[Client]) -> ParsedQuery {
    QueryParser::new().parse(query, clients)
}

/// Split a folded query into search terms.
///
/// The client's name and code are cut out first (longer string first, so a
/// code that prefixes the name cannot leave a fragment behind). Tokens are
/// whitespace-separated, edge punctuation is trimmed, and short tokens and
/// stop words are dropped. Order and duplicates are kept.
pub fn extract_search_terms(text: &str, client: Option<&Client>) -> Vec<String> {
    let mut remaining = text.to_string();
    if let Some(client) = client {
        let mut needles = [client.name.trim().to_lowercase(), client.code.trim().to_lowercase()];
        needles.sort_by_key(|n| std::cmp::Reverse(n.len()));
        for needle in needles.iter().filter(|n| !n.is_empty()) {
            remaining = remaining.replace(needle.as_str(), " ");
        }
    }

    remaining
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|token| token.chars().count() > MIN_TERM_LEN)
        .filter(|token| !lexicon::is_stop_word(token))
        .map(String::from)
        .collect()
}
