//! Client resolution: which client, if any, does a query mention?

use dot_protocol::Client;

/// Finds the client a query refers to.
///
/// The parser only depends on this trait, so a tokenising or fuzzy matcher
/// can replace the substring matcher without touching intent logic.
pub trait ClientMatcher: Send + Sync {
    /// Return the client mentioned in `query`, if any. `query` is already
    /// case-folded; `clients` is in caller-defined priority order.
    fn resolve<'a>(&self, query: &str, clients: &'a [Client]) -> Option<&'a Client>;
}

/// Greedy substring matcher: the first client whose lowercase name or code
/// occurs anywhere in the query wins.
///
/// No word boundaries are respected, so a code like "ONE" also matches
/// "done" or "phone". Callers that care must order clients accordingly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl ClientMatcher for SubstringMatcher {
    fn resolve<'a>(&self, query: &str, clients: &'a [Client]) -> Option<&'a Client> {
        clients.iter().find(|client| {
            let name = client.name.trim().to_lowercase();
            let code = client.code.trim().to_lowercase();
            (!name.is_empty() && query.contains(&name)) || (!code.is_empty() && query.contains(&code))
        })
    }
}

/// Resolve a client from raw text using [`SubstringMatcher`].
pub fn resolve_client<'a>(query: &str, clients: &'a [Client]) -> Option<&'a Client> {
    SubstringMatcher.resolve(&query.to_lowercase(), clients)
}
