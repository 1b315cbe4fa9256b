//! Default resolution: the one place unset modifiers get their values.

use dot_protocol::{
    CoreRequest, DateRange, JobStatus, Modifiers, ParsedQuery, ResolvedModifiers, ResolvedQuery,
};

/// Jobs that are not actively being worked stay hidden unless asked for.
pub const DEFAULT_STATUS: JobStatus = JobStatus::InProgress;

/// The default view is "still with us", not "waiting on the client".
pub const DEFAULT_WITH_CLIENT: bool = false;

pub const DEFAULT_DATE_RANGE: DateRange = DateRange::Today;

/// Fill every unset modifier. Fields that are already set are left alone,
/// so `apply_defaults(apply_defaults(q).into())` equals `apply_defaults(q)`.
pub fn apply_defaults(parsed: ParsedQuery) -> ResolvedQuery {
    let ParsedQuery {
        core_request,
        modifiers,
        search_terms,
        raw,
    } = parsed;
    let Modifiers {
        client,
        status,
        with_client,
        date_range,
    } = modifiers;

    let date_range = match core_request {
        CoreRequest::Due => Some(date_range.unwrap_or(DEFAULT_DATE_RANGE)),
        _ => date_range,
    };

    ResolvedQuery {
        core_request,
        modifiers: ResolvedModifiers {
            client,
            status: status.unwrap_or(DEFAULT_STATUS),
            with_client: with_client.unwrap_or(DEFAULT_WITH_CLIENT),
            date_range,
        },
        search_terms,
        raw,
    }
}
