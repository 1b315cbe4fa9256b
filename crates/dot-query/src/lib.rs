//! Query understanding and job resolution for Ask Dot.
//!
//! Turns free text ("what's due today for Tower?") into a structured query,
//! fills in default filters, selects and ranks jobs from a snapshot, and
//! composes a display-ready [`ResponseDescriptor`](dot_protocol::ResponseDescriptor).
//!
//! Stages, in pipeline order:
//! - [`resolver`]: substring client matching.
//! - [`parser`]: intent classification, modifiers, search terms.
//! - [`defaults`]: fills unset modifiers.
//! - [`engine`]: structured filtering and fuzzy search.
//! - [`composer`]: text, jobs and follow-up prompts.
//!
//! Every stage is a pure, synchronous function of its inputs. The current
//! date is always passed in.

pub mod composer;
pub mod defaults;
pub mod engine;
pub mod lexicon;
pub mod parser;
pub mod pipeline;
pub mod resolver;

pub use composer::compose;
pub use defaults::apply_defaults;
pub use engine::{
    Disambiguation, FilterOptions, JobResolution, ScoredJob, disambiguate, filter_jobs,
    resolve_jobs, search_jobs,
};
pub use parser::{QueryParser, parse};
pub use pipeline::{Pipeline, PipelineOutcome};
pub use resolver::{ClientMatcher, SubstringMatcher, resolve_client};
