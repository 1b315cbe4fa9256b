//! Shared data model for Ask Dot.
//!
//! Everything the query pipeline (`dot-query`) and the HTTP service
//! (`dot-api`) exchange lives here: clients, jobs, the parsed / resolved
//! query shapes and the response descriptor handed to a renderer.

pub mod client;
pub mod dates;
pub mod job;
pub mod query;
pub mod response;
pub mod snapshot;

pub use client::*;
pub use job::*;
pub use query::*;
pub use response::*;
pub use snapshot::*;
