//! Ask Dot API: library crate for the HTTP server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `dot-e2e-tests`) can reach `AppState`, `build_router`, the data
//! sources and the clock.

pub mod clock;
pub mod config;
pub mod error;
pub mod routes;
pub mod source;
pub mod state;
