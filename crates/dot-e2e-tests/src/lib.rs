//! End-to-end tests for Ask Dot live under `tests/`; this crate has no
//! library code of its own.
