// src/error/mod.rs
//
// Error module
//
// Two user-facing kinds only: BadRequest (malformed input) and NotFound
// (well-formed input referencing a missing entity). Everything else is an
// internal failure surfaced as a 500 at the HTTP boundary.

pub mod types;

pub use types::{AppError, AppResult};
