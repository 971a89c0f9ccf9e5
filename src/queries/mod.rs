// src/queries/mod.rs
//
// Validation & query-builder layer
//
// CRITICAL RULES:
// - Pure functions: raw request input in, typed command or rejection out
// - Closed whitelists for enumerated parameters; no coercion, no defaults
//   for invalid values (only for absent ones)
// - Nothing here touches the store

pub mod commands;
pub mod listing;

pub use commands::{parse_id, NewComment, VoteUpdate};
pub use listing::{ReviewListing, SortColumn, SortOrder};
