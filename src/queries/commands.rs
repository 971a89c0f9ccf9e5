// src/queries/commands.rs
//
// Mutation command parsing
//
// Shape validation happens here, as pure functions from raw input to a
// typed command or `BadRequest`. Existence checks never run against
// malformed input because the services only ever see parsed commands.

use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Parse a raw path segment as a positive integer id.
pub fn parse_id(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest),
    }
}

/// A validated vote delta for PATCH /reviews/{id}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteUpdate {
    pub inc_votes: i64,
}

impl VoteUpdate {
    /// `inc_votes` must be present and a JSON integer. There is no default:
    /// a missing key is malformed input, not a no-op.
    pub fn from_body(body: &Value) -> AppResult<Self> {
        let inc_votes = body
            .get("inc_votes")
            .and_then(Value::as_i64)
            .ok_or(AppError::BadRequest)?;

        Ok(Self { inc_votes })
    }
}

/// A validated comment-creation request for POST /reviews/{id}/comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

impl NewComment {
    /// Both `author` and `body` must be present, strings, and non-empty.
    pub fn from_body(body: &Value) -> AppResult<Self> {
        let author = required_string(body, "author")?;
        let text = required_string(body, "body")?;

        Ok(Self {
            author,
            body: text,
        })
    }
}

fn required_string(body: &Value, key: &str) -> AppResult<String> {
    let value = body
        .get(key)
        .and_then(Value::as_str)
        .ok_or(AppError::BadRequest)?;

    if value.trim().is_empty() {
        return Err(AppError::BadRequest);
    }

    Ok(value.to_string())
}
