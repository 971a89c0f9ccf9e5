use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rated board-game entry with votes and category.
///
/// Reviews are created externally (seed/import); the only mutation this
/// service performs on them is the atomic vote delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Internal immutable identifier
    pub review_id: i64,

    /// Game title
    pub title: String,

    /// Game designer
    pub designer: String,

    /// Authoring user (references User by username)
    pub owner: String,

    /// Cover image URL
    pub review_img_url: String,

    /// Review body text
    pub review_body: String,

    /// Category (references Category by slug)
    pub category: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Vote count; signed, no enforced lower bound
    pub votes: i64,

    /// Live count of comments attached to this review.
    /// Computed at read time from the comments table, never stored.
    pub comment_count: i64,
}
