use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A remark attached to a Review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Internal immutable identifier
    pub comment_id: i64,

    /// Comment body text
    pub body: String,

    /// Vote count; signed, no enforced lower bound
    pub votes: i64,

    /// Commenting user (references User by username)
    pub author: String,

    /// The review this comment belongs to
    pub review_id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a brand-new comment for insertion: zero votes, current time.
    /// The final identity is assigned by the store.
    pub fn new(author: String, body: String, review_id: i64) -> Self {
        Self {
            comment_id: 0,
            body,
            votes: 0,
            author,
            review_id,
            created_at: Utc::now(),
        }
    }
}
