// src/application/dto.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are wire-friendly representations
// - Timestamps cross the boundary as RFC3339 strings
// - Conversion FROM domain entities only (never TO)
//
// Category and User carry no timestamps and serialize as-is, so they have
// no DTO counterpart.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Review};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub review_id: i64,
    pub title: String,
    pub designer: String,
    pub owner: String,
    pub review_img_url: String,
    pub review_body: String,
    pub category: String,
    pub created_at: String,
    pub votes: i64,
    pub comment_count: i64,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            review_id: review.review_id,
            title: review.title,
            designer: review.designer,
            owner: review.owner,
            review_img_url: review.review_img_url,
            review_body: review.review_body,
            category: review.category,
            created_at: review
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            votes: review.votes,
            comment_count: review.comment_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub comment_id: i64,
    pub body: String,
    pub votes: i64,
    pub author: String,
    pub review_id: i64,
    pub created_at: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            comment_id: comment.comment_id,
            body: comment.body,
            votes: comment.votes,
            author: comment.author,
            review_id: comment.review_id,
            created_at: comment
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
