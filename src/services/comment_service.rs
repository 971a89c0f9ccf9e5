// src/services/comment_service.rs
//
// Comment reads and the integrity-checked mutations.
//
// Existence checks run in a fixed order: the review first, then the
// author. A well-formed foreign key that does not resolve is always
// NotFound, never BadRequest.

use std::sync::Arc;

use crate::domain::Comment;
use crate::error::{AppError, AppResult};
use crate::queries::NewComment;
use crate::repositories::{CommentRepository, ReviewRepository, UserRepository};

pub struct CommentService {
    comment_repo: Arc<dyn CommentRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl CommentService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comment_repo,
            review_repo,
            user_repo,
        }
    }

    /// Comments for one review, most recent first.
    /// A review with no comments is an empty list, not an error.
    pub fn list_comments(&self, review_id: i64) -> AppResult<Vec<Comment>> {
        if !self.review_repo.exists(review_id)? {
            return Err(AppError::NotFound);
        }

        self.comment_repo.list_for_review(review_id)
    }

    /// Create a comment with a fresh identity, zero votes and the current
    /// timestamp, after both referenced entities have been verified.
    pub fn create_comment(&self, review_id: i64, request: NewComment) -> AppResult<Comment> {
        if !self.review_repo.exists(review_id)? {
            return Err(AppError::NotFound);
        }
        if !self.user_repo.exists(&request.author)? {
            return Err(AppError::NotFound);
        }

        self.comment_repo
            .insert(&Comment::new(request.author, request.body, review_id))
    }

    /// Remove a comment by id. Missing comment is NotFound.
    pub fn delete_comment(&self, comment_id: i64) -> AppResult<()> {
        self.comment_repo.delete(comment_id)
    }
}
