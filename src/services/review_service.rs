// src/services/review_service.rs
//
// Review reads and the vote mutation.
//
// Input shape is already validated by the time a command reaches this
// service; what happens here is the referential part: resolving a category
// filter against existing slugs and a review id against existing rows.

use std::sync::Arc;

use crate::domain::Review;
use crate::error::{AppError, AppResult};
use crate::queries::{ReviewListing, VoteUpdate};
use crate::repositories::{CategoryRepository, ReviewRepository};

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    category_repo: Arc<dyn CategoryRepository>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        category_repo: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            review_repo,
            category_repo,
        }
    }

    /// Full filtered/sorted listing.
    ///
    /// A well-formed category slug that matches no category is a lookup
    /// miss (NotFound), unlike sort_by/order which fail on syntax alone.
    /// An existing category with zero reviews yields an empty list.
    pub fn list_reviews(&self, listing: &ReviewListing) -> AppResult<Vec<Review>> {
        if let Some(slug) = &listing.category {
            if !self.category_repo.exists(slug)? {
                return Err(AppError::NotFound);
            }
        }

        self.review_repo.list(listing)
    }

    pub fn get_review(&self, review_id: i64) -> AppResult<Review> {
        self.review_repo
            .get_by_id(review_id)?
            .ok_or(AppError::NotFound)
    }

    /// Apply the vote delta atomically and return the updated review
    /// (with its live comment count).
    pub fn update_votes(&self, review_id: i64, update: VoteUpdate) -> AppResult<Review> {
        if !self.review_repo.add_votes(review_id, update.inc_votes)? {
            return Err(AppError::NotFound);
        }

        self.review_repo
            .get_by_id(review_id)?
            .ok_or(AppError::NotFound)
    }
}
