// src/repositories/review_repository.rs
//
// Review persistence
//
// The listing join computes comment_count live on every read; the vote
// update is a single atomic UPDATE expression so concurrent deltas on the
// same review both land.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::Review;
use crate::error::{AppError, AppResult};
use crate::queries::ReviewListing;

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    fn list(&self, listing: &ReviewListing) -> AppResult<Vec<Review>>;
    fn get_by_id(&self, review_id: i64) -> AppResult<Option<Review>>;
    /// Apply `votes = votes + delta` in one statement.
    /// Returns false when no review with that id exists.
    fn add_votes(&self, review_id: i64, delta: i64) -> AppResult<bool>;
    fn exists(&self, review_id: i64) -> AppResult<bool>;
}

pub struct SqliteReviewRepository {
    pool: Arc<ConnectionPool>,
}

const SELECT_WITH_COMMENT_COUNT: &str = "SELECT r.review_id, r.title, r.designer, r.owner, r.review_img_url,
            r.review_body, r.category, r.created_at, r.votes,
            COUNT(c.comment_id) AS comment_count
     FROM reviews r
     LEFT JOIN comments c ON c.review_id = r.review_id";

impl SqliteReviewRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &Row) -> Result<Review, rusqlite::Error> {
        let created_at_str: String = row.get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Review {
            review_id: row.get("review_id")?,
            title: row.get("title")?,
            designer: row.get("designer")?,
            owner: row.get("owner")?,
            review_img_url: row.get("review_img_url")?,
            review_body: row.get("review_body")?,
            category: row.get("category")?,
            created_at,
            votes: row.get("votes")?,
            comment_count: row.get("comment_count")?,
        })
    }
}

impl ReviewRepository for SqliteReviewRepository {
    fn list(&self, listing: &ReviewListing) -> AppResult<Vec<Review>> {
        let conn = self.pool.get()?;

        // Sort column and direction come from closed enums, never from raw
        // input, so interpolating them here cannot inject SQL.
        let sql = match &listing.category {
            Some(_) => format!(
                "{SELECT_WITH_COMMENT_COUNT}
                 WHERE r.category = ?1
                 GROUP BY r.review_id
                 ORDER BY {} {}",
                listing.sort_by.as_sql(),
                listing.order.as_sql(),
            ),
            None => format!(
                "{SELECT_WITH_COMMENT_COUNT}
                 GROUP BY r.review_id
                 ORDER BY {} {}",
                listing.sort_by.as_sql(),
                listing.order.as_sql(),
            ),
        };

        let mut stmt = conn.prepare(&sql)?;

        let reviews: Vec<Review> = match &listing.category {
            Some(slug) => stmt
                .query_map(params![slug], Self::row_to_review)?
                .collect::<Result<Vec<_>, _>>()?,
            None => stmt
                .query_map([], Self::row_to_review)?
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(reviews)
    }

    fn get_by_id(&self, review_id: i64) -> AppResult<Option<Review>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "{SELECT_WITH_COMMENT_COUNT}
             WHERE r.review_id = ?1
             GROUP BY r.review_id"
        ))?;

        match stmt.query_row(params![review_id], Self::row_to_review) {
            Ok(review) => Ok(Some(review)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn add_votes(&self, review_id: i64, delta: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE reviews SET votes = votes + ?1 WHERE review_id = ?2",
            params![delta, review_id],
        )?;

        Ok(rows_affected > 0)
    }

    fn exists(&self, review_id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM reviews WHERE review_id = ?1",
            params![review_id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
