// src/repositories/comment_repository.rs
//
// Comment persistence

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::Comment;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository: Send + Sync {
    /// Comments for one review, most recent first.
    fn list_for_review(&self, review_id: i64) -> AppResult<Vec<Comment>>;
    /// Insert and return the stored record with its assigned identity.
    fn insert(&self, comment: &Comment) -> AppResult<Comment>;
    /// Delete by id; a missing comment is NotFound.
    fn delete(&self, comment_id: i64) -> AppResult<()>;
    fn exists(&self, comment_id: i64) -> AppResult<bool>;
}

pub struct SqliteCommentRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCommentRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: &Row) -> Result<Comment, rusqlite::Error> {
        let created_at_str: String = row.get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Comment {
            comment_id: row.get("comment_id")?,
            body: row.get("body")?,
            votes: row.get("votes")?,
            author: row.get("author")?,
            review_id: row.get("review_id")?,
            created_at,
        })
    }
}

impl CommentRepository for SqliteCommentRepository {
    fn list_for_review(&self, review_id: i64) -> AppResult<Vec<Comment>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT comment_id, body, votes, author, review_id, created_at
             FROM comments
             WHERE review_id = ?1
             ORDER BY created_at DESC",
        )?;

        let comments: Vec<Comment> = stmt
            .query_map(params![review_id], Self::row_to_comment)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(comments)
    }

    fn insert(&self, comment: &Comment) -> AppResult<Comment> {
        let conn = self.pool.get()?;

        // Millisecond precision with a Z suffix keeps stored timestamps
        // uniform, so lexicographic ORDER BY equals chronological order.
        let created_at = comment
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        conn.execute(
            "INSERT INTO comments (body, votes, author, review_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                comment.body,
                comment.votes,
                comment.author,
                comment.review_id,
                created_at,
            ],
        )?;

        let comment_id = conn.last_insert_rowid();

        Ok(Comment {
            comment_id,
            ..comment.clone()
        })
    }

    fn delete(&self, comment_id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "DELETE FROM comments WHERE comment_id = ?1",
            params![comment_id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    fn exists(&self, comment_id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM comments WHERE comment_id = ?1",
            params![comment_id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
