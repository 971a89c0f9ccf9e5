// src/repositories/user_repository.rs
//
// User persistence (read-only)

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::User;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<User>>;
    fn exists(&self, username: &str) -> AppResult<bool>;
}

pub struct SqliteUserRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
        Ok(User {
            username: row.get("username")?,
            name: row.get("name")?,
            avatar_url: row.get("avatar_url")?,
        })
    }
}

impl UserRepository for SqliteUserRepository {
    fn list_all(&self) -> AppResult<Vec<User>> {
        let conn = self.pool.get()?;

        let mut stmt =
            conn.prepare("SELECT username, name, avatar_url FROM users ORDER BY username")?;

        let users: Vec<User> = stmt
            .query_map([], Self::row_to_user)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    fn exists(&self, username: &str) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM users WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
