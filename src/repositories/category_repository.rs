// src/repositories/category_repository.rs
//
// Category persistence (read-only)

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::Category;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Category>>;
    fn exists(&self, slug: &str) -> AppResult<bool>;
}

pub struct SqliteCategoryRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &Row) -> Result<Category, rusqlite::Error> {
        Ok(Category {
            slug: row.get("slug")?,
            description: row.get("description")?,
        })
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn list_all(&self) -> AppResult<Vec<Category>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT slug, description FROM categories ORDER BY slug")?;

        let categories: Vec<Category> = stmt
            .query_map([], Self::row_to_category)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    fn exists(&self, slug: &str) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM categories WHERE slug = ?1",
            params![slug],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
