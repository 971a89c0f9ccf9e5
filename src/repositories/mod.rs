// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod category_repository;
pub mod comment_repository;
pub mod review_repository;
pub mod user_repository;

pub use category_repository::{CategoryRepository, SqliteCategoryRepository};
pub use comment_repository::{CommentRepository, SqliteCommentRepository};
pub use review_repository::{ReviewRepository, SqliteReviewRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::db::{create_connection_pool, initialize_database, load_fixture_data, ConnectionPool};

    /// A pooled temp-file database with schema and fixture data loaded.
    /// The TempDir must outlive the pool, so both are returned.
    pub(crate) fn fixture_pool() -> (Arc<ConnectionPool>, TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = create_connection_pool(&dir.path().join("boardhub-test.db"), 4).expect("pool");

        {
            let conn = pool.get().expect("conn");
            initialize_database(&conn).expect("schema");
            load_fixture_data(&conn).expect("fixture");
        }

        (Arc::new(pool), dir)
    }
}
