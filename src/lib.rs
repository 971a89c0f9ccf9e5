// src/lib.rs
// BoardHub - Board-game review and comment catalog service
//
// Architecture:
// - Layered: repositories (data mapping) → services (integrity checks)
//   → application (HTTP boundary)
// - Validation first: untrusted listing parameters and mutation bodies
//   become typed commands in `queries` before anything touches the store
// - Explicit: no implicit behavior, no magic

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod queries;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{Category, Comment, Review, User};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, load_fixture_data, ConnectionPool};

// ============================================================================
// PUBLIC API - Queries (validated commands)
// ============================================================================

pub use queries::{parse_id, NewComment, ReviewListing, SortColumn, SortOrder, VoteUpdate};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CategoryRepository, CommentRepository, ReviewRepository, SqliteCategoryRepository,
    SqliteCommentRepository, SqliteReviewRepository, SqliteUserRepository, UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, CommentService, ReviewService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{router, AppState};
pub use config::ServerConfig;
