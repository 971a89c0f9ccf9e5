// src/services/mod.rs
//
// Service layer
//
// Services own the two-phase mutation contract: commands arriving here are
// already shape-validated, so the remaining job is referential existence
// and orchestration of repository calls. Failure classification happens
// exactly once, at the check that detects it.

pub mod catalog_service;
pub mod comment_service;
pub mod review_service;

pub use catalog_service::CatalogService;
pub use comment_service::CommentService;
pub use review_service::ReviewService;
