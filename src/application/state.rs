// src/application/state.rs

use std::sync::Arc;

use crate::services::{CatalogService, CommentService, ReviewService};

/// Shared application state handed to every handler.
/// All fields are Arc-wrapped for thread-safe sharing across requests;
/// services are initialized in main.rs and passed here.
#[derive(Clone)]
pub struct AppState {
    pub review_service: Arc<ReviewService>,
    pub comment_service: Arc<CommentService>,
    pub catalog_service: Arc<CatalogService>,
}
