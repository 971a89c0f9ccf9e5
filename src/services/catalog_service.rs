// src/services/catalog_service.rs
//
// Read-only catalog lookups: categories and users.

use std::sync::Arc;

use crate::domain::{Category, User};
use crate::error::AppResult;
use crate::repositories::{CategoryRepository, UserRepository};

pub struct CatalogService {
    category_repo: Arc<dyn CategoryRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl CatalogService {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            category_repo,
            user_repo,
        }
    }

    pub fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.category_repo.list_all()
    }

    pub fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.list_all()
    }
}
