// src/queries/listing.rs
//
// Review-listing query plan
//
// Untrusted `sort_by` / `order` / `category` parameters are validated here,
// before anything reaches the repository layer. Sort columns and order
// tokens are closed sets: anything outside them is rejected, never coerced.
// The category filter is only checked for *syntax* here; whether the slug
// exists is an integrity question answered by the service against the store.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// Columns a listing may be sorted by: every stored Review column plus the
/// derived comment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    ReviewId,
    Title,
    Designer,
    Owner,
    ReviewImgUrl,
    ReviewBody,
    Category,
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "review_id" => Some(Self::ReviewId),
            "title" => Some(Self::Title),
            "designer" => Some(Self::Designer),
            "owner" => Some(Self::Owner),
            "review_img_url" => Some(Self::ReviewImgUrl),
            "review_body" => Some(Self::ReviewBody),
            "category" => Some(Self::Category),
            "created_at" => Some(Self::CreatedAt),
            "votes" => Some(Self::Votes),
            "comment_count" => Some(Self::CommentCount),
            _ => None,
        }
    }

    /// The internal column identifier this external name maps to.
    /// `comment_count` is the aggregate alias; everything else is a
    /// `reviews` table column.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::ReviewId => "r.review_id",
            Self::Title => "r.title",
            Self::Designer => "r.designer",
            Self::Owner => "r.owner",
            Self::ReviewImgUrl => "r.review_img_url",
            Self::ReviewBody => "r.review_body",
            Self::Category => "r.category",
            Self::CreatedAt => "r.created_at",
            Self::Votes => "r.votes",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction. Tokens are case-sensitive exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A validated listing query plan: safe to hand to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewListing {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub category: Option<String>,
}

impl ReviewListing {
    /// Validate raw query-string parameters into a query plan.
    ///
    /// Absent parameters take their defined defaults (`created_at`,
    /// descending, no filter); present-but-invalid parameters are always
    /// rejected with `BadRequest`.
    pub fn from_params(params: &HashMap<String, String>) -> AppResult<Self> {
        let sort_by = match params.get("sort_by") {
            Some(raw) => SortColumn::parse(raw).ok_or(AppError::BadRequest)?,
            None => SortColumn::CreatedAt,
        };

        let order = match params.get("order") {
            Some(raw) => SortOrder::parse(raw).ok_or(AppError::BadRequest)?,
            None => SortOrder::Descending,
        };

        Ok(Self {
            sort_by,
            order,
            category: params.get("category").cloned(),
        })
    }
}
