// src/application/handlers.rs
//
// HTTP boundary
//
// RULES:
// - Parse path/query/body into typed commands via `queries`
// - Call services
// - Serialize DTOs
// - Never contain business logic

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::application::dto::{CommentDto, ReviewDto};
use crate::application::error_handling::ErrorBody;
use crate::application::state::AppState;
use crate::error::AppError;
use crate::queries::{parse_id, NewComment, ReviewListing, VoteUpdate};

/// Build the full route table over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/reviews", get(get_reviews))
        .route("/reviews/:review_id", get(get_review).patch(patch_review))
        .route(
            "/reviews/:review_id/comments",
            get(get_review_comments).post(post_review_comment),
        )
        .route("/comments/:comment_id", delete(delete_comment))
        .route("/users", get(get_users))
        .fallback(invalid_path)
        .with_state(state)
}

async fn get_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state.catalog_service.list_categories()?;
    Ok(Json(json!({ "categories": categories })))
}

async fn get_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = state.catalog_service.list_users()?;
    Ok(Json(json!({ "users": users })))
}

async fn get_reviews(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, AppError> {
    let listing = ReviewListing::from_params(&params)?;
    let reviews: Vec<ReviewDto> = state
        .review_service
        .list_reviews(&listing)?
        .into_iter()
        .map(ReviewDto::from)
        .collect();

    Ok(Json(json!({ "reviews": reviews })))
}

async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let review_id = parse_id(&review_id)?;
    let review = ReviewDto::from(state.review_service.get_review(review_id)?);

    Ok(Json(json!({ "review": review })))
}

async fn patch_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let review_id = parse_id(&review_id)?;
    // A missing or non-JSON body is treated as an empty object, which the
    // command parser then rejects for its missing inc_votes key.
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    let update = VoteUpdate::from_body(&body)?;

    let review = ReviewDto::from(state.review_service.update_votes(review_id, update)?);

    Ok(Json(json!({ "review": review })))
}

async fn get_review_comments(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let review_id = parse_id(&review_id)?;
    let comments: Vec<CommentDto> = state
        .comment_service
        .list_comments(review_id)?
        .into_iter()
        .map(CommentDto::from)
        .collect();

    Ok(Json(json!({ "comments": comments })))
}

async fn post_review_comment(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = parse_id(&review_id)?;
    let body = body.map(|Json(v)| v).unwrap_or_else(|| json!({}));
    let request = NewComment::from_body(&body)?;

    let comment = CommentDto::from(state.comment_service.create_comment(review_id, request)?);

    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let comment_id = parse_id(&comment_id)?;
    state.comment_service.delete_comment(comment_id)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn invalid_path() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Invalid Path")))
}
