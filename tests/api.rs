// tests/api.rs
//
// End-to-end tests over the full router with a seeded on-disk database.
// Each test builds its own app; nothing is shared between tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use boardhub::application::AppState;
use boardhub::db::{create_connection_pool, initialize_database, load_fixture_data};
use boardhub::repositories::{
    SqliteCategoryRepository, SqliteCommentRepository, SqliteReviewRepository,
    SqliteUserRepository,
};
use boardhub::services::{CatalogService, CommentService, ReviewService};

/// Router over a freshly seeded temporary database. The TempDir must stay
/// alive for the duration of the test, so it is returned alongside the app.
fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let pool = Arc::new(
        create_connection_pool(&dir.path().join("test.db"), 2).expect("pool"),
    );

    {
        let conn = pool.get().expect("connection");
        initialize_database(&conn).expect("schema");
        load_fixture_data(&conn).expect("fixture");
    }

    let review_repo: Arc<dyn boardhub::repositories::ReviewRepository> =
        Arc::new(SqliteReviewRepository::new(Arc::clone(&pool)));
    let comment_repo: Arc<dyn boardhub::repositories::CommentRepository> =
        Arc::new(SqliteCommentRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn boardhub::repositories::CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let user_repo: Arc<dyn boardhub::repositories::UserRepository> =
        Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));

    let state = AppState {
        review_service: Arc::new(ReviewService::new(
            Arc::clone(&review_repo),
            Arc::clone(&category_repo),
        )),
        comment_service: Arc::new(CommentService::new(
            comment_repo,
            review_repo,
            Arc::clone(&user_repo),
        )),
        catalog_service: Arc::new(CatalogService::new(category_repo, user_repo)),
    };

    (boardhub::application::router(state), dir)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_response(response).await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    read_response(response).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ---------------------------------------------------------------------------
// Catalog endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_categories() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 4);
    for category in categories {
        assert!(category["slug"].is_string());
        assert!(category["description"].is_string());
    }
}

#[tokio::test]
async fn test_get_users() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 4);
    for user in users {
        assert!(user["username"].is_string());
        assert!(user["name"].is_string());
        assert!(user["avatar_url"].is_string());
    }
}

#[tokio::test]
async fn test_invalid_path() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/not-a-real-route").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Invalid Path");
}

// ---------------------------------------------------------------------------
// GET /reviews/:review_id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_review_by_id() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews/1").await;

    assert_eq!(status, StatusCode::OK);
    let review = &body["review"];
    assert_eq!(review["review_id"], 1);
    assert_eq!(review["title"], "Agricola");
    assert_eq!(review["designer"], "Uwe Rosenberg");
    assert_eq!(review["owner"], "mallionaire");
    assert_eq!(review["category"], "euro game");
    assert_eq!(review["votes"], 1);
    assert_eq!(review["comment_count"], 0);
    assert!(review["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_get_review_includes_live_comment_count() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["comment_count"], 3);
}

#[tokio::test]
async fn test_get_review_malformed_id() {
    let (app, _dir) = test_app();

    for bad in ["notAnId", "0", "-5", "1.5"] {
        let (status, body) = get(&app, &format!("/reviews/{}", bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {:?}", bad);
        assert_eq!(body["msg"], "Bad Request");
    }
}

#[tokio::test]
async fn test_get_review_missing_id() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

// ---------------------------------------------------------------------------
// PATCH /reviews/:review_id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_patch_review_increments_votes() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(&app, "PATCH", "/reviews/2", json!({ "inc_votes": 1 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["review_id"], 2);
    assert_eq!(body["review"]["votes"], 6);
}

#[tokio::test]
async fn test_patch_review_decrement_can_go_negative() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(&app, "PATCH", "/reviews/1", json!({ "inc_votes": -10 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["review"]["votes"], -9);
}

#[tokio::test]
async fn test_patch_review_persists() {
    let (app, _dir) = test_app();
    send_json(&app, "PATCH", "/reviews/2", json!({ "inc_votes": 1 })).await;

    let (_, body) = get(&app, "/reviews/2").await;
    assert_eq!(body["review"]["votes"], 6);
}

#[tokio::test]
async fn test_patch_review_missing_inc_votes() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(&app, "PATCH", "/reviews/2", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}

#[tokio::test]
async fn test_patch_review_non_integer_inc_votes() {
    let (app, _dir) = test_app();
    let (status, _) = send_json(&app, "PATCH", "/reviews/2", json!({ "inc_votes": "one" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, "PATCH", "/reviews/2", json!({ "inc_votes": 1.5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_review_malformed_id() {
    let (app, _dir) = test_app();
    let (status, _) =
        send_json(&app, "PATCH", "/reviews/notAnId", json!({ "inc_votes": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_review_missing_id() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(&app, "PATCH", "/reviews/999", json!({ "inc_votes": 1 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

// Shape errors win over lookup misses: a bodyless PATCH against a missing
// review is still a 400.
#[tokio::test]
async fn test_patch_review_shape_checked_before_existence() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(&app, "PATCH", "/reviews/999", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}

// ---------------------------------------------------------------------------
// GET /reviews (listing)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_reviews_default_listing() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 13);

    // Default order: created_at descending.
    let timestamps: Vec<&str> = reviews
        .iter()
        .map(|r| r["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
async fn test_get_reviews_sort_by_votes() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?sort_by=votes").await;

    assert_eq!(status, StatusCode::OK);
    let votes: Vec<i64> = body["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["votes"].as_i64().unwrap())
        .collect();
    let mut sorted = votes.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(votes, sorted);
}

#[tokio::test]
async fn test_get_reviews_sort_by_comment_count() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?sort_by=comment_count").await;

    assert_eq!(status, StatusCode::OK);
    let counts: Vec<i64> = body["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["comment_count"].as_i64().unwrap())
        .collect();
    let mut sorted = counts.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted);
    assert_eq!(counts[0], 3);
}

#[tokio::test]
async fn test_get_reviews_ascending_order() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?order=asc").await;

    assert_eq!(status, StatusCode::OK);
    let timestamps: Vec<&str> = body["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
async fn test_get_reviews_invalid_sort_column() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?sort_by=pineapples").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}

#[tokio::test]
async fn test_get_reviews_invalid_order() {
    let (app, _dir) = test_app();
    let (status, _) = get(&app, "/reviews?order=nonexistent").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Order tokens are exact; uppercase variants are rejected.
    let (status, _) = get(&app, "/reviews?order=ASC").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_reviews_filtered_by_category() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?category=social%20deduction").await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 11);
    for review in reviews {
        assert_eq!(review["category"], "social deduction");
    }
}

#[tokio::test]
async fn test_get_reviews_unknown_category() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?category=bread").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

#[tokio::test]
async fn test_get_reviews_empty_category_is_ok() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews?category=children%27s%20games").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// GET /reviews/:review_id/comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_comments_most_recent_first() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews/2/comments").await;

    assert_eq!(status, StatusCode::OK);
    let comments = body["comments"].as_array().unwrap();
    let ids: Vec<i64> = comments
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![5, 1, 4]);
    for comment in comments {
        assert_eq!(comment["review_id"], 2);
        assert!(comment["author"].is_string());
        assert!(comment["body"].is_string());
    }
}

#[tokio::test]
async fn test_get_comments_empty_for_uncommented_review() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews/1/comments").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comments"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_comments_missing_review() {
    let (app, _dir) = test_app();
    let (status, body) = get(&app, "/reviews/999/comments").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

#[tokio::test]
async fn test_get_comments_malformed_review_id() {
    let (app, _dir) = test_app();
    let (status, _) = get(&app, "/reviews/notAnId/comments").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// POST /reviews/:review_id/comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_comment() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/reviews/1/comments",
        json!({ "author": "mallionaire", "body": "Great farming sim" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let comment = &body["comment"];
    assert!(comment["comment_id"].as_i64().unwrap() > 6);
    assert_eq!(comment["author"], "mallionaire");
    assert_eq!(comment["body"], "Great farming sim");
    assert_eq!(comment["review_id"], 1);
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());
}

#[tokio::test]
async fn test_post_comment_updates_comment_count() {
    let (app, _dir) = test_app();
    send_json(
        &app,
        "POST",
        "/reviews/1/comments",
        json!({ "author": "mallionaire", "body": "Great farming sim" }),
    )
    .await;

    let (_, body) = get(&app, "/reviews/1").await;
    assert_eq!(body["review"]["comment_count"], 1);
}

#[tokio::test]
async fn test_post_comment_missing_fields() {
    let (app, _dir) = test_app();

    let cases = [
        json!({}),
        json!({ "author": "mallionaire" }),
        json!({ "body": "no author" }),
        json!({ "author": "mallionaire", "body": "" }),
        json!({ "author": "mallionaire", "body": 42 }),
    ];
    for case in cases {
        let (status, body) = send_json(&app, "POST", "/reviews/1/comments", case.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case {}", case);
        assert_eq!(body["msg"], "Bad Request");
    }
}

#[tokio::test]
async fn test_post_comment_missing_review() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/reviews/999/comments",
        json!({ "author": "mallionaire", "body": "ghost review" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

#[tokio::test]
async fn test_post_comment_unknown_author() {
    let (app, _dir) = test_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/reviews/1/comments",
        json!({ "author": "nobody", "body": "who am I" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

// ---------------------------------------------------------------------------
// DELETE /comments/:comment_id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_comment() {
    let (app, _dir) = test_app();
    let (status, body) = delete(&app, "/comments/2").await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // Repeating the delete is a miss.
    let (status, body) = delete(&app, "/comments/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Not Found");
}

#[tokio::test]
async fn test_delete_comment_recomputes_comment_count() {
    let (app, _dir) = test_app();

    // Review 2 starts with comments 1, 4, 5.
    delete(&app, "/comments/1").await;

    let (_, body) = get(&app, "/reviews/2").await;
    assert_eq!(body["review"]["comment_count"], 2);
}

#[tokio::test]
async fn test_delete_comment_malformed_id() {
    let (app, _dir) = test_app();
    let (status, body) = delete(&app, "/comments/NotANumber").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}

#[tokio::test]
async fn test_delete_comment_missing_id() {
    let (app, _dir) = test_app();
    let (status, _) = delete(&app, "/comments/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
