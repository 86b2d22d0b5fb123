//! HTTP-level tests for comment listing, creation, vote updates, and
//! deletion.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, delete, get, patch_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_defaults_to_newest_first_page_of_ten(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/1/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let comments = json["comments"].as_array().unwrap();

    assert_eq!(comments.len(), 10);
    assert_eq!(json["total_count"], 13);
    // Newest comment on article 1.
    assert_eq!(comments[0]["comment_id"], 2);
    // Listed comments omit article_id (implied by the path) but carry
    // everything else.
    assert!(comments[0].get("article_id").is_none());
    assert!(comments[0]["votes"].is_number());
    assert!(comments[0]["author"].is_string());
    assert!(comments[0]["body"].is_string());
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_sorts_by_requested_column(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/1/comments?sort_by=votes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments[0]["votes"], 100);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_accepts_ascending_order(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/1/comments?order=asc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let comments = json["comments"].as_array().unwrap();
    // Oldest comment on article 1.
    assert_eq!(comments[0]["comment_id"], 14);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_rejects_invalid_order(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/1/comments?order=upwards").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "order must be either 'asc' or 'desc'");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_paginates(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/1/comments?limit=5&p=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["comments"].as_array().unwrap().len(), 5);
    assert_eq!(json["total_count"], 13);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_on_commentless_article_is_empty_200(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/2/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["comments"].as_array().unwrap().len(), 0);
    assert_eq!(json["total_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn list_comments_on_missing_article_is_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/articles/999/comments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "article does not exist");
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn post_comment_returns_the_inserted_row(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/articles/2/comments",
        serde_json::json!({ "username": "lurker", "body": "First!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let comment = &json["comment"];
    assert_eq!(comment["article_id"], 2);
    assert_eq!(comment["author"], "lurker");
    assert_eq!(comment["body"], "First!");
    assert_eq!(comment["votes"], 0);
    assert!(comment["comment_id"].as_i64().unwrap() > 17);
    assert!(comment["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn post_comment_with_unknown_author_is_404_and_inserts_nothing(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/articles/2/comments",
        serde_json::json!({ "username": "not_a_user", "body": "hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "user does not exist");

    // No orphan row was left behind.
    let response = get(build_test_app(pool), "/api/articles/2/comments").await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn post_comment_without_body_is_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/articles/2/comments",
        serde_json::json!({ "username": "lurker" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "violates not-null constraint");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn post_comment_with_empty_body_stays_in_the_error_envelope(pool: PgPool) {
    // An absent body reads as `{}`: both columns bind NULL and the
    // not-null violation comes back as the usual `{msg}` 400.
    let response = common::request(
        build_test_app(pool),
        Method::POST,
        "/api/articles/2/comments",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "violates not-null constraint");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn post_comment_to_missing_article_is_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/articles/999/comments",
        serde_json::json!({ "username": "lurker", "body": "hello" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "article does not exist");
}

// ---------------------------------------------------------------------------
// Vote updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn patch_comment_increments_votes(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool),
        "/api/comments/1",
        serde_json::json!({ "inc_votes": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["comment"]["comment_id"], 1);
    assert_eq!(json["comment"]["votes"], 17);
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn patch_comment_enforces_the_strict_body_contract(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = patch_json(app, "/api/comments/1", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "request body must have 'inc_votes' property");

    let response = patch_json(
        build_test_app(pool),
        "/api/comments/1",
        serde_json::json!({ "inc_votes": 1, "author": "lurker" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "request body must have only one property");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn patch_missing_comment_is_404(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool),
        "/api/comments/999",
        serde_json::json!({ "inc_votes": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "comment does not exist");
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn delete_comment_removes_it_and_repeats_are_404(pool: PgPool) {
    let response = delete(build_test_app(pool.clone()), "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The row is gone: article 9 drops from two comments to one.
    let response = get(build_test_app(pool.clone()), "/api/articles/9/comments").await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 1);

    // Deleting the same id again is deterministic.
    let response = delete(build_test_app(pool), "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "comment does not exist");
}

#[sqlx::test(migrations = "../db/migrations", fixtures("seed"))]
async fn delete_comment_with_non_integer_id_is_400(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/comments/not-an-id").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["msg"], "invalid input syntax for integer");
}
