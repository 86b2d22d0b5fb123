//! Handlers for comment listing, insertion, vote updates, and deletion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use newswire_core::error::DomainError;
use newswire_db::models::comment::CreateComment;
use newswire_db::repositories::{ArticleRepo, CommentRepo, UserRepo};

use crate::error::ApiResult;
use crate::extract::Json as JsonBody;
use crate::query::{parse_id, parse_inc_votes, parse_list_options, CommentListParams};
use crate::response::{CommentResponse, CommentsResponse};
use crate::state::AppState;

/// GET /api/articles/{article_id}/comments
///
/// Same listing shape as articles without the join. An empty result
/// triggers an article existence check so "article with zero comments"
/// and "article does not exist" stay distinguishable.
pub async fn list_comments_by_article_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Query(params): Query<CommentListParams>,
) -> ApiResult<impl IntoResponse> {
    let article_id = parse_id(&article_id)?;
    let opts = parse_list_options(
        params.sort_by,
        "created_at",
        params.order.as_deref(),
        params.limit.as_deref(),
        params.p.as_deref(),
    )?;

    let (comments, total_count) = tokio::try_join!(
        CommentRepo::list_for_article(&state.pool, article_id, &opts),
        CommentRepo::count_for_article(&state.pool, article_id),
    )?;

    if comments.is_empty() && !ArticleRepo::exists(&state.pool, article_id).await? {
        return Err(DomainError::NotFound { entity: "article" }.into());
    }

    Ok(Json(CommentsResponse {
        comments,
        total_count,
    }))
}

/// POST /api/articles/{article_id}/comments
///
/// The author is looked up before inserting so a 404 never leaves an
/// orphan row behind. A missing `body` (or `username`) is bound as NULL
/// and the not-null violation comes back as a 400.
pub async fn post_comment_by_article_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    JsonBody(input): JsonBody<CreateComment>,
) -> ApiResult<impl IntoResponse> {
    let article_id = parse_id(&article_id)?;

    if let Some(username) = input.username.as_deref() {
        if !UserRepo::exists(&state.pool, username).await? {
            return Err(DomainError::NotFound { entity: "user" }.into());
        }
    }

    let comment = CommentRepo::insert(
        &state.pool,
        article_id,
        input.username.as_deref(),
        input.body.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// PATCH /api/comments/{comment_id}
///
/// Same strict `{"inc_votes": n}` contract as article vote updates.
pub async fn patch_comment_by_id(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> ApiResult<impl IntoResponse> {
    let comment_id = parse_id(&comment_id)?;
    let delta = parse_inc_votes(&body)?;

    let comment = CommentRepo::increment_votes(&state.pool, comment_id, delta)
        .await?
        .ok_or(DomainError::NotFound { entity: "comment" })?;

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete_comment_by_id(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let comment_id = parse_id(&comment_id)?;

    let deleted = CommentRepo::delete(&state.pool, comment_id).await?;
    if !deleted {
        return Err(DomainError::NotFound { entity: "comment" }.into());
    }

    Ok(StatusCode::NO_CONTENT)
}
