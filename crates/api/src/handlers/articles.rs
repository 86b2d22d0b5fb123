//! Handlers for article listing, fetch, and vote updates.
//!
//! Listing distinguishes "the filter matched nothing" from "the filter
//! references an entity that does not exist": the existence checks only run
//! on the empty-result path, so the common case costs a single round trip
//! per query.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use newswire_core::error::DomainError;
use newswire_db::models::article::ArticleFilter;
use newswire_db::repositories::{ArticleRepo, TopicRepo, UserRepo};
use sqlx::PgPool;

use crate::error::ApiResult;
use crate::extract::Json as JsonBody;
use crate::query::{parse_id, parse_inc_votes, parse_list_options, ArticleListParams};
use crate::response::{ArticleResponse, ArticlesResponse, UpdatedArticleResponse};
use crate::state::AppState;

/// GET /api/articles
///
/// Supports `sort_by`, `order`, `author`, `topic`, `limit`, and `p`.
/// The rows query and the unpaged total count run concurrently.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> ApiResult<impl IntoResponse> {
    let opts = parse_list_options(
        params.sort_by,
        "articles.created_at",
        params.order.as_deref(),
        params.limit.as_deref(),
        params.p.as_deref(),
    )?;
    let filter = ArticleFilter {
        author: params.author,
        topic: params.topic,
    };

    let (articles, total_count) = tokio::try_join!(
        ArticleRepo::list(&state.pool, &filter, &opts),
        ArticleRepo::count(&state.pool, &filter),
    )?;

    if articles.is_empty() {
        let (author_exists, topic_exists) = tokio::try_join!(
            user_exists_or_omitted(&state.pool, filter.author.as_deref()),
            topic_exists_or_omitted(&state.pool, filter.topic.as_deref()),
        )?;
        if !author_exists {
            return Err(DomainError::NotFound { entity: "user" }.into());
        }
        if !topic_exists {
            return Err(DomainError::NotFound { entity: "topic" }.into());
        }
    }

    Ok(Json(ArticlesResponse {
        articles,
        total_count,
    }))
}

/// GET /api/articles/{article_id}
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let article_id = parse_id(&article_id)?;

    let article = ArticleRepo::find_by_id(&state.pool, article_id)
        .await?
        .ok_or(DomainError::NotFound { entity: "article" })?;

    Ok(Json(ArticleResponse { article }))
}

/// PATCH /api/articles/{article_id}
///
/// Body: `{"inc_votes": n}` and nothing else. The delta is applied in a
/// single UPDATE so concurrent increments never lose updates.
pub async fn patch_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> ApiResult<impl IntoResponse> {
    let article_id = parse_id(&article_id)?;
    let delta = parse_inc_votes(&body)?;

    let article = ArticleRepo::increment_votes(&state.pool, article_id, delta)
        .await?
        .ok_or(DomainError::NotFound { entity: "article" })?;

    Ok(Json(UpdatedArticleResponse { article }))
}

/// No-op existence check when the author filter was omitted.
async fn user_exists_or_omitted(
    pool: &PgPool,
    author: Option<&str>,
) -> Result<bool, sqlx::Error> {
    match author {
        Some(username) => UserRepo::exists(pool, username).await,
        None => Ok(true),
    }
}

/// No-op existence check when the topic filter was omitted.
async fn topic_exists_or_omitted(
    pool: &PgPool,
    topic: Option<&str>,
) -> Result<bool, sqlx::Error> {
    match topic {
        Some(slug) => TopicRepo::exists(pool, slug).await,
        None => Ok(true),
    }
}
