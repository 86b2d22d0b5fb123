use axum::routing::get;
use axum::Router;

use crate::handlers::{articles, comments};
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                      -> list_articles
/// GET    /{id}                  -> get_article_by_id
/// PATCH  /{id}                  -> patch_article_by_id
/// GET    /{id}/comments         -> list_comments_by_article_id
/// POST   /{id}/comments         -> post_comment_by_article_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list_articles))
        .route(
            "/{article_id}",
            get(articles::get_article_by_id).patch(articles::patch_article_by_id),
        )
        .route(
            "/{article_id}/comments",
            get(comments::list_comments_by_article_id)
                .post(comments::post_comment_by_article_id),
        )
}
