use axum::routing::patch;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Routes mounted at `/comments`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{comment_id}",
        patch(comments::patch_comment_by_id).delete(comments::delete_comment_by_id),
    )
}
