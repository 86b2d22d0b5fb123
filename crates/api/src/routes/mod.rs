pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /topics                      GET            list topics
/// /users/{username}            GET            fetch user
/// /articles                    GET            list articles
/// /articles/{id}               GET, PATCH     fetch / vote
/// /articles/{id}/comments      GET, POST      list / create
/// /comments/{id}               PATCH, DELETE  vote / delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/topics", topics::router())
        .nest("/users", users::router())
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
}
