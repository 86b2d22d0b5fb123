use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use newswire_db::repositories::TopicRepo;

use crate::error::ApiResult;
use crate::response::TopicsResponse;
use crate::state::AppState;

/// GET /api/topics
pub async fn list_topics(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let topics = TopicRepo::list_all(&state.pool).await?;

    Ok(Json(TopicsResponse { topics }))
}
