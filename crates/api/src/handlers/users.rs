use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use newswire_core::error::DomainError;
use newswire_db::repositories::UserRepo;

use crate::error::ApiResult;
use crate::response::UserResponse;
use crate::state::AppState;

/// GET /api/users/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(DomainError::NotFound { entity: "user" })?;

    Ok(Json(UserResponse { user }))
}
