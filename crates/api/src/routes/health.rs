//! Root-level health endpoint, outside the `/api` tree so probes and
//! load balancers can hit it without the resource prefix.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Liveness plus one database round trip. A failed round trip degrades
/// the status instead of erroring, so the endpoint stays 200 while the
/// process itself is up.
async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = newswire_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
