#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use newswire_api::config::ServerConfig;
use newswire_api::router::build_app_router;
use newswire_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] the binary uses, so
/// integration tests exercise the production middleware stack and
/// fallbacks.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request with an optional JSON body and return the raw response.
pub async fn request(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response {
    request(app, Method::GET, path, None).await
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    request(app, Method::POST, path, Some(body)).await
}

pub async fn patch_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    request(app, Method::PATCH, path, Some(body)).await
}

pub async fn delete(app: Router, path: &str) -> Response {
    request(app, Method::DELETE, path, None).await
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
