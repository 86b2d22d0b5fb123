//! Request body extraction that stays inside the `{msg}` error envelope.
//!
//! axum's built-in `Json` extractor answers malformed bodies with its own
//! plain-text rejections (and a 415 when the content-type header is
//! absent). Every error this API emits is a `{"msg": ...}` object, so
//! body extraction goes through this wrapper instead.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use newswire_core::error::DomainError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor.
///
/// An empty body deserializes as `{}`, so endpoints with required
/// properties reject it with their own message rather than a parse
/// error. The content-type header is not consulted.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| DomainError::validation("request body must be valid JSON"))?;

        let slice: &[u8] = if bytes.is_empty() { b"{}" } else { &bytes };
        let value = serde_json::from_slice(slice)
            .map_err(|_| DomainError::validation("request body must be valid JSON"))?;

        Ok(Json(value))
    }
}
