use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newswire_core::error::DomainError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`DomainError`] for validation and not-found failures and adds
/// database errors from sqlx. Implements [`IntoResponse`] to produce the
/// `{"msg": ...}` error envelope every route shares.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error carrying its own status and message.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

/// Fixed Postgres error-code mapping, constructed once and immutable.
///
/// Codes not in this table (and non-database errors) fall through to 500.
/// 23503 (foreign-key violation) is handled separately because the message
/// depends on which constraint was violated.
static PG_ERROR_TABLE: &[(&str, StatusCode, &str)] = &[
    // invalid_text_representation: a non-integer where an id is expected
    ("22P02", StatusCode::BAD_REQUEST, "invalid input syntax for integer"),
    // not_null_violation: a required field was absent or explicitly null
    ("23502", StatusCode::BAD_REQUEST, "violates not-null constraint"),
    // undefined_column: an unknown sort_by column reached the database
    ("42703", StatusCode::BAD_REQUEST, "column does not exist"),
];

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Domain(domain) => match domain {
                DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, domain.to_string()),
                DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },
            ApiError::Database(err) => classify_sqlx_error(err),
        };

        (status, axum::Json(json!({ "msg": msg }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and client-facing message.
///
/// - `RowNotFound` maps to 404.
/// - Known Postgres codes map through [`PG_ERROR_TABLE`].
/// - Foreign-key violations (23503) map to 404 naming the missing entity,
///   derived from the violated constraint.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => {
            (StatusCode::NOT_FOUND, "resource does not exist".to_string())
        }
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();

            if code.as_deref() == Some("23503") {
                let entity = referenced_entity(db_err.constraint().unwrap_or_default());
                return (StatusCode::NOT_FOUND, format!("{entity} does not exist"));
            }

            if let Some(&(_, status, msg)) = PG_ERROR_TABLE
                .iter()
                .find(|(c, _, _)| Some(*c) == code.as_deref())
            {
                return (status, msg.to_string());
            }

            tracing::error!(error = %db_err, "Unclassified database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Name the entity a foreign-key constraint points at.
///
/// Constraint names are fixed in the initial migration
/// (`fk_<table>_<referenced entity>`).
fn referenced_entity(constraint: &str) -> &'static str {
    if constraint.ends_with("_author") {
        "user"
    } else if constraint.ends_with("_article") {
        "article"
    } else if constraint.ends_with("_topic") {
        "topic"
    } else {
        "resource"
    }
}
