//! Comment models and DTOs.

use newswire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub article_id: DbId,
    pub author: String,
    pub votes: i32,
    pub created_at: Timestamp,
    pub body: String,
}

/// A comment as listed under its article. The `article_id` is implied by
/// the request path, so it is not repeated per row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleComment {
    pub comment_id: DbId,
    pub votes: i32,
    pub created_at: Timestamp,
    pub author: String,
    pub body: String,
}

/// Request payload for posting a comment.
///
/// Both fields are optional at the type level: a missing `username` or
/// `body` is bound as NULL and surfaces the not-null violation as a 400,
/// matching the validation contract.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub username: Option<String>,
    pub body: Option<String>,
}
