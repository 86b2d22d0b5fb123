//! Article models and filter DTO.

use newswire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `articles` table, as returned by vote updates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub votes: i32,
}

/// An article row joined with its derived comment count.
///
/// `comment_count` is always recomputed from live `comments` rows
/// (`COUNT` over a LEFT JOIN), never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleWithCommentCount {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub comment_count: i64,
}

/// Optional equality filters for the article listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub author: Option<String>,
    pub topic: Option<String>,
}
