//! Response envelope types for API handlers.
//!
//! Every success response wraps its payload in a JSON object keyed by the
//! resource name (`{"article": ...}`, `{"articles": [...], "total_count": n}`),
//! mirroring the error envelope's single `msg` key. Using concrete structs
//! instead of ad-hoc `serde_json::json!` keeps the envelopes type-checked.

use newswire_db::models::article::{Article, ArticleWithCommentCount};
use newswire_db::models::comment::{ArticleComment, Comment};
use newswire_db::models::topic::Topic;
use newswire_db::models::user::User;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleWithCommentCount>,
    pub total_count: i64,
}

/// Envelope for a single article fetch, comment count included.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleWithCommentCount,
}

/// Envelope for a vote update, which returns the bare row.
#[derive(Debug, Serialize)]
pub struct UpdatedArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<ArticleComment>,
    pub total_count: i64,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}
