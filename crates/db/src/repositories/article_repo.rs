//! Repository for the `articles` table.
//!
//! Listing composes optional equality filters, a caller-supplied sort
//! column, and LIMIT/OFFSET pagination into a single query that also
//! aggregates each article's comment count.

use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{quote_ident, ListOptions};
use crate::models::article::{Article, ArticleFilter, ArticleWithCommentCount};

/// Column list for `articles` queries, qualified for use alongside the
/// comments join.
const ARTICLE_COLUMNS: &str = "\
    articles.article_id, articles.title, articles.topic, articles.author, \
    articles.body, articles.created_at, articles.votes";

/// Provides read and vote-update operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Fetch a single article with its derived comment count.
    pub async fn find_by_id(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Option<ArticleWithCommentCount>, sqlx::Error> {
        let query = format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id \
             WHERE articles.article_id = $1 \
             GROUP BY articles.article_id"
        );
        sqlx::query_as::<_, ArticleWithCommentCount>(&query)
            .bind(article_id)
            .fetch_optional(pool)
            .await
    }

    /// List articles matching the filter, sorted and paginated.
    ///
    /// The sort column passes through [`quote_ident`]; an unknown column
    /// fails at Postgres (42703) and is classified by the caller.
    pub async fn list(
        pool: &PgPool,
        filter: &ArticleFilter,
        opts: &ListOptions,
    ) -> Result<Vec<ArticleWithCommentCount>, sqlx::Error> {
        let (where_sql, binds) = filter_clause(filter);
        let query = format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id\
             {where_sql} \
             GROUP BY articles.article_id \
             ORDER BY {} {} \
             LIMIT ${} OFFSET ${}",
            quote_ident(&opts.sort_by),
            opts.order.as_sql(),
            binds.len() + 1,
            binds.len() + 2,
        );

        let mut q = sqlx::query_as::<_, ArticleWithCommentCount>(&query);
        for bind in &binds {
            q = q.bind(*bind);
        }
        q.bind(opts.limit).bind(opts.offset).fetch_all(pool).await
    }

    /// Total number of articles matching the filter, ignoring pagination.
    pub async fn count(pool: &PgPool, filter: &ArticleFilter) -> Result<i64, sqlx::Error> {
        let (where_sql, binds) = filter_clause(filter);
        let query = format!("SELECT COUNT(*) FROM articles{where_sql}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for bind in &binds {
            q = q.bind(*bind);
        }
        q.fetch_one(pool).await
    }

    /// Atomically apply a vote delta and return the updated row.
    ///
    /// A single UPDATE statement, so concurrent increments on the same row
    /// serialize at the database and none are lost. Returns `None` if no
    /// article with the given id exists.
    pub async fn increment_votes(
        pool: &PgPool,
        article_id: DbId,
        delta: i32,
    ) -> Result<Option<Article>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            "UPDATE articles SET votes = votes + $2 \
             WHERE article_id = $1 \
             RETURNING article_id, title, topic, author, body, created_at, votes",
        )
        .bind(article_id)
        .bind(delta)
        .fetch_optional(pool)
        .await
    }

    /// Whether an article with the given id exists.
    pub async fn exists(pool: &PgPool, article_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)",
        )
        .bind(article_id)
        .fetch_one(pool)
        .await
    }
}

/// Build the WHERE clause and ordered bind list for an [`ArticleFilter`].
///
/// Returned SQL starts with a leading space when non-empty; placeholder
/// numbering matches the bind list so callers append further binds after it.
fn filter_clause(filter: &ArticleFilter) -> (String, Vec<&str>) {
    let mut conditions = Vec::new();
    let mut binds = Vec::new();

    if let Some(author) = filter.author.as_deref() {
        binds.push(author);
        conditions.push(format!("articles.author = ${}", binds.len()));
    }
    if let Some(topic) = filter.topic.as_deref() {
        binds.push(topic);
        conditions.push(format!("articles.topic = ${}", binds.len()));
    }

    if conditions.is_empty() {
        (String::new(), binds)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), binds)
    }
}
