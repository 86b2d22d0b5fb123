//! Repository for the `comments` table.

use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{quote_ident, ListOptions};
use crate::models::comment::{ArticleComment, Comment};

/// Column list for full `comments` rows.
const COMMENT_COLUMNS: &str = "comment_id, article_id, author, votes, created_at, body";

/// Provides comment listing, insertion, vote updates, and deletion.
pub struct CommentRepo;

impl CommentRepo {
    /// List the comments on one article, sorted and paginated.
    pub async fn list_for_article(
        pool: &PgPool,
        article_id: DbId,
        opts: &ListOptions,
    ) -> Result<Vec<ArticleComment>, sqlx::Error> {
        let query = format!(
            "SELECT comment_id, votes, created_at, author, body \
             FROM comments \
             WHERE article_id = $1 \
             ORDER BY {} {} \
             LIMIT $2 OFFSET $3",
            quote_ident(&opts.sort_by),
            opts.order.as_sql(),
        );
        sqlx::query_as::<_, ArticleComment>(&query)
            .bind(article_id)
            .bind(opts.limit)
            .bind(opts.offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of comments on one article, ignoring pagination.
    pub async fn count_for_article(pool: &PgPool, article_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE article_id = $1")
            .bind(article_id)
            .fetch_one(pool)
            .await
    }

    /// Insert a comment and return the full row, including the generated
    /// id, timestamp, and zero vote count.
    ///
    /// `author` and `body` are bound as-is; a NULL in either surfaces the
    /// not-null violation, and an unknown `article_id` surfaces the
    /// foreign-key violation, both classified by the caller.
    pub async fn insert(
        pool: &PgPool,
        article_id: DbId,
        author: Option<&str>,
        body: Option<&str>,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, author, body) \
             VALUES ($1, $2, $3) \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .bind(author)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// Atomically apply a vote delta and return the updated row.
    ///
    /// Returns `None` if no comment with the given id exists.
    pub async fn increment_votes(
        pool: &PgPool,
        comment_id: DbId,
        delta: i32,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET votes = votes + $2 \
             WHERE comment_id = $1 \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(comment_id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, comment_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
