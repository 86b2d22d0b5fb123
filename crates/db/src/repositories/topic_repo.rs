use sqlx::PgPool;

use crate::models::topic::Topic;

/// Read access to the `topics` table.
pub struct TopicRepo;

impl TopicRepo {
    /// List every topic, alphabetically by slug.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Topic>, sqlx::Error> {
        sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
            .fetch_all(pool)
            .await
    }

    /// Whether a topic with the given slug exists.
    pub async fn exists(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM topics WHERE slug = $1)")
            .bind(slug)
            .fetch_one(pool)
            .await
    }
}
