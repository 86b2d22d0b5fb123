use serde::Serialize;
use sqlx::FromRow;

/// A row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    /// Human-readable unique identifier.
    pub slug: String,
    pub description: String,
}
