use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'replies' table in the database. Replies are one level deep:
/// they attach to a post, never to another reply.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}
