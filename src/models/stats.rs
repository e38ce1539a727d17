use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The singleton 'forum_stats' row: cached aggregate counters, kept in step
/// with each insert and recomputable from the source tables at any time.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ForumStats {
    pub id: i64,
    pub total_posts: i64,
    pub total_replies: i64,
    pub last_activity: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
