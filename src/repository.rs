// src/repository.rs

use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        post::{Post, PostWithReplies},
        reply::Reply,
        stats::ForumStats,
    },
    utils::html::{sanitize_author, sanitize_content},
    validation::{AUTHOR_MAX, POST_CONTENT_MAX, REPLY_CONTENT_MAX},
};

/// Data-access handle for posts, replies and the aggregate counters.
///
/// Constructed once around the shared pool and cloned into handlers via
/// `AppState`; there is no process-global connection anywhere.
#[derive(Clone)]
pub struct ForumRepository {
    pool: SqlitePool,
}

impl ForumRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new post and bump the post counter in a single transaction.
    /// Returns the generated id.
    pub async fn create_post(&self, author: &str, content: &str) -> Result<i64, AppError> {
        // 1. Sanitize, then validate what is left
        let author = sanitize_author(author);
        let content = sanitize_content(content);

        if author.is_empty() || content.is_empty() {
            return Err(AppError::BadRequest(
                "Author and content are required".to_string(),
            ));
        }
        if author.chars().count() > AUTHOR_MAX {
            return Err(AppError::BadRequest(format!(
                "Author name cannot exceed {} characters",
                AUTHOR_MAX
            )));
        }
        if content.chars().count() > POST_CONTENT_MAX {
            return Err(AppError::BadRequest(format!(
                "Content cannot exceed {} characters",
                POST_CONTENT_MAX
            )));
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        // 2. Insert Post
        let post_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (author, content, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&author)
        .bind(&content)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert post: {:?}", e);
            AppError::from(e)
        })?;

        // 3. Update the cached counters in the same transaction
        sqlx::query("UPDATE forum_stats SET total_posts = total_posts + 1, last_activity = ?")
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(post_id)
    }

    /// Insert a reply under an existing, active post and bump the reply
    /// counter. A missing or deactivated parent is a `NotFound`, not a
    /// database error.
    pub async fn create_reply(
        &self,
        author: &str,
        content: &str,
        post_id: i64,
    ) -> Result<i64, AppError> {
        let author = sanitize_author(author);
        let content = sanitize_content(content);

        if author.is_empty() || content.is_empty() || post_id <= 0 {
            return Err(AppError::BadRequest(
                "Author, content and parent post are required".to_string(),
            ));
        }
        if author.chars().count() > AUTHOR_MAX {
            return Err(AppError::BadRequest(format!(
                "Author name cannot exceed {} characters",
                AUTHOR_MAX
            )));
        }
        if content.chars().count() > REPLY_CONTENT_MAX {
            return Err(AppError::BadRequest(format!(
                "Reply content cannot exceed {} characters",
                REPLY_CONTENT_MAX
            )));
        }

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        // 1. The parent must exist and still be active
        let parent = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM posts WHERE id = ? AND is_active = 1",
        )
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        if parent.is_none() {
            return Err(AppError::NotFound("Post not found".to_string()));
        }

        // 2. Insert Reply
        let reply_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO replies (post_id, author, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(post_id)
        .bind(&author)
        .bind(&content)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert reply: {:?}", e);
            AppError::from(e)
        })?;

        // 3. Update the cached counters
        sqlx::query("UPDATE forum_stats SET total_replies = total_replies + 1, last_activity = ?")
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(reply_id)
    }

    /// Latest active posts, newest first, each with its replies attached
    /// oldest first. `limit` is clamped to 1..=50. One level deep only:
    /// replies cannot have sub-replies.
    pub async fn latest_posts(&self, limit: i64) -> Result<Vec<PostWithReplies>, AppError> {
        let limit = limit.clamp(1, 50);

        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author, content, created_at, updated_at, is_active
            FROM posts
            WHERE is_active = 1
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list posts: {:?}", e);
            AppError::from(e)
        })?;

        let mut result = Vec::with_capacity(posts.len());
        for post in posts {
            let replies = self.replies_for_post(post.id).await?;
            result.push(PostWithReplies { post, replies });
        }

        Ok(result)
    }

    async fn replies_for_post(&self, post_id: i64) -> Result<Vec<Reply>, AppError> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, post_id, author, content, created_at, updated_at, is_active
            FROM replies
            WHERE post_id = ? AND is_active = 1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list replies for post {}: {:?}", post_id, e);
            AppError::from(e)
        })?;

        Ok(replies)
    }

    /// Read the cached counters row.
    pub async fn stats(&self) -> Result<ForumStats, AppError> {
        let stats = sqlx::query_as::<_, ForumStats>(
            "SELECT id, total_posts, total_replies, last_activity, created_at FROM forum_stats LIMIT 1",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read forum stats: {:?}", e);
            AppError::from(e)
        })?;

        Ok(stats)
    }

    /// Recount active posts, and active replies of active posts, overwriting
    /// the cached row. Repair path; runs automatically only when seeding.
    pub async fn recompute_stats(&self) -> Result<ForumStats, AppError> {
        let mut tx = self.pool.begin().await?;

        let total_posts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE is_active = 1")
                .fetch_one(&mut *tx)
                .await?;

        // Replies of a deactivated post are invisible, so they do not count.
        let total_replies: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM replies r
            JOIN posts p ON p.id = r.post_id
            WHERE r.is_active = 1 AND p.is_active = 1
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE forum_stats SET total_posts = ?, total_replies = ?, last_activity = ?")
            .bind(total_posts)
            .bind(total_replies)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.stats().await
    }

    /// Total rows regardless of the active flag; used as the seed guard.
    pub async fn count_posts(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
