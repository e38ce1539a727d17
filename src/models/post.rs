use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::reply::Reply;
use crate::validation;

/// Represents the 'posts' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub content: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    /// Soft-delete flag. Every read path filters on it; nothing in the HTTP
    /// surface flips it, so deactivation is a manual operation.
    pub is_active: bool,
}

/// A post with its replies eagerly attached, oldest reply first. This is the
/// unit the listing query returns and the polling endpoint serializes.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithReplies {
    #[serde(flatten)]
    pub post: Post,
    pub replies: Vec<Reply>,
}

/// Form payload for the single POST endpoint. The `action` field selects
/// between a new post (the default) and a reply, which also needs `parent_id`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitForm {
    pub action: Option<String>,

    #[validate(custom(function = validation::validate_author))]
    pub author: String,

    #[validate(custom(function = validation::validate_content))]
    pub content: String,

    pub parent_id: Option<i64>,
}

/// Query parameters for the front page.
#[derive(Debug, Deserialize)]
pub struct IndexParams {
    /// Any non-zero value switches the response to the JSON posts payload
    /// consumed by the polling client.
    pub ajax: Option<u8>,
}
