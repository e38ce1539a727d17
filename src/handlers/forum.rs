use askama::Template;
use axum::{
    Form, Json,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use validator::Validate;

use crate::{
    error::AppError,
    models::post::{IndexParams, SubmitForm},
    repository::ForumRepository,
    views::{IndexTemplate, PostView, StatsView, ValidationRules},
};

/// How many posts the front page shows.
const FRONT_PAGE_POSTS: i64 = 10;

/// Render the front page with the latest posts, or return the same list as
/// JSON when the polling client asks with `?ajax=1`.
pub async fn index(
    State(repo): State<ForumRepository>,
    Query(params): Query<IndexParams>,
) -> Result<Response, AppError> {
    let posts = repo.latest_posts(FRONT_PAGE_POSTS).await?;

    if params.ajax.unwrap_or(0) != 0 {
        return Ok(Json(serde_json::json!({ "posts": posts })).into_response());
    }

    let stats = repo.stats().await?;
    let now = chrono::Utc::now();

    let template = IndexTemplate {
        posts: posts.iter().map(|p| PostView::build(p, now)).collect(),
        stats: StatsView::build(&stats, now),
        rules: ValidationRules::current(),
    };

    Ok(Html(template.render()?).into_response())
}

/// Handle the single POST endpoint. `action=reply` creates a reply under
/// `parent_id`; any other action creates a new post. Redirects back to the
/// front page on success so a refresh cannot double-submit.
pub async fn submit(
    State(repo): State<ForumRepository>,
    Form(form): Form<SubmitForm>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Validate payload against the shared rules
    if let Err(validation_errors) = form.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    // 2. Dispatch on the action field
    if form.action.as_deref() == Some("reply") {
        let parent_id = form
            .parent_id
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::BadRequest("A reply needs a parent post".to_string()))?;

        let reply_id = repo
            .create_reply(&form.author, &form.content, parent_id)
            .await?;
        tracing::info!(reply_id, parent_id, "reply created");
    } else {
        let post_id = repo.create_post(&form.author, &form.content).await?;
        tracing::info!(post_id, "post created");
    }

    Ok(Redirect::to("/"))
}
