// src/views.rs

use askama::Template;
use chrono::{DateTime, Utc};

use crate::{
    models::{post::PostWithReplies, reply::Reply, stats::ForumStats},
    utils::{html::render_content, time::format_relative_date},
    validation,
};

/// Validation bounds rendered into form attributes, so the browser controller
/// reads the same rules the server enforces instead of carrying its own copy.
pub struct ValidationRules {
    pub author_min: usize,
    pub author_max: usize,
    pub author_pattern: &'static str,
    pub content_min: usize,
    pub post_content_max: usize,
    pub reply_content_max: usize,
}

impl ValidationRules {
    pub fn current() -> Self {
        Self {
            author_min: validation::AUTHOR_MIN,
            author_max: validation::AUTHOR_MAX,
            author_pattern: validation::AUTHOR_PATTERN,
            content_min: validation::CONTENT_MIN,
            post_content_max: validation::POST_CONTENT_MAX,
            reply_content_max: validation::REPLY_CONTENT_MAX,
        }
    }
}

/// Counters line for the page header.
pub struct StatsView {
    pub total_posts: i64,
    pub total_replies: i64,
    pub last_activity_label: String,
}

impl StatsView {
    pub fn build(stats: &ForumStats, now: DateTime<Utc>) -> Self {
        Self {
            total_posts: stats.total_posts,
            total_replies: stats.total_replies,
            last_activity_label: format_relative_date(stats.last_activity, now),
        }
    }
}

/// A reply ready for the template: date formatted, body pre-rendered.
pub struct ReplyView {
    pub author: String,
    pub date_label: String,
    pub content_html: String,
}

impl ReplyView {
    fn build(reply: &Reply, now: DateTime<Utc>) -> Self {
        Self {
            author: reply.author.clone(),
            date_label: format_relative_date(reply.created_at, now),
            content_html: render_content(&reply.content),
        }
    }
}

/// A post plus its replies, ready for the template.
pub struct PostView {
    pub id: i64,
    pub author: String,
    pub date_label: String,
    pub content_html: String,
    pub replies: Vec<ReplyView>,
}

impl PostView {
    pub fn build(item: &PostWithReplies, now: DateTime<Utc>) -> Self {
        Self {
            id: item.post.id,
            author: item.post.author.clone(),
            date_label: format_relative_date(item.post.created_at, now),
            content_html: render_content(&item.post.content),
            replies: item.replies.iter().map(|r| ReplyView::build(r, now)).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostView>,
    pub stats: StatsView,
    pub rules: ValidationRules,
}
