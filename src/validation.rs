// src/validation.rs

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Field bounds shared by every tier: the form DTOs validate against them, the
/// template renders them into `minlength`/`maxlength`/`pattern` attributes, and
/// the browser controller reads those attributes instead of carrying its own
/// copy of the rules.
pub const AUTHOR_MIN: usize = 2;
pub const AUTHOR_MAX: usize = 50;
pub const CONTENT_MIN: usize = 10;
pub const POST_CONTENT_MAX: usize = 1000;
pub const REPLY_CONTENT_MAX: usize = 500;

/// Letters (including accented ones) and whitespace only. Kept un-anchored so
/// it can be dropped into an HTML `pattern` attribute as-is.
pub const AUTHOR_PATTERN: &str = r"[a-zA-ZÀ-ÿ\s]+";

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{})$", AUTHOR_PATTERN)).unwrap());

/// Author names: 2-50 characters, letters and spaces.
pub fn validate_author(author: &str) -> Result<(), ValidationError> {
    let trimmed = author.trim();
    let len = trimmed.chars().count();

    if len < AUTHOR_MIN || len > AUTHOR_MAX {
        let mut err = ValidationError::new("author_length");
        err.message = Some(
            format!(
                "Author name must be between {} and {} characters",
                AUTHOR_MIN, AUTHOR_MAX
            )
            .into(),
        );
        return Err(err);
    }

    if !AUTHOR_RE.is_match(trimmed) {
        let mut err = ValidationError::new("author_format");
        err.message = Some("Author name may only contain letters and spaces".into());
        return Err(err);
    }

    Ok(())
}

/// Post and reply bodies share a minimum; the per-kind maximum is enforced
/// where the kind is known (repository and form attributes).
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    let len = content.trim().chars().count();

    if len < CONTENT_MIN || len > POST_CONTENT_MAX {
        let mut err = ValidationError::new("content_length");
        err.message = Some(
            format!(
                "Content must be between {} and {} characters",
                CONTENT_MIN, POST_CONTENT_MAX
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}
