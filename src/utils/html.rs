use ammonia::Builder;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Author names carry no markup at all.
static AUTHOR_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.tags(HashSet::new());
    builder
});

/// Post and reply bodies keep a small formatting subset; everything else
/// (scripts, iframes, event-handler attributes) is stripped.
static CONTENT_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.tags(HashSet::from(["br", "p", "strong", "em"]));
    builder
});

/// Strip every tag from an author name. The output is render-safe HTML text.
pub fn sanitize_author(input: &str) -> String {
    AUTHOR_CLEANER.clean(input.trim()).to_string()
}

/// Whitelist-clean a post or reply body, keeping the permitted formatting
/// subset. The output is render-safe HTML.
pub fn sanitize_content(input: &str) -> String {
    CONTENT_CLEANER.clean(input.trim()).to_string()
}

/// Turn stored newlines into visual breaks for display. The input is already
/// sanitized, so the result can be emitted unescaped.
pub fn render_content(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\n', "<br>\n")
}
