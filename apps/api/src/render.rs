//! Markdown → HTML for model answers.
//!
//! Answers come from an external model, so raw HTML in them is escaped and
//! script-capable link destinations are replaced before rendering.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Schemes that must never end up in an `href` or `src`.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "file:"];

/// Image MIME prefixes allowed in `data:` URLs.
const SAFE_DATA_IMAGES: &[&str] = &[
    "data:image/gif;",
    "data:image/png;",
    "data:image/jpeg;",
    "data:image/webp;",
];

/// Renders `markdown` to an HTML fragment safe to insert into the page.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(Tag::Link(kind, dest, title)) => {
            Event::Start(Tag::Link(kind, safe_destination(dest, false), title))
        }
        Event::Start(Tag::Image(kind, dest, title)) => {
            Event::Start(Tag::Image(kind, safe_destination(dest, true), title))
        }
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Escapes `text` for use as HTML text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, std::iter::once(Event::Text(CowStr::Borrowed(text))));
    out
}

fn safe_destination(dest: CowStr<'_>, is_image: bool) -> CowStr<'_> {
    if is_safe_url(&dest, is_image) {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

fn is_safe_url(url: &str, is_image: bool) -> bool {
    let normalized: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if BLOCKED_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        return false;
    }
    if normalized.starts_with("data:") {
        return is_image && SAFE_DATA_IMAGES.iter().any(|p| normalized.starts_with(p));
    }
    true
}
