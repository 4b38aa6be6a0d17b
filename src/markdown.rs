//! Markdown Rendering
//!
//! Renders project write-ups with pulldown-cmark.
//! Raw HTML in the source is escaped, links open in a new tab.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            let dest_url = if is_external(&dest_url) { mark_external(dest_url) } else { dest_url };
            Event::Start(Tag::Link { link_type, dest_url, title, id })
        }
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    add_link_targets(&html_output)
}

/// Render markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

const EXTERNAL_MARK: &str = "#__external";

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn mark_external(url: CowStr<'_>) -> CowStr<'_> {
    CowStr::from(format!("{}{}", url, EXTERNAL_MARK))
}

/// Replace the external-link marker with target/rel attributes
fn add_link_targets(html: &str) -> String {
    html.replace(
        &format!("{}\"", EXTERNAL_MARK),
        "\" target=\"_blank\" rel=\"noopener noreferrer\"",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        assert_eq!(parse_markdown("**Rust**"), "<p><strong>Rust</strong></p>\n");
        assert_eq!(parse_markdown_inline("*vite*"), "<em>vite</em>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_external_links_open_new_tab() {
        let html = parse_markdown("[code](https://github.com/a/b) et [ici](#/project/1)");
        assert!(html.contains(
            "<a href=\"https://github.com/a/b\" target=\"_blank\" rel=\"noopener noreferrer\">code</a>"
        ));
        assert!(html.contains("<a href=\"#/project/1\">ici</a>"));
    }
}
