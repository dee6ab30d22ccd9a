//! Markdown to HTML for section bodies, bullets and tips
//!
//! Content is editable by anyone with repo access and the browser inserts the
//! rendered HTML directly, so raw HTML in the source is escaped to text rather
//! than passed through.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render a block of Markdown (a section body) to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let processed = preserve_line_breaks(markdown);
    let parser = RawHtmlEscaper::new(Parser::new_ext(&processed, options));

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Render one line of Markdown without the surrounding paragraph, for list
/// items such as bullets and tips.
pub fn render_inline(markdown: &str) -> String {
    let html = render_markdown(markdown);
    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => html,
    }
}

/// Turns raw HTML events into plain text so they are shown escaped.
struct RawHtmlEscaper<I> {
    inner: I,
}

impl<I> RawHtmlEscaper<I> {
    fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, I> Iterator for RawHtmlEscaper<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            event => Some(event),
        }
    }
}

/// Single newlines become hard breaks; blank lines still separate paragraphs.
fn preserve_line_breaks(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    let mut prev_was_blank = false;

    for line in text.lines() {
        if !result.is_empty() {
            if !prev_was_blank && !line.is_empty() {
                result.push_str("  \n");
            } else {
                result.push('\n');
            }
        }
        prev_was_blank = line.is_empty();
        result.push_str(line);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_markdown() {
        let html = render_markdown("Use a **golden shovel** or `/claim`.");
        assert!(html.contains("<strong>golden shovel</strong>"));
        assert!(html.contains("<code>/claim</code>"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render_markdown("<div onclick=\"x()\">block</div>");
        assert!(!html.contains("<div"));
    }

    #[test]
    fn multiline_preserves_breaks() {
        let html = render_markdown("Line 1\nLine 2");
        assert!(html.contains("<br"));
    }

    #[test]
    fn paragraph_breaks_preserved() {
        let html = render_markdown("Paragraph 1\n\nParagraph 2");
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn inline_strips_paragraph() {
        assert_eq!(render_inline("Claim a **21×21** plot."), "Claim a <strong>21×21</strong> plot.");
        // two paragraphs stay wrapped
        assert!(render_inline("a\n\nb").starts_with("<p>"));
    }

    #[test]
    fn typographic_text_passes_through() {
        let html = render_inline("Typical cadence: ~6–12 months.");
        assert_eq!(html, "Typical cadence: ~6–12 months.");
    }
}
