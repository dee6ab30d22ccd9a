//! HTML and script-context escaping.

/// Escape for element content such as `<title>` or `<h1>`. Quotes are safe
/// in element text and are left alone.
pub fn escape_html_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape JSON for a `<script>` element. `</` would close the element early,
/// and `<\/` is still valid JSON.
pub fn escape_script_content(s: &str) -> String {
    s.replace("</", r"<\/")
}
