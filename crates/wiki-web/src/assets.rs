//! Embedded assets for the exported site

use crate::escape::{escape_html_text, escape_script_content};

/// The wiki stylesheet.
pub const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Element id of the embedded content JSON.
pub const WIKI_DATA_ID: &str = "__WIKI_DATA__";

/// Element id the browser app mounts into.
pub const APP_ROOT_ID: &str = "app";

/// Class of the placeholder shown until the browser app mounts.
pub const LOADING_CLASS: &str = "app-loading";

/// File name of the wasm-bindgen JS loader inside the package directory.
pub const VIEWER_MODULE: &str = "wiki_viewer.js";

/// Generate the HTML shell hosting the browser app.
///
/// `wiki_json` is inlined into a `<script type="application/json">` element so
/// the app needs no extra request for its content. `pkg_url` is where the
/// wasm-bindgen output of the viewer is served from, relative to the page.
pub fn html_shell(title: &str, tagline: &str, wiki_json: &str, pkg_url: &str) -> String {
    let safe_title = escape_html_text(title);
    let safe_tagline = escape_html_text(tagline);
    let safe_json = escape_script_content(wiki_json);

    let module_url = format!("{}/{VIEWER_MODULE}", pkg_url.trim_end_matches('/'));
    // A JSON string is also a valid JS string literal.
    let module_literal = escape_script_content(
        &serde_json::to_string(&module_url).unwrap_or_else(|_| "\"./pkg/wiki_viewer.js\"".into()),
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{css}</style>
</head>
<body>
  <div id="{app_id}">
    <div class="{loading}">
      <h1>{title}</h1>
      <p>{tagline}</p>
      <p>Loading&hellip;</p>
    </div>
  </div>
  <noscript>
    <div class="noscript">This wiki runs in your browser and needs JavaScript and WebAssembly enabled.</div>
  </noscript>
  <script id="{data_id}" type="application/json">{json}</script>
  <script type="module">
    import init from {module};
    init().catch((err) => console.error("failed to start wiki", err));
  </script>
</body>
</html>"#,
        title = safe_title,
        tagline = safe_tagline,
        css = STYLES_CSS,
        app_id = APP_ROOT_ID,
        loading = LOADING_CLASS,
        data_id = WIKI_DATA_ID,
        json = safe_json,
        module = module_literal,
    )
}
