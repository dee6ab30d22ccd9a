//! Static site export
//!
//! Writes an `index.html` shell with the wiki content inlined, plus a
//! `wiki.json` copy of the content for tooling. The browser app itself is the
//! wasm-bindgen output of `wiki-viewer`; it is copied next to the shell when a
//! package directory is given.

use std::io;
use std::path::{Path, PathBuf};

use crate::assets;
use crate::model::Wiki;

/// Name of the content copy written next to `index.html`.
pub const DATA_FILE: &str = "wiki.json";

/// Export options
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// URL of the viewer package, relative to `index.html`
    pub pkg_url: String,
    /// Directory holding the built viewer package. When set, its files are
    /// copied to `<output>/pkg` and `pkg_url` is ignored.
    pub pkg_dir: Option<PathBuf>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            pkg_url: "./pkg".to_string(),
            pkg_dir: None,
        }
    }
}

/// Paths written by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub index_html: PathBuf,
    pub data_json: PathBuf,
    /// Number of package files copied
    pub pkg_files: usize,
}

pub struct StaticSiteGenerator;

impl StaticSiteGenerator {
    /// Generate the site in `output_dir` with default options.
    pub fn generate(wiki: &Wiki, output_dir: &Path) -> io::Result<GeneratedSite> {
        Self::generate_with_options(wiki, output_dir, &SiteOptions::default())
    }

    pub fn generate_with_options(
        wiki: &Wiki,
        output_dir: &Path,
        options: &SiteOptions,
    ) -> io::Result<GeneratedSite> {
        std::fs::create_dir_all(output_dir)?;

        let mut pkg_files = 0;
        let pkg_url = match &options.pkg_dir {
            Some(pkg_dir) => {
                pkg_files = copy_dir(pkg_dir, &output_dir.join("pkg"))?;
                "./pkg"
            }
            None => options.pkg_url.as_str(),
        };

        let index_html = output_dir.join("index.html");
        std::fs::write(&index_html, render_index(wiki, pkg_url)?)?;

        let data_json = output_dir.join(DATA_FILE);
        let pretty = serde_json::to_string_pretty(wiki).map_err(io::Error::other)?;
        std::fs::write(&data_json, pretty)?;

        tracing::info!(
            output = %output_dir.display(),
            pages = wiki.pages.len(),
            pkg_files,
            "generated static site"
        );

        Ok(GeneratedSite {
            index_html,
            data_json,
            pkg_files,
        })
    }
}

/// Render the `index.html` shell for `wiki`.
pub fn render_index(wiki: &Wiki, pkg_url: &str) -> io::Result<String> {
    let json = serde_json::to_string(wiki).map_err(io::Error::other)?;
    Ok(assets::html_shell(
        &page_title(wiki),
        &wiki.tagline,
        &json,
        pkg_url,
    ))
}

/// Document title for the exported site.
pub fn page_title(wiki: &Wiki) -> String {
    format!("{} Wiki", wiki.site_title)
}

/// Recursively copy `from` into `to`, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> io::Result<usize> {
    std::fs::create_dir_all(to)?;
    let mut copied = 0;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn generates_index_html_and_data() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");

        let site = StaticSiteGenerator::generate(content::builtin(), &out).expect("generate failed");
        assert_eq!(site.pkg_files, 0);

        let html = std::fs::read_to_string(&site.index_html).unwrap();
        assert!(html.contains("<title>The Chilling SMP Wiki</title>"));
        assert!(html.contains(":root"), "should inline CSS");
        assert!(html.contains(r#"id="__WIKI_DATA__""#));
        assert!(html.contains(r#""id":"pack-veinminer""#));
        assert!(html.contains("./pkg/wiki_viewer.js"));

        let data = std::fs::read_to_string(&site.data_json).unwrap();
        let parsed = Wiki::from_json(&data).unwrap();
        assert_eq!(&parsed, content::builtin());
    }

    #[test]
    fn embedded_json_parses_back() {
        let wiki = content::builtin();
        let html = render_index(wiki, "./pkg").unwrap();

        let start_tag = r#"<script id="__WIKI_DATA__" type="application/json">"#;
        let start = html.find(start_tag).unwrap() + start_tag.len();
        let end = start + html[start..].find("</script>").unwrap();
        let parsed = Wiki::from_json(&html[start..end]).unwrap();
        assert_eq!(&parsed, wiki);
    }

    #[test]
    fn copies_package_directory() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = dir.path().join("pkg-build");
        std::fs::create_dir_all(pkg.join("snippets")).unwrap();
        std::fs::write(pkg.join("wiki_viewer.js"), "export default function init() {}").unwrap();
        std::fs::write(pkg.join("wiki_viewer_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        std::fs::write(pkg.join("snippets/inline0.js"), "").unwrap();

        let out = dir.path().join("site");
        let options = SiteOptions {
            pkg_url: "https://cdn.example/pkg".into(),
            pkg_dir: Some(pkg),
        };
        let site = StaticSiteGenerator::generate_with_options(content::builtin(), &out, &options).unwrap();

        assert_eq!(site.pkg_files, 3);
        assert!(out.join("pkg/snippets/inline0.js").exists());
        let html = std::fs::read_to_string(site.index_html).unwrap();
        assert!(html.contains("./pkg/wiki_viewer.js"));
        assert!(!html.contains("cdn.example"));
    }

    #[test]
    fn missing_package_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = SiteOptions {
            pkg_dir: Some(dir.path().join("nope")),
            ..SiteOptions::default()
        };
        let result = StaticSiteGenerator::generate_with_options(content::builtin(), &dir.path().join("out"), &options);
        assert!(result.is_err());
    }
}
