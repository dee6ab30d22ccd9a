use anyhow::Context;
use camino::Utf8Path;
use colored::Colorize;
use wiki_web::{SiteOptions, StaticSiteGenerator, Wiki};

/// `chilling-wiki build`
pub fn build(
    wiki: &Wiki,
    out: &Utf8Path,
    pkg_dir: Option<&Utf8Path>,
    pkg_url: &str,
) -> anyhow::Result<()> {
    let options = SiteOptions {
        pkg_url: pkg_url.to_string(),
        pkg_dir: pkg_dir.map(|dir| dir.as_std_path().to_path_buf()),
    };

    let site = StaticSiteGenerator::generate_with_options(wiki, out.as_std_path(), &options)
        .with_context(|| format!("failed to write site to {out}"))?;

    println!(
        "{} {} ({} pages, {} sections)",
        "Wrote".green().bold(),
        site.index_html.display(),
        wiki.pages.len(),
        wiki.section_count()
    );
    println!("{} {}", "Wrote".green().bold(), site.data_json.display());

    match pkg_dir {
        Some(dir) => println!(
            "{} {} viewer files from {dir}",
            "Copied".green().bold(),
            site.pkg_files
        ),
        None => println!(
            "{} the page loads the viewer from {}/wiki_viewer.js",
            "note:".yellow().bold(),
            pkg_url.trim_end_matches('/')
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiki_web::content;

    #[test]
    fn build_writes_site() {
        let dir = tempfile::tempdir().unwrap();
        let out = camino::Utf8PathBuf::from_path_buf(dir.path().join("site")).unwrap();

        build(content::builtin(), &out, None, "./pkg").unwrap();

        assert!(out.join("index.html").exists());
        assert!(out.join("wiki.json").exists());
        assert!(!out.join("pkg").exists());
    }

    #[test]
    fn build_reports_missing_pkg_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = camino::Utf8PathBuf::from_path_buf(dir.path().join("site")).unwrap();
        let missing = out.join("no-such-pkg");

        let err = build(content::builtin(), &out, Some(&missing), "./pkg").unwrap_err();
        assert!(err.to_string().contains("failed to write site"));
    }
}
