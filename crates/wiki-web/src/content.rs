//! The bundled Chilling SMP content
//!
//! The wiki ships with its content compiled in so the browser app works
//! without fetching anything. A content file can replace it at build time.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::ContentError;
use crate::model::Wiki;

/// Bundled content JSON
pub const CHILLING_SMP_JSON: &str = include_str!("../content/chilling_smp.json");

/// The bundled wiki, parsed once.
pub fn builtin() -> &'static Wiki {
    static WIKI: OnceLock<Wiki> = OnceLock::new();
    WIKI.get_or_init(|| Wiki::from_json(CHILLING_SMP_JSON).expect("bundled wiki content is valid"))
}

/// Load content from `path`, or clone the bundled wiki when no path is given.
pub fn load(path: Option<&Path>) -> Result<Wiki, ContentError> {
    match path {
        Some(path) => Wiki::load(path),
        None => Ok(builtin().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let wiki = builtin();
        assert_eq!(wiki.site_title, "The Chilling SMP");
        let slugs: Vec<_> = wiki.pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["history", "datapacks", "plugins", "guides"]);
        assert!(wiki.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        std::fs::write(
            &path,
            r#"{"site_title":"Other","tagline":"t","pages":[{"slug":"a","title":"A","summary":""}]}"#,
        )
        .unwrap();

        let wiki = load(Some(&path)).unwrap();
        assert_eq!(wiki.site_title, "Other");
        assert_eq!(load(None).unwrap(), *builtin());
    }

    #[test]
    fn load_rejects_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wiki.json");
        std::fs::write(
            &path,
            r#"{"site_title":"T","tagline":"t","pages":[{"slug":"home","title":"H","summary":""}]}"#,
        )
        .unwrap();
        assert!(matches!(load(Some(&path)), Err(ContentError::ReservedSlug)));

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load(Some(&path)), Err(ContentError::Parse(_))));
    }
}
