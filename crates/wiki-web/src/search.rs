//! Page search
//!
//! Plain case-insensitive substring matching over a page's title, summary,
//! and section titles and bodies (see [`Page::search_text`]). Results keep
//! navigation order; there is no ranking.

use crate::model::Page;

/// Normalize a raw query: trimmed and lowercased.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Does the searchable text of `page` contain the already-normalized `needle`?
pub fn page_matches(page: &Page, needle: &str) -> bool {
    page.search_text().to_lowercase().contains(needle)
}

/// Filter pages by a free-text query.
///
/// An empty (or whitespace-only) query keeps every page. Accepts anything that
/// iterates page references, so a previous result can be filtered again.
pub fn filter_pages<'a, I>(query: &str, pages: I) -> Vec<&'a Page>
where
    I: IntoIterator<Item = &'a Page>,
{
    let needle = normalize_query(query);
    if needle.is_empty() {
        return pages.into_iter().collect();
    }
    pages
        .into_iter()
        .filter(|page| page_matches(page, &needle))
        .collect()
}
