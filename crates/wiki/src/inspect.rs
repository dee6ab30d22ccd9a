//! `search` and `route`: the UI's filter and router, on the command line.

use std::fmt::Write;

use wiki_web::{Resolved, Route, Wiki};

pub fn render_search(wiki: &Wiki, query: &str) -> String {
    let results = wiki.search(query);
    let mut out = format!("{} result(s)\n", results.len());
    for page in results {
        let _ = writeln!(out, "  #{}  {}", page.slug, page.title);
    }
    out
}

pub fn render_route(wiki: &Wiki, fragment: &str) -> String {
    let route = Route::from_fragment(fragment);
    match route.resolve(wiki) {
        Resolved::Home => "home".to_string(),
        Resolved::Page { page, section } => match (route.anchor(), section) {
            (_, Some(section)) => format!("page {} #{} ({})", page.slug, section.id, section.title),
            (Some(anchor), None) => format!("page {} #{anchor} (no such section)", page.slug),
            (None, None) => format!("page {}", page.slug),
        },
        Resolved::NotFound { slug } => format!("not found {slug}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiki_web::content;

    #[test]
    fn search_output() {
        let wiki = content::builtin();
        assert_eq!(render_search(wiki, "vein"), "1 result(s)\n  #datapacks  Datapacks\n");
        assert_eq!(
            render_search(wiki, "CLAIM"),
            "2 result(s)\n  #plugins  Plugins\n  #guides  Guides\n"
        );
        assert_eq!(render_search(wiki, "nothing like this"), "0 result(s)\n");
    }

    #[test]
    fn empty_search_lists_everything() {
        let out = render_search(content::builtin(), "  ");
        assert!(out.starts_with("4 result(s)\n"));
    }

    #[test]
    fn route_output() {
        let wiki = content::builtin();
        insta::assert_snapshot!(render_route(wiki, ""), @"home");
        insta::assert_snapshot!(render_route(wiki, "#plugins"), @"page plugins");
        insta::assert_snapshot!(
            render_route(wiki, "#plugins~economy"),
            @"page plugins #economy (Shops & Economy)"
        );
        insta::assert_snapshot!(
            render_route(wiki, "plugins~nope"),
            @"page plugins #nope (no such section)"
        );
        insta::assert_snapshot!(render_route(wiki, "doesnotexist"), @"not found doesnotexist");
    }
}
