use std::fmt::Write;

use colored::Colorize;
use wiki_web::Wiki;

/// `chilling-wiki check`. Loading already validated the content; this only
/// reports what was found.
pub fn check(wiki: &Wiki) {
    print!("{}", render_summary(wiki));
    println!("{}", "Content OK".green().bold());
}

pub fn render_summary(wiki: &Wiki) -> String {
    let mut out = String::new();
    let commands: usize = wiki
        .pages
        .iter()
        .flat_map(|page| &page.sections)
        .map(|section| section.commands.len())
        .sum();

    let _ = writeln!(out, "{}", wiki.site_title);
    let _ = writeln!(out, "{}", "=".repeat(wiki.site_title.chars().count()));
    let _ = writeln!(out, "{}", wiki.tagline);
    let _ = writeln!(out);
    let _ = writeln!(out, "Pages: {}", wiki.pages.len());
    let _ = writeln!(out, "Sections: {}", wiki.section_count());
    let _ = writeln!(out, "Commands: {commands}");
    let _ = writeln!(out);

    for page in &wiki.pages {
        let count = page.sections.len();
        let noun = if count == 1 { "section" } else { "sections" };
        let _ = writeln!(out, "{:<12}{}  ({count} {noun})", page.slug, page.title);
    }
    out
}
