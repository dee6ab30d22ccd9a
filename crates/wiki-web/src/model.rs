//! Wiki content model
//!
//! These types hold the editable wiki content: pages, their sections, and the
//! site-level title and tagline. They are plain serde data so the same JSON can
//! be embedded into the static site, served by the preview server, and parsed
//! again by the browser app.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::route::HOME_SLUG;
use crate::search::filter_pages;

/// The whole wiki: site header text plus the ordered page list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wiki {
    /// Shown in the sidebar header and the home view greeting
    pub site_title: String,
    /// One-line description under the site title
    pub tagline: String,
    /// Pages in navigation order
    pub pages: Vec<Page>,
}

impl Wiki {
    /// Parse and validate wiki content from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let wiki: Wiki = serde_json::from_str(json)?;
        wiki.validate()?;
        Ok(wiki)
    }

    /// Read, parse and validate a content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let wiki = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            pages = wiki.pages.len(),
            "loaded wiki content"
        );
        Ok(wiki)
    }

    /// Find a page by its slug
    pub fn find_page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.slug == slug)
    }

    /// Pages matching a free-text query, in navigation order
    pub fn search(&self, query: &str) -> Vec<&Page> {
        filter_pages(query, &self.pages)
    }

    pub fn section_count(&self) -> usize {
        self.pages.iter().map(|page| page.sections.len()).sum()
    }

    /// Check the invariants the router relies on.
    ///
    /// Slugs must be non-empty, fragment-safe, unique, and must not shadow the
    /// home route. Section anchors must be non-empty, fragment-safe, and unique
    /// within their page.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut slugs = HashSet::new();

        for (index, page) in self.pages.iter().enumerate() {
            if page.slug.is_empty() {
                return Err(ContentError::EmptySlug { index });
            }
            if page.slug == HOME_SLUG {
                return Err(ContentError::ReservedSlug);
            }
            if !is_fragment_safe(&page.slug) {
                return Err(ContentError::InvalidSlug(page.slug.clone()));
            }
            if !slugs.insert(page.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(page.slug.clone()));
            }

            let mut anchors = HashSet::new();
            for section in &page.sections {
                if section.id.is_empty() {
                    return Err(ContentError::EmptyAnchor {
                        page: page.slug.clone(),
                    });
                }
                if !is_fragment_safe(&section.id) {
                    return Err(ContentError::InvalidAnchor {
                        page: page.slug.clone(),
                        anchor: section.id.clone(),
                    });
                }
                if !anchors.insert(section.id.as_str()) {
                    return Err(ContentError::DuplicateAnchor {
                        page: page.slug.clone(),
                        anchor: section.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Slugs and anchors travel in the URL fragment, so keep them to a
/// conservative character set (and away from the `~` anchor delimiter).
fn is_fragment_safe(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// A wiki page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier, used as the routing key and fragment value
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub icon: Icon,
    /// Short description shown on the home grid and page header
    pub summary: String,
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Page {
    /// Find a section by its anchor id
    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// The text a query is matched against: title, summary, then one line
    /// per section holding its title and body separated by a space.
    pub fn search_text(&self) -> String {
        let mut text = format!("{}\n{}", self.title, self.summary);
        for section in &self.sections {
            text.push('\n');
            text.push_str(&section.title);
            text.push(' ');
            text.push_str(&section.body);
        }
        text
    }
}

/// A collapsible part of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, unique within the page
    pub id: String,
    pub title: String,
    /// Body text (inline Markdown allowed)
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    /// Command lines; a trailing `# comment` is shown but not copied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
}

/// Icon tag of a page. Unknown tags fall back to [`Icon::Book`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Icon {
    #[default]
    Book,
    Server,
    Wrench,
    Home,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Book => "Book",
            Icon::Server => "Server",
            Icon::Wrench => "Wrench",
            Icon::Home => "Home",
        }
    }

    /// Parse an icon tag, falling back to `Book`
    pub fn from_name(name: &str) -> Self {
        match name {
            "Server" => Icon::Server,
            "Wrench" => Icon::Wrench,
            "Home" => Icon::Home,
            _ => Icon::Book,
        }
    }

    /// CSS class suffix
    pub fn css_class(&self) -> &'static str {
        match self {
            Icon::Book => "book",
            Icon::Server => "server",
            Icon::Wrench => "wrench",
            Icon::Home => "home",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Book => "\u{1F4D6}",
            Icon::Server => "\u{1F5A5}",
            Icon::Wrench => "\u{1F527}",
            Icon::Home => "\u{1F3E0}",
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Icon::from_name(&name)
    }
}

impl From<Icon> for &'static str {
    fn from(icon: Icon) -> Self {
        icon.as_str()
    }
}

/// A page reference without its sections, used for search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub slug: String,
    pub title: String,
    pub icon: Icon,
    pub summary: String,
    pub tags: Vec<String>,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        PageSummary {
            slug: page.slug.clone(),
            title: page.title.clone(),
            icon: page.icon,
            summary: page.summary.clone(),
            tags: page.tags.clone(),
        }
    }
}
