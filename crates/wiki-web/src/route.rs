//! Hash-fragment routes
//!
//! The location fragment is the whole navigation state: `#plugins` opens a
//! page, `#plugins~claims` opens it scrolled to a section, and an empty
//! fragment or `#home` shows the landing view.

use crate::model::{Page, Section, Wiki};

/// Fragment value of the landing view
pub const HOME_SLUG: &str = "home";

/// Separates a page slug from an in-page section anchor.
pub const ANCHOR_DELIMITER: char = '~';

/// A parsed fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Page {
        slug: String,
        anchor: Option<String>,
    },
}

impl Route {
    pub fn page(slug: impl Into<String>) -> Self {
        Route::Page {
            slug: slug.into(),
            anchor: None,
        }
    }

    pub fn section(slug: impl Into<String>, anchor: impl Into<String>) -> Self {
        Route::Page {
            slug: slug.into(),
            anchor: Some(anchor.into()),
        }
    }

    /// Parse a location fragment, with or without its leading `#`.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (slug, anchor) = match fragment.split_once(ANCHOR_DELIMITER) {
            Some((slug, anchor)) => (slug, Some(anchor).filter(|a| !a.is_empty())),
            None => (fragment, None),
        };

        if slug.is_empty() || slug == HOME_SLUG {
            Route::Home
        } else {
            Route::Page {
                slug: slug.to_string(),
                anchor: anchor.map(str::to_string),
            }
        }
    }

    /// Fragment value without the leading `#`
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => HOME_SLUG.to_string(),
            Route::Page { slug, anchor: None } => slug.clone(),
            Route::Page {
                slug,
                anchor: Some(anchor),
            } => format!("{slug}{ANCHOR_DELIMITER}{anchor}"),
        }
    }

    /// Link target for an `href` attribute
    pub fn href(&self) -> String {
        format!("#{}", self.to_fragment())
    }

    /// The route token: `home` or the page slug. Used to mark the active
    /// sidebar entry.
    pub fn slug(&self) -> &str {
        match self {
            Route::Home => HOME_SLUG,
            Route::Page { slug, .. } => slug,
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            Route::Home => None,
            Route::Page { anchor, .. } => anchor.as_deref(),
        }
    }

    /// Resolve against the wiki content.
    ///
    /// Unknown slugs resolve to [`Resolved::NotFound`]; an unknown anchor on a
    /// known page just leaves `section` empty.
    pub fn resolve<'a>(&self, wiki: &'a Wiki) -> Resolved<'a> {
        match self {
            Route::Home => Resolved::Home,
            Route::Page { slug, anchor } => match wiki.find_page(slug) {
                Some(page) => Resolved::Page {
                    page,
                    section: anchor.as_deref().and_then(|id| page.find_section(id)),
                },
                None => Resolved::NotFound { slug: slug.clone() },
            },
        }
    }
}

/// What a route displays
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    Home,
    Page {
        page: &'a Page,
        section: Option<&'a Section>,
    },
    NotFound {
        slug: String,
    },
}
