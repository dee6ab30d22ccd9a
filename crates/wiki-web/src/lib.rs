//! Chilling SMP wiki core
//!
//! Everything that does not need a browser:
//! - `model`: pages, sections and icons, with validation
//! - `content`: the bundled wiki content
//! - `search`: case-insensitive page filtering
//! - `route`: hash-fragment routes and their resolution
//! - `command`: command lines and their trailing comments
//! - `markdown`: Markdown rendering for section text
//! - `assets` / `static_site`: the exported HTML shell

pub mod assets;
pub mod command;
pub mod content;
pub mod error;
pub mod escape;
pub mod markdown;
pub mod model;
pub mod route;
pub mod search;
pub mod static_site;

pub use error::ContentError;
pub use model::{Icon, Page, PageSummary, Section, Wiki};
pub use route::{Resolved, Route};
pub use search::filter_pages;
pub use static_site::{SiteOptions, StaticSiteGenerator};
