//! Content loading errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON")]
    Parse(#[from] serde_json::Error),

    #[error("page #{index} has an empty slug")]
    EmptySlug { index: usize },

    #[error("the slug `home` is reserved for the landing view")]
    ReservedSlug,

    #[error("page slug `{0}` may only contain ASCII letters, digits, `-`, `_` and `.`")]
    InvalidSlug(String),

    #[error("duplicate page slug `{0}`")]
    DuplicateSlug(String),

    #[error("page `{page}` has a section with an empty anchor id")]
    EmptyAnchor { page: String },

    #[error("section anchor `{anchor}` in page `{page}` may only contain ASCII letters, digits, `-`, `_` and `.`")]
    InvalidAnchor { page: String, anchor: String },

    #[error("duplicate section anchor `{anchor}` in page `{page}`")]
    DuplicateAnchor { page: String, anchor: String },
}
