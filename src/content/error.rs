//! Content errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading portfolio content.
///
/// Content is author-controlled and validated once at build time. Unreadable
/// files and broken front-matter are skipped with a warning; everything else
/// aborts generation.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{path:?}: malformed date {value:?}")]
    MalformedDate { path: PathBuf, value: String },

    #[error("{path:?}: record has an empty title")]
    EmptyTitle { path: PathBuf },

    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?}: invalid front-matter: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("{path:?}: failed to render markdown: {message}")]
    Render { path: PathBuf, message: String },
}

impl ContentError {
    /// Whether the loader may skip the offending file and carry on
    pub fn is_skippable(&self) -> bool {
        matches!(self, ContentError::Io { .. } | ContentError::FrontMatter { .. })
    }
}
