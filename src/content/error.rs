//! Content resolution errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading page sources.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("page not found: `{0}`")]
    NotFound(String),

    #[error("invalid page path `{0}`")]
    InvalidSlug(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

impl ContentError {
    /// Whether the request should be answered with 404.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidSlug(_))
    }
}
