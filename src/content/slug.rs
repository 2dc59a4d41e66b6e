//! Page identifiers.

use std::fmt;

use serde::Serialize;

use super::ContentError;

/// Validated page path, e.g. `Basics/T-Spin Double`.
///
/// Invariants:
/// - One or more `/`-separated segments
/// - No empty, `.`, `..` or hidden (dot-prefixed) segments
/// - No backslashes or control characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PageSlug(String);

impl PageSlug {
    /// Parse a decoded URL path. Leading and trailing slashes are ignored.
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Err(ContentError::InvalidSlug(raw.to_string()));
        }
        if !trimmed.split('/').all(is_valid_segment) {
            return Err(ContentError::InvalidSlug(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build from already-validated path segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Result<Self, ContentError> {
        let joined = segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("/");
        Self::parse(&joined)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, outermost directory first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Last segment (the page folder or file stem).
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Display title derived from the last segment.
    pub fn title(&self) -> String {
        prettify(self.name())
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains('\\')
        && !segment.chars().any(char::is_control)
}

/// Turn a file or directory name into a display title.
///
/// `-` and `_` become spaces and each word starts upper-case; the rest of
/// each word is kept as written (`DT Cannon` stays `DT Cannon`).
pub fn prettify(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
