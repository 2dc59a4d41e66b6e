//! URL to route resolution.

use percent_encoding::percent_decode_str;

use crate::content::PageSlug;
use crate::page::{EDITOR_PREFIX, STATIC_PREFIX};

/// What a request path asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Index,
    /// `/static/<rel>`
    Static(String),
    /// `/editor/<page>`
    Editor(PageSlug),
    /// `/<page>`
    Reader(PageSlug),
    /// Undecodable or traversing path.
    Invalid,
}

/// Resolve a request URL: drop query and fragment, percent-decode, trim slashes.
pub fn resolve_route(url: &str) -> Route {
    let Some(path) = decode_path(url) else {
        return Route::Invalid;
    };
    let path = path.trim_matches('/');

    if path.is_empty() {
        return Route::Index;
    }
    if let Some(rest) = strip_segment(path, STATIC_PREFIX) {
        return Route::Static(rest.to_string());
    }
    if let Some(rest) = strip_segment(path, EDITOR_PREFIX) {
        return PageSlug::parse(rest).map_or(Route::Invalid, Route::Editor);
    }
    PageSlug::parse(path).map_or(Route::Invalid, Route::Reader)
}

/// `prefix/rest` → `rest`; `prefix` alone → empty.
fn strip_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}

fn decode_path(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}
