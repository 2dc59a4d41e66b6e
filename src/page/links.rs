//! URL generation for served and exported pages.
//!
//! | View        | serve                  | export (relative)               |
//! |-------------|------------------------|---------------------------------|
//! | index       | `/`                    | `../../index.html`              |
//! | reader      | `/Basics/Overview`     | `../../Basics/Overview/index.html` |
//! | editor      | `/editor/Basics/Overview` | not exported                 |
//! | stylesheet  | `/static/guide.css`    | `../../static/guide.css`        |
//!
//! With `export.base_url` set the relative prefix is replaced by the base.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::content::PageSlug;

/// Characters escaped inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Route prefix of the editor view.
pub const EDITOR_PREFIX: &str = "editor";

/// Route prefix of static assets.
pub const STATIC_PREFIX: &str = "static";

/// Link builder for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    prefix: String,
    export: bool,
}

impl Links {
    /// Absolute links for the web server.
    pub fn serve() -> Self {
        Self {
            prefix: "/".into(),
            export: false,
        }
    }

    /// Links for a file exported `depth` directories below the output root.
    pub fn export(base_url: Option<&str>, depth: usize) -> Self {
        let prefix = match base_url {
            Some(base) => format!("{}/", base.trim_end_matches('/')),
            None if depth == 0 => "./".into(),
            None => "../".repeat(depth),
        };
        Self {
            prefix,
            export: true,
        }
    }

    pub fn home(&self) -> String {
        if self.export {
            format!("{}index.html", self.prefix)
        } else {
            self.prefix.clone()
        }
    }

    pub fn page(&self, slug: &PageSlug) -> String {
        let path = encode_slug(slug);
        if self.export {
            format!("{}{path}/index.html", self.prefix)
        } else {
            format!("{}{path}", self.prefix)
        }
    }

    /// Editor view link; exports have no editor.
    pub fn editor(&self, slug: &PageSlug) -> Option<String> {
        (!self.export).then(|| format!("{}{EDITOR_PREFIX}/{}", self.prefix, encode_slug(slug)))
    }

    pub fn static_file(&self, name: &str) -> String {
        format!("{}{STATIC_PREFIX}/{name}", self.prefix)
    }
}

/// Percent-encode each segment of a slug.
pub fn encode_slug(slug: &PageSlug) -> String {
    slug.segments()
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> PageSlug {
        PageSlug::parse(s).unwrap()
    }

    #[test]
    fn test_serve_links() {
        let links = Links::serve();
        assert_eq!(links.home(), "/");
        assert_eq!(links.page(&slug("Basics/T-Spin Double")), "/Basics/T-Spin%20Double");
        assert_eq!(
            links.editor(&slug("Basics/Overview")).as_deref(),
            Some("/editor/Basics/Overview")
        );
        assert_eq!(links.static_file("guide.css"), "/static/guide.css");
    }

    #[test]
    fn test_export_relative_links() {
        let links = Links::export(None, 2);
        assert_eq!(links.home(), "../../index.html");
        assert_eq!(links.page(&slug("a/b")), "../../a/b/index.html");
        assert_eq!(links.static_file("guide.css"), "../../static/guide.css");
        assert!(links.editor(&slug("a/b")).is_none());
    }

    #[test]
    fn test_export_root_links() {
        let links = Links::export(None, 0);
        assert_eq!(links.home(), "./index.html");
        assert_eq!(links.page(&slug("intro")), "./intro/index.html");
    }

    #[test]
    fn test_export_base_url() {
        let links = Links::export(Some("https://example.org/guide/"), 3);
        assert_eq!(links.home(), "https://example.org/guide/index.html");
        assert_eq!(links.page(&slug("x")), "https://example.org/guide/x/index.html");
    }

    #[test]
    fn test_encode_slug() {
        assert_eq!(encode_slug(&slug("DT Cannon/50%#1")), "DT%20Cannon/50%25%231");
    }
}
