//! `[content]` section configuration.
//!
//! Describes where pages and boards live on disk.
//!
//! # Example
//!
//! ```toml
//! [content]
//! dir = "content"           # Content root (relative to guide.toml)
//! layout = "tree"           # "tree": <path>/<slug>/page.txt, "flat": pages/<slug>.txt
//! page_file = "page.txt"    # Main content file of a page folder (tree layout)
//! boards_dir = "boards"     # Board directory name
//! pages_dir = "pages"       # Page directory (flat layout)
//! static_dir = "static"     # Stylesheets and images served under /static/
//! ignore = ["boards", "pages", "boards_old"]
//! hide_broken = true        # Leave pages with bad boards out of navigation
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content directory layout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentLayout {
    /// One file per page: `<dir>/<pages_dir>/<slug>.txt`, shared board directory.
    Flat,
    /// Page folders: `<dir>/<path...>/<slug>/<page_file>` with their own boards (default).
    #[default]
    Tree,
}

/// Content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content root directory.
    pub dir: PathBuf,

    /// Directory layout.
    pub layout: ContentLayout,

    /// Main content file name inside a page folder.
    pub page_file: String,

    /// Board directory name (per page folder, or shared in flat layout).
    pub boards_dir: String,

    /// Page directory name for the flat layout.
    pub pages_dir: String,

    /// Static asset directory.
    pub static_dir: PathBuf,

    /// Directory names never treated as part of the page tree.
    pub ignore: Vec<String>,

    /// Hide pages whose boards fail to load from the sidebar and index.
    pub hide_broken: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
            layout: ContentLayout::Tree,
            page_file: "page.txt".into(),
            boards_dir: "boards".into(),
            pages_dir: "pages".into(),
            static_dir: "static".into(),
            ignore: vec!["boards".into(), "pages".into(), "boards_old".into()],
            hide_broken: true,
        }
    }
}

impl ContentConfig {
    /// Check whether a directory name is excluded from the page tree.
    #[inline]
    pub fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignore.iter().any(|i| i == name)
    }

    /// Collect validation errors for this section.
    pub fn validate(&self, errors: &mut Vec<String>) {
        for (field, value) in [
            ("content.page_file", &self.page_file),
            ("content.boards_dir", &self.boards_dir),
            ("content.pages_dir", &self.pages_dir),
        ] {
            if !is_plain_name(value) {
                errors.push(format!("[{field}] must be a plain file name, got {value:?}"));
            }
        }
    }
}

/// A single path component: non-empty, no separators, not `.`/`..`.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
