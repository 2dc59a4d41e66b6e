//! Directory tree for sidebar navigation.
//!
//! ```text
//! content/
//! ├── Basics/                 Directory
//! │   ├── Overview/           Page   (contains page.txt)
//! │   │   ├── page.txt
//! │   │   └── boards/
//! │   └── T-Spin Double/      Page
//! └── Advanced/               Directory
//!     └── Layering/           Page
//! ```

use serde::Serialize;

use super::PageSlug;
use crate::config::SidebarConfig;

/// A page listed in navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub slug: PageSlug,
    pub title: String,
}

impl PageEntry {
    pub fn new(slug: PageSlug) -> Self {
        let title = slug.title();
        Self { slug, title }
    }
}

/// Node of the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Plain directory grouping further directories and pages.
    Directory {
        /// Directory name on disk.
        name: String,
        /// Path relative to the content root, `/`-separated.
        path: String,
        children: Vec<TreeNode>,
    },
    /// Page folder (tree layout) or page file (flat layout).
    Page(PageEntry),
}

impl TreeNode {
    /// Name on disk, used for ordering.
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } => name,
            Self::Page(entry) => entry.slug.name(),
        }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    /// Append every page below this node, in tree order.
    pub fn collect_pages(&self, out: &mut Vec<PageEntry>) {
        match self {
            Self::Directory { children, .. } => {
                for child in children {
                    child.collect_pages(out);
                }
            }
            Self::Page(entry) => out.push(entry.clone()),
        }
    }
}

/// All pages of a forest, in tree order.
pub fn flatten(nodes: &[TreeNode]) -> Vec<PageEntry> {
    let mut out = Vec::new();
    for node in nodes {
        node.collect_pages(&mut out);
    }
    out
}

/// Keep pages matching `keep`, then drop directories left empty.
pub fn retain_pages(nodes: &mut Vec<TreeNode>, keep: &mut impl FnMut(&PageEntry) -> bool) {
    nodes.retain_mut(|node| match node {
        TreeNode::Page(entry) => keep(entry),
        TreeNode::Directory { children, .. } => {
            retain_pages(children, keep);
            !children.is_empty()
        }
    });
}

/// Sort siblings: directories first, then configured order, then by name.
pub fn order_nodes(nodes: &mut [TreeNode], dir: &str, sidebar: &SidebarConfig) {
    nodes.sort_by_cached_key(|node| {
        (
            !node.is_directory(),
            sidebar.position(dir, node.name()).unwrap_or(usize::MAX),
            node.name().to_lowercase(),
        )
    });
}
