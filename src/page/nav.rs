//! Sidebar tree and breadcrumb markup.

use std::fmt::Write;

use super::Links;
use crate::content::{PageSlug, TreeNode, prettify};
use crate::utils::html::{escape, escape_attr};

/// Collapsible sidebar. Directories on the path to `current` start open.
pub fn render_sidebar(tree: &[TreeNode], links: &Links, current: Option<&PageSlug>) -> String {
    let mut html = String::new();
    push_nodes(&mut html, tree, links, current);
    html
}

fn push_nodes(html: &mut String, nodes: &[TreeNode], links: &Links, current: Option<&PageSlug>) {
    html.push_str(r#"<ul class="nav-tree">"#);
    for node in nodes {
        match node {
            TreeNode::Directory {
                name,
                path,
                children,
            } => {
                let open = current.is_some_and(|slug| contains(path, slug));
                let _ = write!(
                    html,
                    r#"<li class="nav-dir"><details{}><summary>{}</summary>"#,
                    if open { " open" } else { "" },
                    escape(&prettify(name))
                );
                push_nodes(html, children, links, current);
                html.push_str("</details></li>");
            }
            TreeNode::Page(entry) => {
                let class = if current == Some(&entry.slug) {
                    "nav-page current"
                } else {
                    "nav-page"
                };
                let _ = write!(
                    html,
                    r#"<li class="{class}"><a href="{}">{}</a></li>"#,
                    escape_attr(&links.page(&entry.slug)),
                    escape(&entry.title)
                );
            }
        }
    }
    html.push_str("</ul>");
}

/// Whether `slug` lives below the directory at `path`.
fn contains(path: &str, slug: &PageSlug) -> bool {
    slug.as_str()
        .strip_prefix(path)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Directory names as plain text, the page title last.
pub fn render_breadcrumb(slug: &PageSlug) -> String {
    let mut html = String::from(r#"<div class="breadcrumb">"#);
    let segments: Vec<_> = slug.segments().collect();

    if let Some((_, dirs)) = segments.split_last() {
        for dir in dirs {
            let _ = write!(
                html,
                r#"<span class="breadcrumb-directory">{}</span><span class="breadcrumb-separator">→</span>"#,
                escape(&prettify(dir))
            );
        }
    }
    let _ = write!(
        html,
        r#"<span class="breadcrumb-current">{}</span></div>"#,
        escape(&slug.title())
    );
    html
}
