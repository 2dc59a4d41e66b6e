//! Filesystem adapter for pages and boards.

use std::fs;
use std::path::{Path, PathBuf};

use super::tree::{PageEntry, TreeNode, flatten, order_nodes};
use super::{ContentError, PageSlug};
use crate::board::{Board, BoardError};
use crate::config::{ContentConfig, ContentLayout, SidebarConfig, SiteConfig};
use crate::debug;
use crate::page::{EDITOR_PREFIX, STATIC_PREFIX};
use crate::render::BoardLoader;

/// Page extension in the flat layout.
const PAGE_EXT: &str = "txt";

/// Top-level names taken by server routes and exported assets.
const RESERVED_NAMES: &[&str] = &[STATIC_PREFIX, EDITOR_PREFIX];

/// Reads page sources and boards below the content root.
///
/// Holds no state beyond the configuration; every call goes to disk so
/// edits show up on the next request.
#[derive(Debug, Clone, Copy)]
pub struct FsContent<'a> {
    config: &'a ContentConfig,
    sidebar: &'a SidebarConfig,
}

impl<'a> FsContent<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self {
            config: &site.content,
            sidebar: &site.sidebar,
        }
    }

    /// Locate the source file of a page.
    pub fn resolve_page(&self, slug: &PageSlug) -> Result<PathBuf, ContentError> {
        let not_found = || ContentError::NotFound(slug.to_string());
        if slug.segments().next().is_some_and(is_reserved) {
            return Err(not_found());
        }

        let path = match self.config.layout {
            ContentLayout::Tree => {
                // Page folders are leaves, so no ancestor may itself be a page.
                let mut dir = self.config.dir.clone();
                for (i, segment) in slug.segments().enumerate() {
                    if self.config.is_ignored(segment)
                        || (i > 0 && dir.join(&self.config.page_file).is_file())
                    {
                        return Err(not_found());
                    }
                    dir.push(segment);
                }
                dir.join(&self.config.page_file)
            }
            ContentLayout::Flat => {
                if slug.depth() != 1 {
                    return Err(not_found());
                }
                self.config
                    .dir
                    .join(&self.config.pages_dir)
                    .join(format!("{slug}.{PAGE_EXT}"))
            }
        };

        if path.is_file() {
            Ok(path)
        } else {
            Err(not_found())
        }
    }

    /// Read a page source as text.
    pub fn read_page(&self, slug: &PageSlug) -> Result<String, ContentError> {
        let path = self.resolve_page(slug)?;
        fs::read_to_string(&path).map_err(|err| ContentError::Io(path, err))
    }

    /// Page folder of a tree-layout page.
    fn page_dir(&self, slug: &PageSlug) -> PathBuf {
        slug.segments()
            .fold(self.config.dir.clone(), |dir, segment| dir.join(segment))
    }

    /// Directory holding the boards a page may reference.
    pub fn board_dir(&self, page: &PageSlug) -> PathBuf {
        match self.config.layout {
            ContentLayout::Tree => self.page_dir(page).join(&self.config.boards_dir),
            ContentLayout::Flat => self.config.dir.join(&self.config.boards_dir),
        }
    }

    /// Locate a board file referenced by `page`.
    ///
    /// Only plain file names are accepted, so lookups never leave the
    /// page's board directory.
    pub fn resolve_board(&self, page: &PageSlug, filename: &str) -> Result<PathBuf, BoardError> {
        if !is_board_name(filename) {
            return Err(BoardError::InvalidName(filename.to_string()));
        }

        let path = self.board_dir(page).join(filename);
        if path.is_file() {
            Ok(path)
        } else {
            Err(BoardError::Missing(self.board_id(page, filename)))
        }
    }

    /// Every page, ordered by slug.
    pub fn list_pages(&self) -> Result<Vec<PageEntry>, ContentError> {
        let mut pages = flatten(&self.tree()?);
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }

    /// Navigation tree of the content root.
    ///
    /// A missing content root yields an empty tree.
    pub fn tree(&self) -> Result<Vec<TreeNode>, ContentError> {
        match self.config.layout {
            ContentLayout::Tree => {
                if !self.config.dir.is_dir() {
                    return Ok(Vec::new());
                }
                self.scan_dir(&self.config.dir, &[])
            }
            ContentLayout::Flat => self.scan_flat(),
        }
    }

    fn scan_dir(&self, dir: &Path, prefix: &[String]) -> Result<Vec<TreeNode>, ContentError> {
        let mut nodes = Vec::new();

        for name in read_dir_names(dir)? {
            let path = dir.join(&name);
            if self.config.is_ignored(&name) || !path.is_dir() {
                continue;
            }
            if prefix.is_empty() && is_reserved(&name) {
                debug!("content"; "skipping `{}`: reserved name", name);
                continue;
            }

            let mut segments = prefix.to_vec();
            segments.push(name.clone());

            if path.join(&self.config.page_file).is_file() {
                // Page folders are leaves: nested folders belong to the page.
                if let Ok(slug) = PageSlug::from_segments(&segments) {
                    nodes.push(TreeNode::Page(PageEntry::new(slug)));
                }
                continue;
            }

            let children = self.scan_dir(&path, &segments)?;
            if !children.is_empty() {
                nodes.push(TreeNode::Directory {
                    name,
                    path: segments.join("/"),
                    children,
                });
            }
        }

        order_nodes(&mut nodes, &prefix.join("/"), self.sidebar);
        Ok(nodes)
    }

    fn scan_flat(&self) -> Result<Vec<TreeNode>, ContentError> {
        let dir = self.config.dir.join(&self.config.pages_dir);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut nodes: Vec<_> = read_dir_names(&dir)?
            .into_iter()
            .filter_map(|name| {
                let stem = name.strip_suffix(PAGE_EXT)?.strip_suffix('.')?;
                if !dir.join(&name).is_file() || is_reserved(stem) {
                    return None;
                }
                PageSlug::parse(stem).ok()
            })
            .map(|slug| TreeNode::Page(PageEntry::new(slug)))
            .collect();

        order_nodes(&mut nodes, "", self.sidebar);
        Ok(nodes)
    }
}

impl BoardLoader for FsContent<'_> {
    fn load_board(&self, page: &PageSlug, filename: &str) -> Result<Board, BoardError> {
        let path = self.resolve_board(page, filename)?;
        let text = fs::read_to_string(&path).map_err(|err| BoardError::Io(path, err))?;
        Board::parse(&text, &self.board_id(page, filename))
    }

    fn board_id(&self, page: &PageSlug, filename: &str) -> String {
        match self.config.layout {
            ContentLayout::Tree => format!("{page}/{}/{filename}", self.config.boards_dir),
            ContentLayout::Flat => format!("{}/{filename}", self.config.boards_dir),
        }
    }
}

/// UTF-8 entry names of a directory; other names are skipped.
fn read_dir_names(dir: &Path) -> Result<Vec<String>, ContentError> {
    let entries = fs::read_dir(dir).map_err(|err| ContentError::Io(dir.to_path_buf(), err))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ContentError::Io(dir.to_path_buf(), err))?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

fn is_board_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_config_at};
    use tempfile::TempDir;

    const EMPTY_BOARD: &str = "__________\n";

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn empty_board() -> String {
        EMPTY_BOARD.repeat(20)
    }

    fn tree_site() -> (TempDir, SiteConfig) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "content/Basics/Overview/page.txt", "overview");
        write(root, "content/Basics/Overview/boards/a.txt", &empty_board());
        write(root, "content/Basics/T-Spin Double/page.txt", "tsd");
        write(root, "content/Advanced/Layering/page.txt", "layering");
        write(root, "content/Empty/Nothing/notes.md", "not a page");
        write(root, "content/boards_old/Old/page.txt", "old");
        write(root, "content/.git/Hidden/page.txt", "hidden");
        let config = test_config_at(root, "");
        (temp, config)
    }

    #[test]
    fn test_resolve_tree_page() {
        let (_temp, config) = tree_site();
        let content = FsContent::new(&config);

        let slug = PageSlug::parse("Basics/Overview").unwrap();
        assert_eq!(content.read_page(&slug).unwrap(), "overview");
        assert!(content.resolve_page(&slug).unwrap().ends_with("Overview/page.txt"));
    }

    #[test]
    fn test_resolve_missing_and_ignored() {
        let (_temp, config) = tree_site();
        let content = FsContent::new(&config);

        for raw in ["Basics", "Basics/Nope", "boards_old/Old"] {
            let slug = PageSlug::parse(raw).unwrap();
            let err = content.resolve_page(&slug).unwrap_err();
            assert!(err.is_not_found(), "{raw}: {err}");
        }
    }

    #[test]
    fn test_nested_folder_inside_page_is_not_a_page() {
        let (_temp, config) = tree_site();
        write(config.get_root(), "content/Basics/Overview/Sub/page.txt", "nested");
        let content = FsContent::new(&config);

        let nested = PageSlug::parse("Basics/Overview/Sub").unwrap();
        assert!(content.resolve_page(&nested).unwrap_err().is_not_found());
        assert!(content.list_pages().unwrap().iter().all(|p| p.slug != nested));
    }

    #[test]
    fn test_reserved_top_level_names() {
        let (_temp, config) = tree_site();
        write(config.get_root(), "content/static/page.txt", "shadowed");
        write(config.get_root(), "content/editor/Notes/page.txt", "shadowed");
        write(config.get_root(), "content/Basics/static/page.txt", "nested is fine");
        let content = FsContent::new(&config);

        let names: Vec<_> = content.tree().unwrap().iter().map(|n| n.name().to_string()).collect();
        assert_eq!(names, vec!["Advanced", "Basics"]);
        for raw in ["static", "editor/Notes"] {
            let slug = PageSlug::parse(raw).unwrap();
            assert!(content.resolve_page(&slug).unwrap_err().is_not_found(), "{raw}");
        }
        assert!(content.resolve_page(&PageSlug::parse("Basics/static").unwrap()).is_ok());
    }

    #[test]
    fn test_tree_structure() {
        let (_temp, config) = tree_site();
        let content = FsContent::new(&config);
        let tree = content.tree().unwrap();

        let names: Vec<_> = tree.iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["Advanced", "Basics"]);

        let TreeNode::Directory { children, path, .. } = &tree[1] else {
            panic!("expected directory");
        };
        assert_eq!(path, "Basics");
        let pages: Vec<_> = children.iter().map(TreeNode::name).collect();
        assert_eq!(pages, vec!["Overview", "T-Spin Double"]);
    }

    #[test]
    fn test_tree_sidebar_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "content/Basics/A/page.txt", "");
        write(root, "content/Basics/B/page.txt", "");
        write(root, "content/Zeta/X/page.txt", "");
        let config = test_config_at(
            root,
            "[sidebar.order]\n\"\" = [\"Zeta\"]\n\"Basics\" = [\"B\"]",
        );
        let tree = FsContent::new(&config).tree().unwrap();

        assert_eq!(tree[0].name(), "Zeta");
        let TreeNode::Directory { children, .. } = &tree[1] else {
            panic!("expected directory");
        };
        assert_eq!(children[0].name(), "B");
    }

    #[test]
    fn test_list_pages_sorted() {
        let (_temp, config) = tree_site();
        let pages = FsContent::new(&config).list_pages().unwrap();
        let slugs: Vec<_> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["Advanced/Layering", "Basics/Overview", "Basics/T-Spin Double"]
        );
        assert_eq!(pages[2].title, "T Spin Double");
    }

    #[test]
    fn test_missing_content_root() {
        let temp = TempDir::new().unwrap();
        let config = test_config_at(temp.path(), "");
        assert!(FsContent::new(&config).tree().unwrap().is_empty());
    }

    #[test]
    fn test_load_board() {
        let (_temp, config) = tree_site();
        let content = FsContent::new(&config);
        let slug = PageSlug::parse("Basics/Overview").unwrap();

        let board = content.load_board(&slug, "a.txt").unwrap();
        assert_eq!(board.cells().count(), 200);
    }

    #[test]
    fn test_missing_board_names_page() {
        let (_temp, config) = tree_site();
        let content = FsContent::new(&config);
        let slug = PageSlug::parse("Basics/T-Spin Double").unwrap();

        match content.load_board(&slug, "gone.txt").unwrap_err() {
            BoardError::Missing(id) => assert_eq!(id, "Basics/T-Spin Double/boards/gone.txt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_board_name_confined() {
        let (_temp, config) = tree_site();
        let content = FsContent::new(&config);
        let slug = PageSlug::parse("Basics/Overview").unwrap();

        for bad in ["../page.txt", "..", "", ".secret", "sub\\a.txt"] {
            assert!(
                matches!(
                    content.resolve_board(&slug, bad),
                    Err(BoardError::InvalidName(_))
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_malformed_board_identifies_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "content/P/page.txt", "");
        write(root, "content/P/boards/short.txt", &EMPTY_BOARD.repeat(19));
        let config = test_config_at(root, "");
        let slug = PageSlug::parse("P").unwrap();

        let err = FsContent::new(&config).load_board(&slug, "short.txt").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("P/boards/short.txt"));
    }

    #[test]
    fn test_flat_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "content/pages/t-spin-basics.txt", "basics");
        write(root, "content/pages/notes.md", "skipped");
        write(root, "content/pages/1-opener.txt", "opener");
        write(root, "content/boards/tsd.txt", &empty_board());
        let config = test_config_at(root, "[content]\nlayout = \"flat\"");
        let content = FsContent::new(&config);

        let slugs: Vec<_> = content
            .list_pages()
            .unwrap()
            .into_iter()
            .map(|p| p.slug.to_string())
            .collect();
        assert_eq!(slugs, vec!["1-opener", "t-spin-basics"]);

        let slug = PageSlug::parse("t-spin-basics").unwrap();
        assert_eq!(content.read_page(&slug).unwrap(), "basics");
        assert!(content.load_board(&slug, "tsd.txt").is_ok());

        let nested = PageSlug::parse("pages/t-spin-basics").unwrap();
        assert!(content.resolve_page(&nested).is_err());
    }
}
