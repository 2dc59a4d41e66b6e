//! Page sources and boards on disk.
//!
//! ```text
//! content/
//! ├── error   # ContentError
//! ├── slug    # PageSlug, prettify
//! ├── store   # FsContent: page/board resolution, directory scan
//! └── tree    # TreeNode, PageEntry, ordering
//! ```

mod error;
mod slug;
mod store;
mod tree;

pub use error::ContentError;
pub use slug::{PageSlug, prettify};
pub use store::FsContent;
pub use tree::{PageEntry, TreeNode, flatten, retain_pages};
