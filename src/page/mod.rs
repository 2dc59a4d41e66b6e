//! Full HTML pages: reader, editor, index and error views.
//!
//! ```text
//! page/
//! ├── links   # Links: serve vs export URLs
//! ├── nav     # Sidebar tree, breadcrumb
//! └── view    # render_reader, render_editor, render_index, render_error
//! ```

mod links;
mod nav;
mod view;

pub use links::{EDITOR_PREFIX, Links, STATIC_PREFIX};
pub use view::{PageContext, render_editor, render_error, render_index, render_reader};

use thiserror::Error;

use crate::content::ContentError;
use crate::render::RenderError;

/// Why a view could not be produced.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PageError {
    /// Whether the request should be answered with 404.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Content(err) if err.is_not_found())
    }
}
