//! Embedded static resources.
//!
//! - `layout` - page shell (navbar, sidebar, footer)
//! - `css` - default stylesheet, minified by `build.rs`

mod template;

pub use template::{Template, TemplateVars};

pub mod layout {
    use super::{Template, TemplateVars};

    /// Variables for layout.html.
    ///
    /// All values are inserted verbatim and must already be escaped.
    pub struct LayoutVars<'a> {
        pub title: &'a str,
        pub site_title: &'a str,
        pub home: &'a str,
        pub stylesheet: &'a str,
        pub body_class: &'a str,
        pub sidebar: &'a str,
        pub outline: &'a str,
        pub footer: &'a str,
        pub body: &'a str,
    }

    impl TemplateVars for LayoutVars<'_> {
        fn apply(&self, content: &str) -> String {
            // Body last: page HTML may contain placeholder-like text.
            content
                .replace("__TITLE__", self.title)
                .replace("__SITE_TITLE__", self.site_title)
                .replace("__HOME__", self.home)
                .replace("__STYLESHEET__", self.stylesheet)
                .replace("__BODY_CLASS__", self.body_class)
                .replace("__SIDEBAR__", self.sidebar)
                .replace("__OUTLINE__", self.outline)
                .replace("__FOOTER__", self.footer)
                .replace("__BODY__", self.body)
        }
    }

    /// Page shell shared by every view.
    pub const LAYOUT_HTML: Template<LayoutVars<'static>> =
        Template::new(include_str!("layout.html"));

    /// Render the shell with borrowed values.
    pub fn render(vars: &LayoutVars<'_>) -> String {
        let template: Template<LayoutVars<'_>> = LAYOUT_HTML;
        template.render(vars)
    }
}

pub mod css {
    /// File name of the default stylesheet under `/static/`.
    pub const GUIDE_CSS_NAME: &str = "guide.css";

    /// Board colors, layout and editor styles.
    pub const GUIDE_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/guide.min.css"));
}

use anyhow::{Context, Result};
use std::path::Path;

/// Write embedded assets into an exported `static/` directory.
///
/// Files already present (copied from the project's static dir) win.
pub fn write_embedded_assets(static_out: &Path) -> Result<()> {
    std::fs::create_dir_all(static_out)
        .with_context(|| format!("Failed to create {}", static_out.display()))?;

    let css_path = static_out.join(css::GUIDE_CSS_NAME);
    if !css_path.exists() {
        std::fs::write(&css_path, css::GUIDE_CSS)
            .with_context(|| format!("Failed to write {}", css_path.display()))?;
    }
    Ok(())
}
