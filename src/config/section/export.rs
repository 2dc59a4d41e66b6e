//! `[export]` section configuration.
//!
//! Settings for `tetris-guide build`, which renders every page into plain
//! HTML files for static hosting.
//!
//! # Example
//!
//! ```toml
//! [export]
//! output = "static_site"                        # Output directory
//! base_url = "https://user.github.io/guide"     # Absolute link base (optional)
//! ```
//!
//! Without `base_url`, links are written relative to each page so the
//! export also works from `file://`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output directory.
    pub output: PathBuf,

    /// Public URL prefix for absolute links.
    pub base_url: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: "static_site".into(),
            base_url: None,
        }
    }
}

impl ExportConfig {
    /// Collect validation errors for this section.
    pub fn validate(&self, errors: &mut Vec<String>) {
        if let Some(url) = &self.base_url
            && !(url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/'))
        {
            errors.push(format!(
                "[export.base_url] must be an http(s) URL or start with '/', got {url:?}"
            ));
        }
    }
}
