//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Tetris Guide"
//! author = "someone"
//! footer = "Boards drawn with guideline colors."
//! ```

use serde::{Deserialize, Serialize};

/// Site metadata shown in the navbar and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title (navbar brand and `<title>` suffix).
    pub title: String,

    /// Author name, shown in the footer when set.
    pub author: String,

    /// Extra footer text (raw HTML).
    pub footer: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Tetris Guide".into(),
            author: String::new(),
            footer: String::new(),
        }
    }
}
