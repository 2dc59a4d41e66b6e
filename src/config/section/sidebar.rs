//! `[sidebar]` section configuration.
//!
//! Controls the order of entries in the directory tree. Keys are directory
//! paths relative to the content root (`""` for the top level), values list
//! child directory names in display order. Children not listed follow in
//! alphabetical order.
//!
//! # Example
//!
//! ```toml
//! [sidebar.order]
//! "" = ["Basics", "Double Double", "Advanced"]
//! "Basics" = ["Overview", "T-Spin Double", "T-Spin Triple"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sidebar ordering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Directory path → ordered child names.
    pub order: BTreeMap<String, Vec<String>>,
}

impl SidebarConfig {
    /// Position of `child` within the configured order of `dir`, if listed.
    pub fn position(&self, dir: &str, child: &str) -> Option<usize> {
        self.order
            .get(dir)
            .and_then(|names| names.iter().position(|n| n == child))
    }
}
