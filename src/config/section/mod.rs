//! Configuration section definitions.
//!
//! Each module corresponds to a section in `guide.toml`:
//!
//! | Module    | TOML Section  | Purpose                                 |
//! |-----------|---------------|-----------------------------------------|
//! | `site`    | `[site]`      | Site title, author, footer              |
//! | `content` | `[content]`   | Content layout and file naming          |
//! | `sidebar` | `[sidebar]`   | Directory tree ordering                 |
//! | `serve`   | `[serve]`     | Web server                              |
//! | `export`  | `[export]`    | Static site export                      |

mod content;
mod export;
mod serve;
mod sidebar;
mod site;

pub use content::{ContentConfig, ContentLayout};
pub use export::ExportConfig;
pub use serve::ServeConfig;
pub use sidebar::SidebarConfig;
pub use site::SiteSectionConfig;
