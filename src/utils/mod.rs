//! Utility modules.

pub mod html;
pub mod mime;
pub mod path;
pub mod plural;

pub use plural::plural_count;
