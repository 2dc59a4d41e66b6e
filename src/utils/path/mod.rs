//! Path utilities.
//!
//! - [`fs`]: filesystem path normalization and confined joins

pub mod fs;

pub use fs::{normalize_path, safe_join};
