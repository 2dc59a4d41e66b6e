//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod import;
pub mod list;
pub mod serve;

pub use args::{Cli, Commands};
