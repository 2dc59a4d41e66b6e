//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::board::image::DEFAULT_EMPTY_THRESHOLD;

/// Tetris strategy blog renderer
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: guide.toml)
    #[arg(short = 'C', long, global = true, default_value = "guide.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve pages and the editor preview over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Export every page as static HTML
    #[command(visible_alias = "b")]
    Build {
        /// Output directory path (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Public URL prefix for links (relative links if omitted)
        #[arg(short = 'U', long = "base-url", value_hint = clap::ValueHint::Url)]
        base_url: Option<String>,
    },

    /// Render every page and report broken or malformed boards
    Check,

    /// List available pages
    #[command(visible_alias = "ls")]
    List {
        /// Output JSON instead of plain text
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Convert a board screenshot (PNG/JPEG/WebP) into a board file
    Import {
        /// Image to convert
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Board file to write (default: input with `.txt` extension)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Allowed pieces written as a `# PIECES:` header (comma-separated)
        #[arg(short = 'P', long, value_delimiter = ',')]
        pieces: Option<Vec<String>>,

        /// Squared RGB distance above which a cell is empty
        #[arg(short, long, default_value_t = DEFAULT_EMPTY_THRESHOLD)]
        threshold: u32,

        /// Overwrite an existing board file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_args() {
        let cli = Cli::try_parse_from(["tetris-guide", "serve", "-p", "9000", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve { port, interface } => {
                assert_eq!(port, Some(9000));
                assert!(interface.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_import_pieces() {
        let cli =
            Cli::try_parse_from(["tetris-guide", "import", "board.png", "-P", "t,i"]).unwrap();
        match cli.command {
            Commands::Import {
                pieces, threshold, ..
            } => {
                assert_eq!(pieces, Some(vec!["t".to_string(), "i".to_string()]));
                assert_eq!(threshold, DEFAULT_EMPTY_THRESHOLD);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::try_parse_from(["tetris-guide", "check"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("guide.toml"));
    }
}
