//! Board loading errors.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or parsing a board file.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("malformed board `{file}` (line {line}): {reason}")]
    Malformed {
        file: String,
        /// 1-based line number in the board file.
        line: usize,
        reason: MalformedKind,
    },

    #[error("board file not found: `{0}`")]
    Missing(String),

    #[error("invalid board file name `{0}`")]
    InvalidName(String),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

impl BoardError {
    pub fn malformed(file: &str, line: usize, reason: MalformedKind) -> Self {
        Self::Malformed {
            file: file.to_string(),
            line,
            reason,
        }
    }

    /// Check if this is a shape/alphabet violation.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// What made a board file malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// Grid has the wrong number of rows.
    RowCount { found: usize },
    /// A row has the wrong number of characters.
    RowWidth { found: usize },
    /// A character outside `{i,o,t,s,z,j,l,_}`.
    Symbol { found: char, column: usize },
    /// `PIECES:` lists something other than the seven piece codes.
    PieceCode { found: String },
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use super::{BOARD_HEIGHT, BOARD_WIDTH};
        match self {
            Self::RowCount { found } => {
                write!(f, "expected {BOARD_HEIGHT} rows, found {found}")
            }
            Self::RowWidth { found } => {
                write!(f, "expected {BOARD_WIDTH} characters, found {found}")
            }
            Self::Symbol { found, column } => {
                write!(f, "unknown symbol {found:?} at column {column}")
            }
            Self::PieceCode { found } => write!(f, "unknown piece code {found:?} in PIECES"),
        }
    }
}
