//! Board grid model and file format.
//!
//! A board file is a 20×10 grid of piece codes, optionally preceded by
//! `#` metadata lines:
//!
//! ```text
//! # PIECES: t, i, o
//! __________
//! ...           (20 rows total)
//! iiii__oott
//! ```
//!
//! - [`parse`]: text → [`Board`] with shape and alphabet validation
//! - [`image`]: screenshot quantization for `tetris-guide import`

mod error;
pub mod image;
mod parse;

pub use error::{BoardError, MalformedKind};

/// Number of rows in a board.
pub const BOARD_HEIGHT: usize = 20;
/// Number of columns in a board.
pub const BOARD_WIDTH: usize = 10;

/// Symbol for an empty cell.
pub const EMPTY_CODE: char = '_';

/// One of the seven tetrominoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Piece {
    /// All pieces in guideline order.
    pub const ALL: [Piece; 7] = [
        Self::I,
        Self::O,
        Self::T,
        Self::S,
        Self::Z,
        Self::J,
        Self::L,
    ];

    /// Parse a lower-case piece code.
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::I),
            'o' => Some(Self::O),
            't' => Some(Self::T),
            's' => Some(Self::S),
            'z' => Some(Self::Z),
            'j' => Some(Self::J),
            'l' => Some(Self::L),
            _ => None,
        }
    }

    /// Lower-case code used in board files and CSS classes.
    pub const fn code(self) -> char {
        match self {
            Self::I => 'i',
            Self::O => 'o',
            Self::T => 't',
            Self::S => 's',
            Self::Z => 'z',
            Self::J => 'j',
            Self::L => 'l',
        }
    }

    /// Guideline color (RGB).
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::I => [0, 255, 255],
            Self::O => [255, 255, 0],
            Self::T => [128, 0, 128],
            Self::S => [0, 255, 0],
            Self::Z => [255, 0, 0],
            Self::J => [0, 0, 255],
            Self::L => [255, 165, 0],
        }
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Piece),
}

impl Cell {
    /// Parse a board file symbol.
    pub const fn from_code(c: char) -> Option<Self> {
        if c == EMPTY_CODE {
            return Some(Self::Empty);
        }
        match Piece::from_code(c) {
            Some(piece) => Some(Self::Filled(piece)),
            None => None,
        }
    }

    /// Board file symbol.
    pub const fn code(self) -> char {
        match self {
            Self::Empty => EMPTY_CODE,
            Self::Filled(piece) => piece.code(),
        }
    }

    /// CSS class suffix (`cell-<suffix>`).
    pub const fn class_suffix(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Filled(Piece::I) => "i",
            Self::Filled(Piece::O) => "o",
            Self::Filled(Piece::T) => "t",
            Self::Filled(Piece::S) => "s",
            Self::Filled(Piece::Z) => "z",
            Self::Filled(Piece::J) => "j",
            Self::Filled(Piece::L) => "l",
        }
    }
}

/// A row of cells, top to bottom order within [`Board::rows`].
pub type Row = [Cell; BOARD_WIDTH];

/// Parsed board file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid rows, top row first.
    pub rows: [Row; BOARD_HEIGHT],
    /// Allowed pieces from the `PIECES:` header, in file order.
    pub pieces: Option<Vec<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
            pieces: None,
        }
    }
}

impl Board {
    /// Parse board file content. `file` is used for error reporting only.
    pub fn parse(text: &str, file: &str) -> Result<Self, BoardError> {
        parse::parse_board(text, file)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Row as board file symbols.
    pub fn row_codes(row: &Row) -> String {
        row.iter().map(|c| c.code()).collect()
    }

    /// Serialize back into the board file format.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((BOARD_WIDTH + 1) * BOARD_HEIGHT + 32);
        if let Some(pieces) = &self.pieces {
            let codes: Vec<String> = pieces.iter().map(|p| p.code().to_string()).collect();
            out.push_str("# PIECES: ");
            out.push_str(&codes.join(", "));
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&Self::row_codes(row));
            out.push('\n');
        }
        out
    }
}
