//! Board file parser.

use super::{BOARD_HEIGHT, BOARD_WIDTH, Board, BoardError, Cell, MalformedKind, Piece};

/// Metadata key listing the pieces a puzzle allows.
const PIECES_KEY: &str = "PIECES:";

/// Parse board file content.
///
/// Leading blank lines and `#` metadata lines are consumed first; the first
/// other line starts the grid. Trailing blank lines are ignored.
pub fn parse_board(text: &str, file: &str) -> Result<Board, BoardError> {
    let lines: Vec<&str> = text.lines().collect();

    let mut pieces = None;
    let mut start = lines.len();
    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(meta) = trimmed.strip_prefix('#') {
            if let Some(list) = parse_pieces(meta.trim(), file, idx + 1)? {
                pieces = Some(list);
            }
            continue;
        }
        start = idx;
        break;
    }

    let mut end = lines.len();
    while end > start && lines[end - 1].trim().is_empty() {
        end -= 1;
    }

    let mut board = Board {
        pieces,
        ..Board::default()
    };

    let grid = &lines[start..end];
    for (offset, line) in grid.iter().enumerate() {
        let line_no = start + offset + 1;
        if offset >= BOARD_HEIGHT {
            return Err(BoardError::malformed(
                file,
                line_no,
                MalformedKind::RowCount { found: grid.len() },
            ));
        }
        board.rows[offset] = parse_row(line, file, line_no)?;
    }

    if grid.len() < BOARD_HEIGHT {
        return Err(BoardError::malformed(
            file,
            end.max(1),
            MalformedKind::RowCount { found: grid.len() },
        ));
    }

    Ok(board)
}

fn parse_row(line: &str, file: &str, line_no: usize) -> Result<[Cell; BOARD_WIDTH], BoardError> {
    let width = line.chars().count();
    if width != BOARD_WIDTH {
        return Err(BoardError::malformed(
            file,
            line_no,
            MalformedKind::RowWidth { found: width },
        ));
    }

    let mut row = [Cell::Empty; BOARD_WIDTH];
    for (col, ch) in line.chars().enumerate() {
        row[col] = Cell::from_code(ch).ok_or_else(|| {
            BoardError::malformed(
                file,
                line_no,
                MalformedKind::Symbol {
                    found: ch,
                    column: col + 1,
                },
            )
        })?;
    }
    Ok(row)
}

/// Parse a `PIECES:` metadata line. Returns `Ok(None)` for other metadata
/// and for an empty list.
fn parse_pieces(meta: &str, file: &str, line_no: usize) -> Result<Option<Vec<Piece>>, BoardError> {
    let Some(payload) = strip_prefix_ignore_case(meta, PIECES_KEY) else {
        return Ok(None);
    };

    let mut pieces = Vec::new();
    for code in payload.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let code = code.to_lowercase();
        let mut chars = code.chars();
        let piece = match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_code(c),
            _ => None,
        };
        match piece {
            Some(piece) => pieces.push(piece),
            None => {
                return Err(BoardError::malformed(
                    file,
                    line_no,
                    MalformedKind::PieceCode { found: code },
                ));
            }
        }
    }

    Ok((!pieces.is_empty()).then_some(pieces))
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
