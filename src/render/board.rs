//! Board grid HTML.

use std::fmt::Write;

use crate::board::{Board, Cell};
use crate::content::prettify;
use crate::utils::html::escape_attr;

/// Render one board as a `tetris-board` grid of 20 rows by 10 cells.
///
/// ```text
/// <div class="tetris-board" data-board-id="…" data-grid="row|row|…" data-pieces="t,l">
///   <div class="tetris-row"><div class="tetris-cell cell-t" data-piece="t"></div>…</div>
///   …
/// </div>
/// ```
pub fn render_board(board: &Board, board_id: &str) -> String {
    let mut html = String::with_capacity(12 * 1024);

    let grid = board
        .rows
        .iter()
        .map(Board::row_codes)
        .collect::<Vec<_>>()
        .join("|");

    let _ = write!(
        html,
        r#"<div class="tetris-board" data-board-id="{}""#,
        escape_attr(board_id)
    );
    if let Some(pieces) = board.pieces.as_deref().filter(|p| !p.is_empty()) {
        let codes: Vec<_> = pieces.iter().map(|p| p.code().to_string()).collect();
        let _ = write!(html, r#" data-pieces="{}""#, codes.join(","));
    }
    let _ = write!(html, r#" data-grid="{grid}">"#);

    for row in &board.rows {
        html.push_str(r#"<div class="tetris-row">"#);
        for cell in row {
            push_cell(&mut html, *cell);
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

fn push_cell(html: &mut String, cell: Cell) {
    let piece = match cell {
        Cell::Empty => String::new(),
        Cell::Filled(piece) => piece.code().to_string(),
    };
    let _ = write!(
        html,
        r#"<div class="tetris-cell cell-{}" data-piece="{piece}"></div>"#,
        cell.class_suffix()
    );
}

/// Wrap rendered boards in a `tetris-board-row`, each captioned by its file stem.
pub fn render_row(boards: &[(String, &str)]) -> String {
    let mut html = String::from(r#"<div class="tetris-board-row">"#);
    for (board_html, filename) in boards {
        html.push_str(r#"<figure class="tetris-board-wrapper">"#);
        html.push_str(board_html);
        let _ = write!(
            html,
            r#"<div class="tetris-board-caption">{}</div>"#,
            crate::utils::html::escape(&caption(filename))
        );
        html.push_str("</figure>");
    }
    html.push_str("</div>");
    html
}

/// Caption for a board file: its stem, prettified.
pub fn caption(filename: &str) -> String {
    let name = filename.trim_start_matches('.');
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    prettify(stem)
}
