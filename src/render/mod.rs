//! Page source to HTML conversion.
//!
//! Sources are authored HTML with three kinds of special lines:
//!
//! | Line                     | Output                              |
//! |--------------------------|-------------------------------------|
//! | `---`                    | `<hr class="section-separator">`    |
//! | `[[BOARD: a.txt]]`       | one `tetris-board` grid             |
//! | `[[BOARDS: a, b, c]]`    | `tetris-board-row` of up to three   |
//!
//! Every other line is copied through byte for byte, terminator included.
//! Conversion is a pure function of the source and what the
//! [`BoardLoader`] returns; a single failing board fails the page.

mod board;
mod marker;
pub mod outline;

use board::{render_board, render_row};
use marker::Line;

use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::content::PageSlug;

/// Replacement for a `---` line.
pub const SEPARATOR_HTML: &str = r#"<hr class="section-separator">"#;

/// Loads the boards a page refers to.
pub trait BoardLoader {
    fn load_board(&self, page: &PageSlug, filename: &str) -> Result<Board, BoardError>;

    /// Identifier shown in `data-board-id` and in error messages.
    fn board_id(&self, page: &PageSlug, filename: &str) -> String {
        format!("{page}/boards/{filename}")
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Convert a page source into HTML.
pub fn convert(
    source: &str,
    page: &PageSlug,
    loader: &dyn BoardLoader,
) -> Result<String, RenderError> {
    let mut html = String::with_capacity(source.len() * 2);

    for raw in source.split_inclusive('\n') {
        let (line, ending) = split_terminator(raw);
        match Line::classify(line) {
            Line::Text => html.push_str(line),
            Line::Separator => html.push_str(SEPARATOR_HTML),
            Line::Board(name) => html.push_str(&load_and_render(loader, page, name)?),
            Line::Boards(names) => {
                let boards = names
                    .iter()
                    .map(|name| Ok((load_and_render(loader, page, name)?, *name)))
                    .collect::<Result<Vec<_>, RenderError>>()?;
                html.push_str(&render_row(&boards));
            }
        }
        html.push_str(ending);
    }

    Ok(html)
}

fn load_and_render(
    loader: &dyn BoardLoader,
    page: &PageSlug,
    filename: &str,
) -> Result<String, RenderError> {
    let board = loader.load_board(page, filename)?;
    Ok(render_board(&board, &loader.board_id(page, filename)))
}

/// Split a line into content and its `\n` / `\r\n` terminator.
fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Board file names a page loads, in source order.
pub fn referenced_boards(source: &str) -> Vec<&str> {
    source
        .lines()
        .flat_map(|line| Line::classify(line).boards().to_vec())
        .collect()
}

/// Load every board a page refers to, collecting all failures.
pub fn check_page(source: &str, page: &PageSlug, loader: &dyn BoardLoader) -> Vec<BoardError> {
    referenced_boards(source)
        .into_iter()
        .filter_map(|name| loader.load_board(page, name).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MalformedKind;
    use rustc_hash::FxHashMap;

    /// Boards served from memory, parsed on every load.
    #[derive(Default)]
    struct MemoryLoader {
        files: FxHashMap<String, String>,
    }

    impl MemoryLoader {
        fn with(mut self, name: &str, text: &str) -> Self {
            self.files.insert(name.to_string(), text.to_string());
            self
        }
    }

    impl BoardLoader for MemoryLoader {
        fn load_board(&self, page: &PageSlug, filename: &str) -> Result<Board, BoardError> {
            let id = self.board_id(page, filename);
            let text = self
                .files
                .get(filename)
                .ok_or_else(|| BoardError::Missing(id.clone()))?;
            Board::parse(text, &id)
        }
    }

    fn page() -> PageSlug {
        PageSlug::parse("Basics/T-Spin Double").unwrap()
    }

    fn empty_board() -> String {
        "__________\n".repeat(20)
    }

    fn loader() -> MemoryLoader {
        MemoryLoader::default()
            .with("a.txt", &empty_board())
            .with("b.txt", &empty_board())
            .with("c.txt", &empty_board())
            .with("d.txt", &empty_board())
    }

    #[test]
    fn test_passthrough_identity() {
        let source = "<div>hello</div>\r\n\n  <p>indented</p>\n[[BOARD: a.txt]\n<!-- --- -->\nno newline";
        assert_eq!(convert(source, &page(), &loader()).unwrap(), source);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(convert("", &page(), &loader()).unwrap(), "");
    }

    #[test]
    fn test_separator_placement() {
        let out = convert("a\n---\nb\n---  \n", &page(), &loader()).unwrap();
        assert_eq!(
            out,
            format!("a\n{SEPARATOR_HTML}\nb\n{SEPARATOR_HTML}\n")
        );
    }

    #[test]
    fn test_div_separator_board_scenario() {
        let source = "<div>intro</div>\n---\n[[BOARD: a.txt]]\n";
        let out = convert(source, &page(), &loader()).unwrap();
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "<div>intro</div>");
        assert_eq!(lines[1], SEPARATOR_HTML);
        assert!(lines[2].starts_with(
            r#"<div class="tetris-board" data-board-id="Basics/T-Spin Double/boards/a.txt""#
        ));
        assert_eq!(lines[2].matches("tetris-cell cell-empty").count(), 200);
    }

    #[test]
    fn test_single_board_uses_first_name() {
        let out = convert("[[BOARD: a.txt, missing.txt]]", &page(), &loader()).unwrap();
        assert_eq!(out.matches(r#"class="tetris-board""#).count(), 1);
        assert!(!out.contains("tetris-board-row"));
    }

    #[test]
    fn test_two_board_row() {
        let out = convert("[[BOARDS: a.txt, b.txt]]\n", &page(), &loader()).unwrap();
        assert!(out.starts_with(r#"<div class="tetris-board-row">"#));
        assert_eq!(out.matches("tetris-board-wrapper").count(), 2);
        assert_eq!(out.matches(r#"class="tetris-board""#).count(), 2);
        assert!(out.ends_with("</div>\n"));
    }

    #[test]
    fn test_row_drops_fourth_board() {
        let out = convert("[[BOARDS: a.txt, b.txt, c.txt, d.txt]]", &page(), &loader()).unwrap();
        assert_eq!(out.matches("tetris-board-wrapper").count(), 3);
        assert!(!out.contains("boards/d.txt"));
    }

    #[test]
    fn test_empty_row() {
        let out = convert("[[BOARDS: ]]", &page(), &loader()).unwrap();
        assert_eq!(out, r#"<div class="tetris-board-row"></div>"#);
    }

    #[test]
    fn test_missing_board_aborts() {
        let err = convert("ok\n[[BOARD: gone.txt]]\n", &page(), &loader()).unwrap_err();
        match err {
            RenderError::Board(BoardError::Missing(id)) => {
                assert_eq!(id, "Basics/T-Spin Double/boards/gone.txt")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_boards_abort() {
        let short = "__________\n".repeat(19);
        let narrow = "_________\n".repeat(20);
        let wide = "___________\n".repeat(20);
        let mut symbol = "__________\n".repeat(19);
        symbol.push_str("____x_____\n");

        let loader = MemoryLoader::default()
            .with("short.txt", &short)
            .with("narrow.txt", &narrow)
            .with("wide.txt", &wide)
            .with("symbol.txt", &symbol);

        for (name, expected) in [
            ("short.txt", MalformedKind::RowCount { found: 19 }),
            ("narrow.txt", MalformedKind::RowWidth { found: 9 }),
            ("wide.txt", MalformedKind::RowWidth { found: 11 }),
            ("symbol.txt", MalformedKind::Symbol { found: 'x', column: 5 }),
        ] {
            let source = format!("<p>before</p>\n[[BOARDS: {name}]]\n");
            match convert(&source, &page(), &loader) {
                Err(RenderError::Board(BoardError::Malformed { file, reason, .. })) => {
                    assert!(file.ends_with(name));
                    assert_eq!(reason, expected);
                }
                other => panic!("{name}: expected malformed board, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_referenced_boards() {
        let source = "[[BOARD: a.txt]]\ntext\n[[BOARDS: b.txt, c.txt]]\n[[BOARD: broken.txt]\n";
        assert_eq!(referenced_boards(source), vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_check_page_collects_all_errors() {
        let source = "[[BOARD: x.txt]]\n[[BOARD: a.txt]]\n[[BOARD: y.txt]]\n";
        let errors = check_page(source, &page(), &loader());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_convert_is_deterministic() {
        let source = "[[BOARDS: a.txt, b.txt]]\n---\n<p>x</p>";
        let first = convert(source, &page(), &loader()).unwrap();
        let second = convert(source, &page(), &loader()).unwrap();
        assert_eq!(first, second);
    }
}
