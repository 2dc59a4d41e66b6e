//! Screenshot import command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::board::{Piece, image::board_from_file};
use crate::log;

/// Convert a screenshot into a board file.
pub fn import_board(
    input: &Path,
    output: Option<&Path>,
    pieces: Option<&[String]>,
    threshold: u32,
    force: bool,
) -> Result<PathBuf> {
    let output = output.map_or_else(|| input.with_extension("txt"), Path::to_path_buf);
    if output == input {
        bail!("Output {} would overwrite the input image", output.display());
    }
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }

    let mut board = board_from_file(input, threshold)?;
    board.pieces = pieces.map(parse_pieces).transpose()?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&output, board.to_text())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log!("import"; "{} -> {}", input.display(), output.display());
    Ok(output)
}

/// `["t", "L"]` → `[T, L]`, rejecting anything not a single piece letter.
fn parse_pieces(codes: &[String]) -> Result<Vec<Piece>> {
    codes
        .iter()
        .map(|code| {
            let code = code.trim();
            let mut chars = code.chars();
            let piece = match (chars.next(), chars.next()) {
                (Some(c), None) => Piece::from_code(c.to_ascii_lowercase()),
                _ => None,
            };
            piece.with_context(|| format!("Unknown piece `{code}` (expected one of i,o,t,s,z,j,l)"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_png(path: &Path) {
        let mut img = RgbImage::from_pixel(100, 200, Rgb([0, 0, 0]));
        for x in 0..100 {
            for y in 190..200 {
                img.put_pixel(x, y, Rgb(Piece::T.color()));
            }
        }
        img.save(path).unwrap();
    }

    #[test]
    fn test_parse_pieces() {
        let pieces = parse_pieces(&["t".into(), " L ".into()]).unwrap();
        assert_eq!(pieces, vec![Piece::T, Piece::L]);
        assert!(parse_pieces(&["x".into()]).is_err());
        assert!(parse_pieces(&["tl".into()]).is_err());
    }

    #[test]
    fn test_import_writes_board() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("shot.png");
        write_png(&input);

        let pieces = vec!["t".to_string()];
        let output = import_board(&input, None, Some(pieces.as_slice()), 10_000, false).unwrap();
        assert_eq!(output, dir.path().join("shot.txt"));

        let text = fs::read_to_string(&output).unwrap();
        let board = Board::parse(&text, "shot.txt").unwrap();
        assert_eq!(board.pieces, Some(vec![Piece::T]));
        assert_eq!(Board::row_codes(&board.rows[19]), "tttttttttt");
        assert_eq!(Board::row_codes(&board.rows[0]), "__________");
    }

    #[test]
    fn test_import_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("shot.png");
        write_png(&input);
        fs::write(dir.path().join("shot.txt"), "keep").unwrap();

        assert!(import_board(&input, None, None, 10_000, false).is_err());
        assert_eq!(fs::read_to_string(dir.path().join("shot.txt")).unwrap(), "keep");

        import_board(&input, None, None, 10_000, true).unwrap();
        assert_ne!(fs::read_to_string(dir.path().join("shot.txt")).unwrap(), "keep");
    }
}
