//! Screenshot to board quantization.
//!
//! Samples an image down to one pixel per cell and snaps each pixel to the
//! nearest guideline piece color.

use std::path::Path;

use anyhow::{Context, Result};
use image::{RgbImage, imageops::FilterType};

use super::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, Piece};

/// Squared RGB distance above which a pixel counts as empty.
pub const DEFAULT_EMPTY_THRESHOLD: u32 = 60_000;

/// Load an image file and quantize it into a board.
pub fn board_from_file(path: &Path, threshold: u32) -> Result<Board> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?;
    Ok(Board::from_image(&img.to_rgb8(), threshold))
}

impl Board {
    /// Quantize an RGB image into a board.
    pub fn from_image(img: &RgbImage, threshold: u32) -> Self {
        let sampled = image::imageops::resize(
            img,
            BOARD_WIDTH as u32,
            BOARD_HEIGHT as u32,
            FilterType::Nearest,
        );

        let mut board = Self::default();
        for (x, y, pixel) in sampled.enumerate_pixels() {
            board.rows[y as usize][x as usize] = nearest_cell(pixel.0, threshold);
        }
        board
    }
}

/// Snap a pixel to the closest piece color, or empty if none is close.
fn nearest_cell(rgb: [u8; 3], threshold: u32) -> Cell {
    let (piece, dist) = Piece::ALL
        .iter()
        .map(|&p| (p, distance(rgb, p.color())))
        .min_by_key(|&(_, d)| d)
        .unwrap_or((Piece::I, u32::MAX));

    if dist > threshold {
        Cell::Empty
    } else {
        Cell::Filled(piece)
    }
}

#[inline]
fn distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = i32::from(x) - i32::from(y);
            (d * d) as u32
        })
        .sum()
}
