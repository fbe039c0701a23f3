//! PNG export of solved boards as checkerboards

use crate::io::configuration::{
    DARK_SQUARE_RGBA, EXPORT_FILE_PREFIX, LIGHT_SQUARE_RGBA, PNG_CELL_PIXELS, PNG_QUEEN_MARGIN,
    QUEEN_RGBA,
};
use crate::io::error::{QueensError, Result};
use crate::spatial::{Board, Placement};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Draw a board as an image, one square per cell
pub fn draw_board(board: &Board) -> RgbaImage {
    let side = board.size() as u32 * PNG_CELL_PIXELS;
    ImageBuffer::from_fn(side, side, |x, y| {
        let column = (x / PNG_CELL_PIXELS) as usize;
        let row = (y / PNG_CELL_PIXELS) as usize;
        let inset_x = x % PNG_CELL_PIXELS;
        let inset_y = y % PNG_CELL_PIXELS;
        let inside_margin = (PNG_QUEEN_MARGIN..PNG_CELL_PIXELS - PNG_QUEEN_MARGIN)
            .contains(&inset_x)
            && (PNG_QUEEN_MARGIN..PNG_CELL_PIXELS - PNG_QUEEN_MARGIN).contains(&inset_y);

        if inside_margin && board.is_queen(row, column) {
            Rgba(QUEEN_RGBA)
        } else if (row + column) % 2 == 0 {
            Rgba(LIGHT_SQUARE_RGBA)
        } else {
            Rgba(DARK_SQUARE_RGBA)
        }
    })
}

/// Path of the image for the solution numbered `index` (1-based)
pub fn export_path(directory: &Path, index: usize) -> PathBuf {
    directory.join(format!("{EXPORT_FILE_PREFIX}_{index:04}.png"))
}

/// Export one placement as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The placement is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(placement: &Placement, output_path: &Path) -> Result<()> {
    if placement.board_size() == 0 {
        return Err(QueensError::InvalidPlacement {
            placement: Vec::new(),
            columns: (0, 0),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| QueensError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    draw_board(&Board::from_placement(placement))
        .save(output_path)
        .map_err(|e| QueensError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Export every placement into `directory`, numbered from 1
///
/// # Errors
///
/// Stops at and returns the first failed export.
pub fn export_all(placements: &[Placement], directory: &Path) -> Result<Vec<PathBuf>> {
    placements
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let path = export_path(directory, index + 1);
            export_board_as_png(placement, &path).map(|()| path)
        })
        .collect()
}
