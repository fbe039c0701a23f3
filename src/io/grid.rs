//! Bordered text rendering of a placement with row and column labels

use crate::io::configuration::{CELL_WIDTH, EMPTY_MARKER, QUEEN_MARKER};
use crate::spatial::{Board, Placement};
use std::fmt::Write;

/// Render a placement as a bordered grid
///
/// Column labels run along the top and row labels down the left, right-aligned
/// to the widest label. Every line ends with `\n`. For the 4x4 placement
/// `[1, 3, 0, 2]`:
///
/// ```text
///     0   1   2   3
///   +---+---+---+---+
/// 0 |   |   | Q |   |
///   +---+---+---+---+
/// 1 | Q |   |   |   |
///   +---+---+---+---+
/// 2 |   |   |   | Q |
///   +---+---+---+---+
/// 3 |   | Q |   |   |
///   +---+---+---+---+
/// ```
pub fn render_grid(placement: &Placement) -> String {
    render_board(&Board::from_placement(placement))
}

/// Render an occupancy board as a bordered grid
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let label_width = label_width(size);
    let border = border_line(size, label_width);
    let mut out = String::new();

    let mut header = " ".repeat(label_width + 2);
    for column in 0..size {
        let _ = write!(header, "{column:^CELL_WIDTH$} ");
    }
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&border);

    for (row, cells) in board.rows().enumerate() {
        let _ = write!(out, "{row:>label_width$} |");
        for occupied in cells {
            let marker = if occupied { QUEEN_MARKER } else { EMPTY_MARKER };
            let _ = write!(out, "{marker:^CELL_WIDTH$}|");
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

fn label_width(size: usize) -> usize {
    size.saturating_sub(1).to_string().len()
}

fn border_line(size: usize, label_width: usize) -> String {
    let mut line = " ".repeat(label_width + 1);
    line.push('+');
    for _ in 0..size {
        line.push_str(&"-".repeat(CELL_WIDTH));
        line.push('+');
    }
    line.push('\n');
    line
}
