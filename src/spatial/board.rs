//! Two-dimensional occupancy view of a placement

use crate::spatial::placement::Placement;
use ndarray::Array2;

/// Square board marking which cells hold a queen
///
/// Indexed as `[row, column]`, matching how the grid is drawn on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Lay out the queens of a placement on an empty board
    ///
    /// Rows outside the board are ignored rather than wrapped.
    pub fn from_placement(placement: &Placement) -> Self {
        let size = placement.board_size();
        let mut cells = Array2::from_elem((size, size), false);
        for (column, &row) in placement.rows().iter().enumerate() {
            if let Some(cell) = cells.get_mut([row, column]) {
                *cell = true;
            }
        }
        Self { cells }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether a queen stands on the given cell
    pub fn is_queen(&self, row: usize, column: usize) -> bool {
        self.cells.get([row, column]).copied().unwrap_or(false)
    }

    /// Number of queens on the board
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Iterate one board row at a time, left to right
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        self.cells.rows().into_iter().map(|row| row.to_vec())
    }
}
