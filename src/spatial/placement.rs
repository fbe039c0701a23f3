//! Column-indexed queen placements

use std::fmt;

/// A completed assignment of one queen per column
///
/// Entry `c` holds the row of the queen standing in column `c`, so the length
/// of the placement is the board size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    rows: Vec<usize>,
}

impl Placement {
    /// Wrap a row vector without checking it
    pub const fn new(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Board size this placement was found on
    pub fn board_size(&self) -> usize {
        self.rows.len()
    }

    /// Row of the queen in `column`, if the column exists
    pub fn row(&self, column: usize) -> Option<usize> {
        self.rows.get(column).copied()
    }

    /// Rows ordered by column
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Consume the placement and return its row vector
    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }
}

impl From<&[usize]> for Placement {
    fn from(rows: &[usize]) -> Self {
        Self::new(rows.to_vec())
    }
}

impl From<Vec<usize>> for Placement {
    fn from(rows: Vec<usize>) -> Self {
        Self::new(rows)
    }
}

impl AsRef<[usize]> for Placement {
    fn as_ref(&self) -> &[usize] {
        &self.rows
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}
