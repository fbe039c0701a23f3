//! Independent checks on completed placements
//!
//! Unlike the incremental validator, these look at a whole placement at once
//! using occupancy bitsets for rows and both diagonal directions.

use crate::io::error::{QueensError, Result};
use crate::spatial::Placement;
use bitvec::prelude::*;

/// Number of solutions for board sizes 1 through 14
const KNOWN_SOLUTION_COUNTS: [usize; 14] = [
    1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2_680, 14_200, 73_712, 365_596,
];

/// Published solution count for `board_size`, when tabulated
pub fn known_solution_count(board_size: usize) -> Option<usize> {
    board_size
        .checked_sub(1)
        .and_then(|index| KNOWN_SOLUTION_COUNTS.get(index))
        .copied()
}

/// Find the first pair of columns whose queens attack each other
///
/// Columns are scanned left to right; for each queen the earlier column
/// occupying the same row or diagonal is reported as `(earlier, later)`. A
/// row outside the board is reported against itself as `(column, column)`.
pub fn first_conflict(rows: &[usize]) -> Option<(usize, usize)> {
    let size = rows.len();
    let diagonals = (2 * size).saturating_sub(1);

    // Each bitset remembers which row or diagonal is taken; the owner lookup
    // only runs once a collision is known
    let mut taken_rows = bitvec![0; size];
    let mut taken_rising = bitvec![0; diagonals];
    let mut taken_falling = bitvec![0; diagonals];

    for (column, &row) in rows.iter().enumerate() {
        if row >= size {
            return Some((column, column));
        }
        let rising = row + column;
        let falling = row + size - 1 - column;

        let collides = taken_rows.get(row).as_deref() == Some(&true)
            || taken_rising.get(rising).as_deref() == Some(&true)
            || taken_falling.get(falling).as_deref() == Some(&true);
        if collides {
            let earlier = rows.iter().take(column).enumerate().find(|&(other, &r)| {
                r == row || r + other == rising || r + size - 1 - other == falling
            });
            return earlier
                .map(|(other, _)| (other, column))
                .or(Some((column, column)));
        }

        taken_rows.set(row, true);
        taken_rising.set(rising, true);
        taken_falling.set(falling, true);
    }
    None
}

/// Whether `rows` places one non-attacking queen per column
pub fn is_solution(rows: &[usize]) -> bool {
    first_conflict(rows).is_none()
}

/// Check a placement and report the conflict as an error
///
/// # Errors
///
/// Returns `InvalidPlacement` with the offending column pair.
pub fn verify(rows: &[usize]) -> Result<()> {
    first_conflict(rows).map_or(Ok(()), |columns| {
        Err(QueensError::InvalidPlacement {
            placement: rows.to_vec(),
            columns,
        })
    })
}

/// Check a full result collection for one board
///
/// Every placement must have `board_size` columns and no conflicts, no
/// placement may appear twice, and the total must match the tabulated count
/// when one is known. Duplicates are only detected when `placements` is sorted.
///
/// # Errors
///
/// Returns `InvalidPlacement` for an attacking pair and `WorkerFailure` for a
/// wrong-sized placement, a duplicate or a wrong total.
pub fn verify_solutions(board_size: usize, placements: &[Placement]) -> Result<()> {
    for placement in placements {
        if placement.board_size() != board_size {
            return Err(QueensError::WorkerFailure {
                reason: format!(
                    "placement {placement} has {} columns, expected {board_size}",
                    placement.board_size()
                ),
            });
        }
        verify(placement.rows())?;
    }

    if placements.windows(2).any(|pair| pair.first() == pair.last()) {
        return Err(QueensError::WorkerFailure {
            reason: format!("duplicate placements recorded for N={board_size}"),
        });
    }

    match known_solution_count(board_size) {
        Some(expected) if expected != placements.len() => Err(QueensError::WorkerFailure {
            reason: format!(
                "found {} solutions for N={board_size}, expected {expected}",
                placements.len()
            ),
        }),
        _ => Ok(()),
    }
}
