//! Row and diagonal constraint check for a single candidate queen

/// Decide whether a queen may stand at (`target_column`, `candidate_row`)
///
/// Only columns `0..target_column` of `placement` are read; anything beyond is
/// scratch space left over from earlier branches. Columns never conflict
/// because each one is assigned exactly once by the search.
///
/// Out-of-range arguments are a caller error: columns missing from
/// `placement` are simply not checked.
pub fn is_valid(placement: &[usize], target_column: usize, candidate_row: usize) -> bool {
    placement
        .iter()
        .take(target_column)
        .enumerate()
        .all(|(column, &row)| {
            // target_column > column, so the column distance needs no abs
            row != candidate_row && row.abs_diff(candidate_row) != target_column - column
        })
}
