//! Tests for the incremental row and diagonal check

#[cfg(test)]
mod tests {
    use nqueens::algorithm::validator::is_valid;

    // Tests a queen sharing a row with an earlier column is rejected
    // Verified by removing the row comparison
    #[test]
    fn test_row_conflict_rejected() {
        let placement = [2, 0, 0, 0];
        assert!(!is_valid(&placement, 1, 2));
        assert!(!is_valid(&placement, 3, 2));
    }

    // Tests both diagonal directions are rejected
    // Verified by comparing signed differences instead of absolute
    #[test]
    fn test_diagonal_conflicts_rejected() {
        let placement = [1, 0, 0, 0];
        assert!(!is_valid(&placement, 1, 0));
        assert!(!is_valid(&placement, 1, 2));
        assert!(!is_valid(&placement, 2, 3));
    }

    // Tests a non-attacking square is accepted
    // Verified by inverting the final result
    #[test]
    fn test_safe_square_accepted() {
        let placement = [1, 3, 0, 0];
        assert!(is_valid(&placement, 2, 0));
        assert!(!is_valid(&placement, 2, 2));
    }

    // Tests cells at and beyond the target column are ignored
    // Verified by scanning the whole slice
    #[test]
    fn test_scratch_cells_ignored() {
        let placement = [0, 7, 7, 7];
        assert!(is_valid(&placement, 1, 2));
        assert!(is_valid(&placement, 1, 7));
    }

    // Tests the first column accepts any row
    // Verified by starting the scan at column 1
    #[test]
    fn test_first_column_unconstrained() {
        let placement = [5; 6];
        for row in 0..6 {
            assert!(is_valid(&placement, 0, row));
        }
    }
}
