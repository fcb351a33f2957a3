//! Core matrix abstraction traits
//!
//! Matrices here have GF(2) entries, so an entry is either present (1) or
//! absent (0) and no coefficient is stored.

use alloc::vec::Vec;

/// Read access to a sparse GF(2) matrix
pub trait SparseMatrix {
    /// True if the entry at (`row`, `col`) is 1.
    ///
    /// Out-of-bounds positions read as 0.
    fn get_entry(&self, row: usize, col: usize) -> bool;

    /// Matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Number of non-zero entries
    fn nnz(&self) -> usize;
}

/// Whole-row and whole-column access
pub trait MatrixOperations: SparseMatrix {
    /// Column indices holding a 1 in `row_index`, ascending
    fn get_row(&self, row_index: usize) -> Vec<usize>;

    /// Row indices holding a 1 in `col_index`, ascending
    fn get_col(&self, col_index: usize) -> Vec<usize>;
}
