//! Boundary construction on the rayon pool
//!
//! Each column depends only on the filtration, so column indices are split
//! into contiguous runs and scanned independently. The result is identical to
//! [`BoundaryMatrix::from_filtration`].

use phbar_core::{boundary_column, BoundaryMatrix, Column, Filtration};
use rayon::prelude::*;

/// Below this many simplices the serial scan is used
pub const PARALLEL_THRESHOLD: usize = 256;

/// Build the boundary matrix by parallel subset scan
pub fn build_boundary_parallel(filtration: &Filtration) -> BoundaryMatrix {
    let n = filtration.len();
    if n < PARALLEL_THRESHOLD {
        return BoundaryMatrix::from_filtration(filtration);
    }

    // Later columns scan the same prefix, so smaller chunks keep threads busy
    let chunk_size = n.div_ceil(rayon::current_num_threads() * 4).max(1);

    let columns: Vec<Column> = (0..n)
        .into_par_iter()
        .with_min_len(chunk_size)
        .map(|j| boundary_column(filtration, j))
        .collect();

    BoundaryMatrix::from_columns(columns)
}
