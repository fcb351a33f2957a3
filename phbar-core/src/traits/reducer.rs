//! Column reduction strategy trait

use crate::boundary::BoundaryMatrix;
use crate::reduction::ReducedMatrix;

/// Brings a boundary matrix into reduced form
///
/// Implementations only ever add a column into a column to its right, and
/// must return a matrix in which no two non-empty columns share a low.
pub trait ColumnReducer {
    /// Reduce `matrix`, consuming it as the working copy
    fn reduce_owned(&self, matrix: BoundaryMatrix) -> ReducedMatrix;

    /// Reduce a copy of `matrix`, leaving the original untouched
    fn reduce(&self, matrix: &BoundaryMatrix) -> ReducedMatrix {
        self.reduce_owned(matrix.clone())
    }
}
