//! Column reduction over GF(2)
//!
//! Columns are processed left to right. While column `j` is non-zero and
//! an earlier column `i` has the same low, column `i` is added into column
//! `j`. Each addition cancels the current low without creating a larger
//! row, so `low(j)` strictly decreases and every column needs at most `n`
//! additions.
//!
//! [`StandardReduction`] finds the matching column by scanning all earlier
//! lows (lowest index wins), O(n³) worst case. [`PivotIndexReduction`] keeps
//! a `low -> column` table and finds it in O(1). Once a prefix is reduced
//! each low has a single owner, so both pick the same column and produce
//! identical matrices.

use alloc::string::String;
use alloc::vec::Vec;

use crate::boundary::BoundaryMatrix;
use crate::column::{add_into, Column};
use crate::traits::{ColumnReducer, MatrixOperations, SparseMatrix};

/// Counters gathered during one reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReductionStats {
    /// Column additions performed
    pub column_additions: usize,
    /// Columns that ended up zero
    pub zero_columns: usize,
    /// Columns that ended up with a low (one per finite pair)
    pub pivots: usize,
}

/// Boundary matrix after reduction
///
/// No two non-empty columns share a low. When built with basis tracking,
/// `basis()[j]` lists the original columns whose sum is column `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReducedMatrix {
    columns: Vec<Column>,
    basis: Option<Vec<Column>>,
    stats: ReductionStats,
}

impl ReducedMatrix {
    fn finish(columns: Vec<Column>, basis: Option<Vec<Column>>, column_additions: usize) -> Self {
        let pivots = columns.iter().filter(|c| !c.is_empty()).count();
        let stats = ReductionStats {
            column_additions,
            zero_columns: columns.len() - pivots,
            pivots,
        };
        Self {
            columns,
            basis,
            stats,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, j: usize) -> &Column {
        &self.columns[j]
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Low of column `j`, `None` for a zero column
    pub fn low(&self, j: usize) -> Option<usize> {
        self.columns[j].low()
    }

    /// `(low, column)` for every non-zero column, in column order
    pub fn pivots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(j, c)| c.low().map(|low| (low, j)))
    }

    /// True if no two non-empty columns share a low
    pub fn is_reduced(&self) -> bool {
        has_unique_lows(&self.columns)
    }

    pub fn stats(&self) -> ReductionStats {
        self.stats
    }

    /// Column combinations recorded during reduction, if tracking was on
    pub fn basis(&self) -> Option<&[Column]> {
        self.basis.as_deref()
    }

    /// Cycle created by simplex `j`, as filtration indices.
    ///
    /// Defined for zero columns when the basis was tracked: the recorded
    /// combination of boundary columns sums to zero, so the corresponding
    /// chain is a cycle.
    pub fn cycle_representative(&self, j: usize) -> Option<&Column> {
        if !self.columns.get(j)?.is_empty() {
            return None;
        }
        self.basis.as_ref().map(|basis| &basis[j])
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

impl SparseMatrix for ReducedMatrix {
    fn get_entry(&self, row: usize, col: usize) -> bool {
        self.columns.get(col).is_some_and(|c| c.contains(row))
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.columns.len(), self.columns.len())
    }

    fn nnz(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

impl MatrixOperations for ReducedMatrix {
    fn get_row(&self, row_index: usize) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(row_index))
            .map(|(j, _)| j)
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<usize> {
        self.columns
            .get(col_index)
            .map(|c| c.rows().to_vec())
            .unwrap_or_default()
    }
}

/// Check the reduced-matrix invariant on raw columns
pub fn has_unique_lows(columns: &[Column]) -> bool {
    let mut lows: Vec<usize> = columns.iter().filter_map(Column::low).collect();
    let count = lows.len();
    lows.sort_unstable();
    lows.dedup();
    lows.len() == count
}

/// Identity basis: column `j` starts as the unit vector `e_j`
fn identity_basis(n: usize) -> Vec<Column> {
    (0..n).map(Column::unit).collect()
}

/// Reduction by linear scan of earlier lows
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction {
    track_basis: bool,
}

impl StandardReduction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which original columns make up each reduced column
    pub fn with_basis(mut self) -> Self {
        self.track_basis = true;
        self
    }
}

impl ColumnReducer for StandardReduction {
    fn reduce_owned(&self, matrix: BoundaryMatrix) -> ReducedMatrix {
        let mut columns = matrix.into_columns();
        let n = columns.len();
        let mut basis = self.track_basis.then(|| identity_basis(n));
        let mut lows: Vec<Option<usize>> = columns.iter().map(Column::low).collect();
        let mut additions = 0;

        for j in 0..n {
            while let Some(low) = lows[j] {
                let Some(i) = lows[..j].iter().position(|&l| l == Some(low)) else {
                    break;
                };
                add_into(&mut columns, i, j);
                if let Some(basis) = basis.as_mut() {
                    add_into(basis, i, j);
                }
                lows[j] = columns[j].low();
                additions += 1;
            }
        }

        ReducedMatrix::finish(columns, basis, additions)
    }
}

/// Reduction with a `low -> column` pivot table
#[derive(Debug, Clone, Copy, Default)]
pub struct PivotIndexReduction {
    track_basis: bool,
}

impl PivotIndexReduction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which original columns make up each reduced column
    pub fn with_basis(mut self) -> Self {
        self.track_basis = true;
        self
    }
}

impl ColumnReducer for PivotIndexReduction {
    fn reduce_owned(&self, matrix: BoundaryMatrix) -> ReducedMatrix {
        let mut columns = matrix.into_columns();
        let n = columns.len();
        let mut basis = self.track_basis.then(|| identity_basis(n));

        // rows are filtration indices, but size by the data to accept any columns
        let rows = columns
            .iter()
            .filter_map(Column::low)
            .max()
            .map_or(0, |max| max + 1);
        let mut owner: Vec<Option<usize>> = alloc::vec![None; rows];
        let mut additions = 0;

        for j in 0..n {
            while let Some(low) = columns[j].low() {
                let Some(i) = owner[low] else {
                    owner[low] = Some(j);
                    break;
                };
                add_into(&mut columns, i, j);
                if let Some(basis) = basis.as_mut() {
                    add_into(basis, i, j);
                }
                additions += 1;
            }
        }

        ReducedMatrix::finish(columns, basis, additions)
    }
}

/// Selects a [`ColumnReducer`] implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReductionStrategy {
    /// Linear scan of earlier lows
    Standard,
    /// Pivot table lookup
    #[default]
    PivotIndex,
}

impl ReductionStrategy {
    /// Reduce a copy of `matrix` with this strategy
    pub fn reduce(self, matrix: &BoundaryMatrix, track_basis: bool) -> ReducedMatrix {
        self.reduce_owned(matrix.clone(), track_basis)
    }

    /// Reduce `matrix` in place with this strategy
    pub fn reduce_owned(self, matrix: BoundaryMatrix, track_basis: bool) -> ReducedMatrix {
        match (self, track_basis) {
            (ReductionStrategy::Standard, false) => StandardReduction::new().reduce_owned(matrix),
            (ReductionStrategy::Standard, true) => {
                StandardReduction::new().with_basis().reduce_owned(matrix)
            }
            (ReductionStrategy::PivotIndex, false) => {
                PivotIndexReduction::new().reduce_owned(matrix)
            }
            (ReductionStrategy::PivotIndex, true) => {
                PivotIndexReduction::new().with_basis().reduce_owned(matrix)
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ReductionStrategy::Standard => "standard",
            ReductionStrategy::PivotIndex => "pivot-index",
        }
    }
}

impl core::fmt::Display for ReductionStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategy name that matched no variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl core::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown strategy name `{}`", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownStrategy {}

impl core::str::FromStr for ReductionStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ReductionStrategy::Standard),
            "pivot-index" => Ok(ReductionStrategy::PivotIndex),
            other => Err(UnknownStrategy(other.into())),
        }
    }
}
