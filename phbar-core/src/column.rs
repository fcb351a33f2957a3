//! Sparse GF(2) columns
//!
//! A column is the sorted set of row indices holding a 1. Addition over
//! GF(2) is symmetric difference, done as a single merge pass.

use alloc::vec::Vec;
use core::ops::AddAssign;

/// Sorted, duplicate-free set of row indices
///
/// Serialized as a plain list of rows; decoding goes through
/// [`Column::from_indices`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Column {
    rows: Vec<usize>,
}

impl Column {
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Column with a single 1 at `row`
    pub fn unit(row: usize) -> Self {
        Self {
            rows: alloc::vec![row],
        }
    }

    /// Build from arbitrary indices, cancelling repeats pairwise (mod 2)
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut sorted: Vec<usize> = indices.into_iter().collect();
        sorted.sort_unstable();

        let mut rows = Vec::with_capacity(sorted.len());
        for row in sorted {
            if rows.last() == Some(&row) {
                rows.pop();
            } else {
                rows.push(row);
            }
        }
        Self { rows }
    }

    /// Wrap rows that are already strictly ascending
    pub(crate) fn from_sorted(rows: Vec<usize>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        Self { rows }
    }

    /// Largest row index, `None` for the zero column
    pub fn low(&self) -> Option<usize> {
        self.rows.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of non-zero entries
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    /// Row indices, ascending
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, usize>> {
        self.rows.iter().copied()
    }

    /// GF(2) addition: replace `self` with the symmetric difference
    pub fn add_assign(&mut self, other: &Column) {
        if other.rows.is_empty() {
            return;
        }

        let (a, b) = (&self.rows, &other.rows);
        let mut merged = Vec::with_capacity(a.len() + b.len());
        let (mut p, mut q) = (0, 0);

        while p < a.len() && q < b.len() {
            match a[p].cmp(&b[q]) {
                core::cmp::Ordering::Less => {
                    merged.push(a[p]);
                    p += 1;
                }
                core::cmp::Ordering::Greater => {
                    merged.push(b[q]);
                    q += 1;
                }
                core::cmp::Ordering::Equal => {
                    p += 1;
                    q += 1;
                }
            }
        }
        merged.extend_from_slice(&a[p..]);
        merged.extend_from_slice(&b[q..]);

        self.rows = merged;
    }

    pub fn into_rows(self) -> Vec<usize> {
        self.rows
    }
}

impl AddAssign<&Column> for Column {
    fn add_assign(&mut self, other: &Column) {
        Column::add_assign(self, other);
    }
}

impl From<Vec<usize>> for Column {
    fn from(rows: Vec<usize>) -> Self {
        Self::from_indices(rows)
    }
}

impl From<Column> for Vec<usize> {
    fn from(column: Column) -> Self {
        column.rows
    }
}

impl FromIterator<usize> for Column {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = usize;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Add column `source` into column `target` of `columns` (`source < target`)
pub(crate) fn add_into(columns: &mut [Column], source: usize, target: usize) {
    debug_assert!(source < target);
    let (left, right) = columns.split_at_mut(target);
    right[0].add_assign(&left[source]);
}
