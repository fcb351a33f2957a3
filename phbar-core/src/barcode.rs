//! Barcode extraction from a reduced boundary matrix
//!
//! A non-zero column `j` with low `i` pairs the class born when simplex `i`
//! enters with its death when simplex `j` enters. Every index left unpaired
//! after the column pass is born and never dies.
//!
//! The dimension of a barcode is the homological degree of the class, that
//! is the dimension of the birth simplex (one less than the death simplex).

use alloc::vec::Vec;

use crate::error::{Result, Violation};
use crate::filtration::Filtration;
use crate::reduction::ReducedMatrix;

/// Birth/death pair of one homology class, as filtration indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Barcode {
    /// Homological degree
    pub dimension: usize,
    /// Index of the simplex that creates the class
    pub birth: usize,
    /// Index of the simplex that kills the class, `None` if it never dies
    pub death: Option<usize>,
}

impl Barcode {
    pub const fn finite(dimension: usize, birth: usize, death: usize) -> Self {
        Self {
            dimension,
            birth,
            death: Some(death),
        }
    }

    pub const fn infinite(dimension: usize, birth: usize) -> Self {
        Self {
            dimension,
            birth,
            death: None,
        }
    }

    pub const fn is_infinite(&self) -> bool {
        self.death.is_none()
    }

    /// Death index with `-1` standing for infinity
    pub fn death_index(&self) -> isize {
        self.death.map_or(-1, |d| d as isize)
    }

    /// `(dimension, birth_index, death_index)` with `-1` for infinity
    pub fn as_triple(&self) -> (usize, usize, isize) {
        (self.dimension, self.birth, self.death_index())
    }

    /// Filtration value at which the class is born
    pub fn birth_value(&self, filtration: &Filtration) -> f64 {
        filtration.value(self.birth)
    }

    /// Filtration value at which the class dies, `f64::INFINITY` if never
    pub fn death_value(&self, filtration: &Filtration) -> f64 {
        self.death.map_or(f64::INFINITY, |d| filtration.value(d))
    }
}

impl core::fmt::Display for Barcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.dimension, self.birth, self.death_index())
    }
}

/// Read barcodes off a reduced matrix.
///
/// Finite pairs come first in column order, then infinite classes in
/// ascending birth index. Every filtration index appears in exactly one
/// barcode, as a birth or as a death.
pub fn extract_barcodes(reduced: &ReducedMatrix, filtration: &Filtration) -> Result<Vec<Barcode>> {
    if reduced.len() != filtration.len() {
        return Err(Violation::LengthMismatch {
            expected: filtration.len(),
            found: reduced.len(),
        }
        .into());
    }

    let mut paired = alloc::vec![false; filtration.len()];
    let mut barcodes = Vec::with_capacity(filtration.len());

    for (low, j) in reduced.pivots() {
        if low >= filtration.len() {
            return Err(Violation::RowOutOfRange { column: j, row: low }.into());
        }
        paired[low] = true;
        paired[j] = true;
        barcodes.push(Barcode::finite(filtration.dimension(low), low, j));
    }

    barcodes.extend(
        paired
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| !seen)
            .map(|(i, _)| Barcode::infinite(filtration.dimension(i), i)),
    );

    Ok(barcodes)
}
