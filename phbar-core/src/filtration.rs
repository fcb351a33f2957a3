//! Time-ordered sequences of simplices
//!
//! A [`Filtration`] is validated once on construction and immutable after
//! that. Index position is the identifier every later stage uses.

use alloc::vec::Vec;
use core::ops::Index;

use crate::error::Result;
use crate::simplex::Simplex;
use crate::validation;

/// Validated, value-ordered list of simplices
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Filtration {
    simplices: Vec<Simplex>,
}

impl Filtration {
    /// Wrap simplices that are already sorted by value.
    ///
    /// Rejects non-finite or decreasing values, malformed vertex sets and
    /// duplicate simplices. The face order is not checked here, see
    /// [`Filtration::check_face_closure`].
    pub fn new(simplices: Vec<Simplex>) -> Result<Self> {
        validation::validate_values(&simplices)?;
        for (index, simplex) in simplices.iter().enumerate() {
            simplex.validate(index)?;
        }
        validation::validate_unique(&simplices)?;
        Ok(Self { simplices })
    }

    /// Stable-sort by value, then validate.
    ///
    /// Simplices with equal values keep their input order, so a face
    /// listed before its coface stays in front of it.
    pub fn from_unsorted(mut simplices: Vec<Simplex>) -> Result<Self> {
        validation::validate_finite(&simplices)?;
        simplices.sort_by(|a, b| a.value().total_cmp(&b.value()));
        Self::new(simplices)
    }

    /// Check that every codimension-1 face of every simplex appears at a
    /// smaller index
    pub fn check_face_closure(&self) -> Result<()> {
        validation::validate_face_closure(&self.simplices)
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Simplex> {
        self.simplices.get(index)
    }

    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    /// Filtration value of the simplex at `index`
    pub fn value(&self, index: usize) -> f64 {
        self.simplices[index].value()
    }

    /// Dimension of the simplex at `index`
    pub fn dimension(&self, index: usize) -> usize {
        self.simplices[index].dimension()
    }

    /// Largest simplex dimension, `None` when empty
    pub fn max_dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    pub fn into_simplices(self) -> Vec<Simplex> {
        self.simplices
    }
}

impl Index<usize> for Filtration {
    type Output = Simplex;

    fn index(&self, index: usize) -> &Simplex {
        &self.simplices[index]
    }
}

impl<'a> IntoIterator for &'a Filtration {
    type Item = &'a Simplex;
    type IntoIter = core::slice::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PhbarError, Violation};
    use alloc::vec;

    fn s(value: f64, vertices: Vec<i64>) -> Simplex {
        Simplex::from_vertices(value, vertices).unwrap()
    }

    #[test]
    fn test_new_accepts_sorted() {
        let f = Filtration::new(vec![
            s(0.0, vec![0]),
            s(0.0, vec![1]),
            s(1.0, vec![0, 1]),
        ])
        .unwrap();
        assert_eq!(f.len(), 3);
        assert_eq!(f.dimension(2), 1);
        assert_eq!(f.value(2), 1.0);
        assert_eq!(f.max_dimension(), Some(1));
        assert!(f.check_face_closure().is_ok());
    }

    #[test]
    fn test_new_rejects_unsorted() {
        let err = Filtration::new(vec![s(1.0, vec![0]), s(0.5, vec![1])]).unwrap_err();
        assert_eq!(
            err,
            PhbarError::PreconditionViolation(Violation::UnsortedValues { index: 1 })
        );
    }

    #[test]
    fn test_new_rejects_nan() {
        let err = Filtration::new(vec![s(f64::NAN, vec![0])]).unwrap_err();
        assert_eq!(
            err,
            PhbarError::PreconditionViolation(Violation::NonFiniteValue { index: 0 })
        );
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Filtration::new(vec![
            s(0.0, vec![0]),
            s(0.0, vec![1]),
            s(0.5, vec![1, 0]),
            s(0.7, vec![0, 1]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            PhbarError::PreconditionViolation(Violation::DuplicateSimplex {
                first: 2,
                second: 3
            })
        );
    }

    #[test]
    fn test_new_blames_real_index_for_bad_simplex() {
        let bad = Simplex::from_parts(1.0, 2, vec![0, 1]);
        let err = Filtration::new(vec![s(0.0, vec![0]), bad]).unwrap_err();
        assert_eq!(
            err,
            PhbarError::PreconditionViolation(Violation::VertexCountMismatch {
                index: 1,
                dimension: 2,
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_from_unsorted_is_stable() {
        let f = Filtration::from_unsorted(vec![
            s(1.0, vec![0, 1]),
            s(0.0, vec![1]),
            s(1.0, vec![2]),
            s(0.0, vec![0]),
        ])
        .unwrap();
        let order: Vec<_> = f.iter().map(|x| x.vertices().to_vec()).collect();
        assert_eq!(order, vec![vec![1], vec![0], vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_face_closure_detects_late_face() {
        let f = Filtration::new(vec![
            s(0.0, vec![0]),
            s(1.0, vec![0, 1]),
            s(1.0, vec![1]),
        ])
        .unwrap();
        assert_eq!(
            f.check_face_closure(),
            Err(PhbarError::PreconditionViolation(Violation::MissingFace {
                index: 1
            }))
        );
    }
}
