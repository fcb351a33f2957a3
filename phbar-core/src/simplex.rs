//! Simplices with a filtration value
//!
//! A simplex is identified by its vertex set. Labels are kept sorted so
//! that face tests and hashing work on plain slices.

use alloc::vec::Vec;

use crate::error::{Result, Violation};

/// Integer vertex label
pub type Vertex = i64;

/// A simplex entering the complex at time `value`
///
/// Deserialization goes through [`Simplex::new`], so decoded labels are
/// sorted and checked like any other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SimplexRecord"))]
pub struct Simplex {
    value: f64,
    dimension: usize,
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Build a simplex, checking that `vertices` holds `dimension + 1`
    /// distinct labels.
    ///
    /// Violations are reported against index 0; [`crate::Filtration::new`]
    /// re-checks with the real position.
    pub fn new(value: f64, dimension: usize, vertices: Vec<Vertex>) -> Result<Self> {
        let simplex = Self::from_parts(value, dimension, vertices);
        simplex.validate(0)?;
        Ok(simplex)
    }

    /// Build a simplex whose dimension is derived from the vertex count
    pub fn from_vertices(value: f64, vertices: Vec<Vertex>) -> Result<Self> {
        let dimension = vertices.len().saturating_sub(1);
        if vertices.is_empty() {
            return Err(Violation::VertexCountMismatch {
                index: 0,
                dimension,
                vertex_count: 0,
            }
            .into());
        }
        Self::new(value, dimension, vertices)
    }

    /// A single vertex
    pub fn vertex(value: f64, label: Vertex) -> Self {
        Self {
            value,
            dimension: 0,
            vertices: alloc::vec![label],
        }
    }

    /// Sort the labels without validating anything
    pub(crate) fn from_parts(value: f64, dimension: usize, mut vertices: Vec<Vertex>) -> Self {
        vertices.sort_unstable();
        Self {
            value,
            dimension,
            vertices,
        }
    }

    /// Check the vertex-count and distinctness invariants, blaming `index`
    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        if self.vertices.len() != self.dimension + 1 {
            return Err(Violation::VertexCountMismatch {
                index,
                dimension: self.dimension,
                vertex_count: self.vertices.len(),
            }
            .into());
        }
        if self.vertices.windows(2).any(|w| w[0] == w[1]) {
            return Err(Violation::RepeatedVertex { index }.into());
        }
        Ok(())
    }

    /// Filtration value
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Vertex labels in ascending order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// True if `self` is a codimension-1 face of `other`
    pub fn is_face_of(&self, other: &Simplex) -> bool {
        self.dimension + 1 == other.dimension && is_sorted_subset(&self.vertices, &other.vertices)
    }

    /// Vertex sets of the codimension-1 faces, dropping one label at a time
    pub fn faces(&self) -> impl Iterator<Item = Vec<Vertex>> + '_ {
        let count = if self.dimension == 0 {
            0
        } else {
            self.vertices.len()
        };
        (0..count).map(move |skip| {
            self.vertices
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != skip)
                .map(|(_, &v)| v)
                .collect()
        })
    }
}

/// Wire form of a simplex before validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SimplexRecord {
    value: f64,
    dimension: usize,
    vertices: Vec<Vertex>,
}

#[cfg(feature = "serde")]
impl TryFrom<SimplexRecord> for Simplex {
    type Error = crate::error::PhbarError;

    fn try_from(record: SimplexRecord) -> Result<Self> {
        Simplex::new(record.value, record.dimension, record.vertices)
    }
}

impl core::fmt::Display for Simplex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{val={}; dim={}; {:?}}}", self.value, self.dimension, self.vertices)
    }
}

/// Subset test on two ascending, duplicate-free slices
fn is_sorted_subset(small: &[Vertex], large: &[Vertex]) -> bool {
    if small.len() > large.len() {
        return false;
    }
    let mut rest = large.iter();
    small
        .iter()
        .all(|v| rest.by_ref().find(|&&w| w >= *v) == Some(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhbarError;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_new_sorts_vertices() {
        let s = Simplex::new(1.5, 2, vec![7, 3, 5]).unwrap();
        assert_eq!(s.vertices(), &[3, 5, 7]);
        assert_eq!(s.dimension(), 2);
        assert_eq!(s.value(), 1.5);
    }

    #[test]
    fn test_new_rejects_bad_vertex_sets() {
        assert_eq!(
            Simplex::new(0.0, 1, vec![1, 2, 3]),
            Err(PhbarError::PreconditionViolation(
                Violation::VertexCountMismatch {
                    index: 0,
                    dimension: 1,
                    vertex_count: 3
                }
            ))
        );
        assert_eq!(
            Simplex::new(0.0, 1, vec![4, 4]),
            Err(PhbarError::PreconditionViolation(Violation::RepeatedVertex {
                index: 0
            }))
        );
        assert!(Simplex::from_vertices(0.0, vec![]).is_err());
    }

    #[test]
    fn test_is_face_of() {
        let edge = Simplex::from_vertices(0.0, vec![1, 3]).unwrap();
        let tri = Simplex::from_vertices(0.0, vec![1, 2, 3]).unwrap();
        let other = Simplex::from_vertices(0.0, vec![1, 4]).unwrap();

        assert!(edge.is_face_of(&tri));
        assert!(!other.is_face_of(&tri));
        assert!(!tri.is_face_of(&edge));
        // codimension 2 is not a face here
        assert!(!Simplex::vertex(0.0, 1).is_face_of(&tri));
        assert!(Simplex::vertex(0.0, 3).is_face_of(&edge));
    }

    #[test]
    fn test_faces() {
        let tri = Simplex::from_vertices(0.0, vec![0, 1, 2]).unwrap();
        let faces: Vec<_> = tri.faces().collect();
        assert_eq!(faces, vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
        assert_eq!(Simplex::vertex(0.0, 9).faces().count(), 0);
    }

    #[test]
    fn test_sorted_subset() {
        assert!(is_sorted_subset(&[2, 5], &[1, 2, 3, 5]));
        assert!(!is_sorted_subset(&[2, 6], &[1, 2, 3, 5]));
        assert!(is_sorted_subset(&[], &[1]));
        assert!(!is_sorted_subset(&[1, 2], &[1]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_sorts_labels() {
        let s: Simplex =
            serde_json::from_str(r#"{"value":1.0,"dimension":1,"vertices":[1,0]}"#).unwrap();
        assert_eq!(s.vertices(), &[0, 1]);
        assert!(Simplex::vertex(0.0, 0).is_face_of(&s));

        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<Simplex>(&json).unwrap(), s);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_vertex_sets() {
        let repeated = r#"{"value":0.0,"dimension":2,"vertices":[0,1,0]}"#;
        let err = serde_json::from_str::<Simplex>(repeated).unwrap_err();
        assert!(err.to_string().contains("repeats a vertex"), "{err}");

        let short = r#"{"value":0.0,"dimension":2,"vertices":[0,1]}"#;
        assert!(serde_json::from_str::<Simplex>(short).is_err());
    }
}
