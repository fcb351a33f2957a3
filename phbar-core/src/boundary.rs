//! Boundary matrix construction
//!
//! Column `j` of the boundary matrix holds row `i` exactly when simplex `i`
//! is a codimension-1 face of simplex `j`. Two builders produce the same
//! matrix on any valid filtration:
//!
//! - [`BoundaryMatrix::from_filtration`] compares every pair of simplices,
//!   O(n²) subset tests.
//! - [`BoundaryMatrix::from_filtration_indexed`] hashes vertex sets and looks
//!   up the `d + 1` faces of each `d`-simplex directly.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::column::Column;
use crate::filtration::Filtration;
use crate::simplex::Vertex;
use crate::traits::{MatrixOperations, SparseMatrix};

/// Square GF(2) incidence matrix indexed by filtration position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryMatrix {
    columns: Vec<Column>,
}

impl BoundaryMatrix {
    /// Reference construction by pairwise subset tests
    pub fn from_filtration(filtration: &Filtration) -> Self {
        let columns = (0..filtration.len())
            .map(|j| boundary_column(filtration, j))
            .collect();
        Self { columns }
    }

    /// Construction through a vertex-set index
    pub fn from_filtration_indexed(filtration: &Filtration) -> Self {
        let index: HashMap<&[Vertex], usize> = filtration
            .iter()
            .enumerate()
            .map(|(i, s)| (s.vertices(), i))
            .collect();

        let columns = filtration
            .iter()
            .map(|simplex| {
                simplex
                    .faces()
                    .filter_map(|face| index.get(face.as_slice()).copied())
                    .collect::<Column>()
            })
            .collect();

        Self { columns }
    }

    /// Wrap columns computed elsewhere
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of columns (equals the filtration length)
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

    /// Low of column `j`, `None` when the column is zero
    pub fn low(&self, j: usize) -> Option<usize> {
        self.columns[j].low()
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

/// Boundary column of simplex `j` by scanning the whole filtration
///
/// Dimension-0 simplices get the zero column.
pub fn boundary_column(filtration: &Filtration, j: usize) -> Column {
    let simplex = &filtration[j];
    if simplex.dimension() == 0 {
        return Column::new();
    }

    let rows = filtration
        .iter()
        .enumerate()
        .filter(|&(i, face)| i != j && face.is_face_of(simplex))
        .map(|(i, _)| i)
        .collect();
    Column::from_sorted(rows)
}

impl SparseMatrix for BoundaryMatrix {
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

impl MatrixOperations for BoundaryMatrix {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::Simplex;
    use alloc::vec;

    fn filtration(records: Vec<(f64, Vec<Vertex>)>) -> Filtration {
        Filtration::new(
            records
                .into_iter()
                .map(|(value, vertices)| Simplex::from_vertices(value, vertices).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn filled_triangle() -> Filtration {
        filtration(vec![
            (0.0, vec![0]),
            (0.0, vec![1]),
            (0.0, vec![2]),
            (1.0, vec![0, 1]),
            (1.0, vec![1, 2]),
            (1.0, vec![0, 2]),
            (2.0, vec![0, 1, 2]),
        ])
    }

    #[test]
    fn test_two_points_and_edge() {
        let f = filtration(vec![(0.0, vec![0]), (0.0, vec![1]), (1.0, vec![0, 1])]);
        let d = BoundaryMatrix::from_filtration(&f);
        assert_eq!(d.len(), 3);
        assert!(d.column(0).is_empty());
        assert!(d.column(1).is_empty());
        assert_eq!(d.column(2).rows(), &[0, 1]);
        assert_eq!(d.low(2), Some(1));
    }

    #[test]
    fn test_filled_triangle() {
        let d = BoundaryMatrix::from_filtration(&filled_triangle());
        assert_eq!(d.column(3).rows(), &[0, 1]);
        assert_eq!(d.column(4).rows(), &[1, 2]);
        assert_eq!(d.column(5).rows(), &[0, 2]);
        assert_eq!(d.column(6).rows(), &[3, 4, 5]);
        assert_eq!(d.nnz(), 9);
        assert_eq!(d.dimensions(), (7, 7));
    }

    #[test]
    fn test_vertices_have_empty_columns() {
        let f = filled_triangle();
        let d = BoundaryMatrix::from_filtration(&f);
        for (j, simplex) in f.iter().enumerate() {
            if simplex.dimension() == 0 {
                assert!(d.column(j).is_empty(), "vertex column {j} not empty");
            }
        }
    }

    #[test]
    fn test_builders_agree() {
        let f = filled_triangle();
        assert_eq!(
            BoundaryMatrix::from_filtration(&f),
            BoundaryMatrix::from_filtration_indexed(&f)
        );
    }

    #[test]
    fn test_codimension_two_is_not_a_face() {
        // the vertex is inside the triangle but two dimensions down
        let f = filtration(vec![
            (0.0, vec![0]),
            (0.0, vec![1]),
            (0.0, vec![2]),
            (0.0, vec![0, 1]),
            (0.0, vec![1, 2]),
            (0.0, vec![0, 2]),
            (0.0, vec![0, 1, 2]),
        ]);
        let d = BoundaryMatrix::from_filtration(&f);
        assert!(!d.get_entry(0, 6));
        assert!(d.get_entry(3, 6));
    }

    #[test]
    fn test_row_and_col_access() {
        let d = BoundaryMatrix::from_filtration(&filled_triangle());
        assert_eq!(d.get_row(1), vec![3, 4]);
        assert_eq!(d.get_row(5), vec![6]);
        assert_eq!(d.get_col(6), vec![3, 4, 5]);
        assert!(d.get_col(42).is_empty());
        assert!(!d.get_entry(0, 42));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decoded_simplices_build_the_same_matrix() {
        let edge: Simplex =
            serde_json::from_str(r#"{"value":1.0,"dimension":1,"vertices":[1,0]}"#).unwrap();
        let f = Filtration::new(vec![Simplex::vertex(0.0, 0), Simplex::vertex(0.0, 1), edge])
            .unwrap();

        let scan = BoundaryMatrix::from_filtration(&f);
        assert_eq!(scan.column(2).rows(), &[0, 1]);
        assert_eq!(scan, BoundaryMatrix::from_filtration_indexed(&f));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let d = BoundaryMatrix::from_filtration(&filled_triangle());
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(serde_json::from_str::<BoundaryMatrix>(&json).unwrap(), d);

        let unsorted: BoundaryMatrix =
            serde_json::from_str(r#"{"columns":[[],[],[1,0]]}"#).unwrap();
        assert_eq!(unsorted.low(2), Some(1));
        assert_eq!(unsorted.column(2).rows(), &[0, 1]);
    }
}
