//! Persistence diagrams
//!
//! Barcodes carry filtration indices. A diagram resolves them to filtration
//! values and offers the usual views: per-dimension slices, persistence
//! thresholds, Betti numbers of the final complex and text/JSON output.

use std::cmp::Ordering;
use std::io::Write;

use phbar_core::{Barcode, Filtration};

/// One bar with both its indices and its filtration values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PersistenceInterval {
    pub dimension: usize,
    /// Value at which the class is born
    pub birth: f64,
    /// Value at which the class dies, `f64::INFINITY` if never
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_death"))]
    pub death: f64,
    pub birth_index: usize,
    pub death_index: Option<usize>,
}

impl PersistenceInterval {
    /// Resolve a barcode against the filtration it came from
    pub fn resolve(barcode: &Barcode, filtration: &Filtration) -> Self {
        Self {
            dimension: barcode.dimension,
            birth: barcode.birth_value(filtration),
            death: barcode.death_value(filtration),
            birth_index: barcode.birth,
            death_index: barcode.death,
        }
    }

    /// `death - birth`, infinite for essential classes
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// True if the class survives to the end of the filtration
    pub fn is_essential(&self) -> bool {
        self.death_index.is_none()
    }

    fn order(&self, other: &Self) -> Ordering {
        self.dimension
            .cmp(&other.dimension)
            .then(self.birth_index.cmp(&other.birth_index))
            .then(match (self.death_index, other.death_index) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

// JSON has no infinity; essential deaths are written as null
#[cfg(feature = "serde")]
fn serialize_death<S: serde::Serializer>(death: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if death.is_finite() {
        serializer.serialize_f64(*death)
    } else {
        serializer.serialize_none()
    }
}

/// Collection of resolved intervals
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PersistenceDiagram {
    intervals: Vec<PersistenceInterval>,
}

impl PersistenceDiagram {
    pub fn from_barcodes(barcodes: &[Barcode], filtration: &Filtration) -> Self {
        let intervals = barcodes
            .iter()
            .map(|b| PersistenceInterval::resolve(b, filtration))
            .collect();
        Self { intervals }
    }

    pub fn intervals(&self) -> &[PersistenceInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Order by dimension, birth index, then death index with infinite last
    pub fn sort(&mut self) {
        self.intervals.sort_by(PersistenceInterval::order);
    }

    /// Drop finite intervals whose persistence is below `min`
    pub fn filter_min_persistence(&mut self, min: f64) {
        self.intervals
            .retain(|i| i.is_essential() || i.persistence() >= min);
    }

    /// Drop finite intervals that are born and die at the same value
    pub fn remove_zero_length(&mut self) {
        self.intervals
            .retain(|i| i.is_essential() || i.persistence() > 0.0);
    }

    /// Intervals of homological degree `d`
    pub fn dimension(&self, d: usize) -> impl Iterator<Item = &PersistenceInterval> + '_ {
        self.intervals.iter().filter(move |i| i.dimension == d)
    }

    /// Essential intervals of homological degree `d`
    pub fn essential(&self, d: usize) -> impl Iterator<Item = &PersistenceInterval> + '_ {
        self.dimension(d).filter(|i| i.is_essential())
    }

    pub fn max_dimension(&self) -> Option<usize> {
        self.intervals.iter().map(|i| i.dimension).max()
    }

    /// Essential classes per dimension, `result[d]` being the Betti number
    /// of the full complex in degree `d`
    pub fn betti_numbers(&self) -> Vec<usize> {
        let Some(max) = self.max_dimension() else {
            return Vec::new();
        };
        let mut betti = vec![0; max + 1];
        for interval in self.intervals.iter().filter(|i| i.is_essential()) {
            betti[interval.dimension] += 1;
        }
        betti
    }

    /// One interval per line: `dim birth death`, `inf` for essential classes
    pub fn write_plain<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for interval in &self.intervals {
            writeln!(
                out,
                "{} {} {}",
                interval.dimension,
                interval.birth,
                DeathValue(interval.death)
            )?;
        }
        Ok(())
    }

    /// One interval per line in labelled form
    pub fn write_verbose<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for interval in &self.intervals {
            writeln!(
                out,
                "Dimension: {}, Birth: {}, Death: {}",
                interval.dimension,
                interval.birth,
                DeathValue(interval.death)
            )?;
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a PersistenceDiagram {
    type Item = &'a PersistenceInterval;
    type IntoIter = std::slice::Iter<'a, PersistenceInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

struct DeathValue(f64);

impl std::fmt::Display for DeathValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("inf")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phbar_core::Simplex;

    fn triangle_filtration() -> Filtration {
        Filtration::new(vec![
            Simplex::vertex(0.0, 0),
            Simplex::vertex(0.0, 1),
            Simplex::vertex(0.5, 2),
            Simplex::from_vertices(1.0, vec![0, 1]).unwrap(),
            Simplex::from_vertices(1.0, vec![1, 2]).unwrap(),
            Simplex::from_vertices(1.5, vec![0, 2]).unwrap(),
        ])
        .unwrap()
    }

    fn triangle_diagram() -> PersistenceDiagram {
        let barcodes = vec![
            Barcode::finite(0, 1, 3),
            Barcode::finite(0, 2, 4),
            Barcode::infinite(0, 0),
            Barcode::infinite(1, 5),
        ];
        PersistenceDiagram::from_barcodes(&barcodes, &triangle_filtration())
    }

    #[test]
    fn test_resolve_values() {
        let diagram = triangle_diagram();
        let first = diagram.intervals()[0];
        assert_eq!(first.birth, 0.0);
        assert_eq!(first.death, 1.0);
        assert_eq!(first.persistence(), 1.0);
        assert!(!first.is_essential());

        let hole = diagram.intervals()[3];
        assert!(hole.is_essential());
        assert_eq!(hole.birth, 1.5);
        assert_eq!(hole.death, f64::INFINITY);
    }

    #[test]
    fn test_sort_puts_infinite_last_within_birth() {
        let f = triangle_filtration();
        let barcodes = vec![
            Barcode::infinite(0, 0),
            Barcode::finite(1, 5, 5),
            Barcode::finite(0, 0, 3),
            Barcode::finite(0, 1, 4),
        ];
        let mut diagram = PersistenceDiagram::from_barcodes(&barcodes, &f);
        diagram.sort();
        let order: Vec<_> = diagram
            .intervals()
            .iter()
            .map(|i| (i.dimension, i.birth_index, i.death_index))
            .collect();
        assert_eq!(
            order,
            vec![(0, 0, Some(3)), (0, 0, None), (0, 1, Some(4)), (1, 5, Some(5))]
        );
    }

    #[test]
    fn test_filters() {
        let mut diagram = triangle_diagram();
        diagram.filter_min_persistence(0.75);
        assert_eq!(diagram.len(), 3);
        assert!(diagram.dimension(0).all(|i| i.birth_index != 2));

        let f = triangle_filtration();
        let mut diagram =
            PersistenceDiagram::from_barcodes(&[Barcode::finite(0, 3, 4), Barcode::infinite(0, 0)], &f);
        diagram.remove_zero_length();
        assert_eq!(diagram.len(), 1);
        assert!(diagram.intervals()[0].is_essential());
    }

    #[test]
    fn test_betti_numbers() {
        let diagram = triangle_diagram();
        assert_eq!(diagram.betti_numbers(), vec![1, 1]);
        assert_eq!(diagram.essential(1).count(), 1);
        assert_eq!(diagram.dimension(0).count(), 3);
        assert!(PersistenceDiagram::default().betti_numbers().is_empty());
    }

    #[test]
    fn test_write_plain_and_verbose() {
        let diagram = triangle_diagram();

        let mut plain = Vec::new();
        diagram.write_plain(&mut plain).unwrap();
        let plain = String::from_utf8(plain).unwrap();
        assert_eq!(plain.lines().next(), Some("0 0 1"));
        assert_eq!(plain.lines().last(), Some("1 1.5 inf"));

        let mut verbose = Vec::new();
        diagram.write_verbose(&mut verbose).unwrap();
        let verbose = String::from_utf8(verbose).unwrap();
        assert!(verbose.contains("Dimension: 0, Birth: 0.5, Death: 1"));
        assert!(verbose.contains("Dimension: 1, Birth: 1.5, Death: inf"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_uses_null_for_infinity() {
        let json = triangle_diagram().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let intervals = value["intervals"].as_array().unwrap();
        assert_eq!(intervals.len(), 4);
        assert_eq!(intervals[0]["death"], 1.0);
        assert!(intervals[3]["death"].is_null());
        assert!(intervals[3]["death_index"].is_null());
    }
}
