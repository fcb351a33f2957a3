//! Ordering and uniqueness checks on simplex sequences

use hashbrown::HashMap;

use crate::error::{Result, Violation};
use crate::simplex::{Simplex, Vertex};

/// Reject NaN and infinite filtration values
pub fn validate_finite(simplices: &[Simplex]) -> Result<()> {
    match simplices.iter().position(|s| !s.value().is_finite()) {
        Some(index) => Err(Violation::NonFiniteValue { index }.into()),
        None => Ok(()),
    }
}

/// Reject non-finite values and any value smaller than its predecessor
pub fn validate_values(simplices: &[Simplex]) -> Result<()> {
    validate_finite(simplices)?;

    match simplices
        .windows(2)
        .position(|pair| pair[1].value() < pair[0].value())
    {
        Some(offset) => Err(Violation::UnsortedValues { index: offset + 1 }.into()),
        None => Ok(()),
    }
}

/// Reject two simplices with the same vertex set
pub fn validate_unique(simplices: &[Simplex]) -> Result<()> {
    let mut seen: HashMap<&[Vertex], usize> = HashMap::with_capacity(simplices.len());

    for (index, simplex) in simplices.iter().enumerate() {
        if let Some(&first) = seen.get(simplex.vertices()) {
            return Err(Violation::DuplicateSimplex {
                first,
                second: index,
            }
            .into());
        }
        seen.insert(simplex.vertices(), index);
    }

    Ok(())
}

/// Require every codimension-1 face to appear strictly before its coface
pub fn validate_face_closure(simplices: &[Simplex]) -> Result<()> {
    let positions: HashMap<&[Vertex], usize> = simplices
        .iter()
        .enumerate()
        .map(|(index, s)| (s.vertices(), index))
        .collect();

    for (index, simplex) in simplices.iter().enumerate() {
        let closed = simplex.faces().all(|face| {
            positions
                .get(face.as_slice())
                .is_some_and(|&position| position < index)
        });
        if !closed {
            return Err(Violation::MissingFace { index }.into());
        }
    }

    Ok(())
}
