#![no_std]

//! phbar Core - Persistent Homology over GF(2)
//!
//! This crate holds the pure model and algorithms for computing persistence
//! barcodes from a simplicial filtration:
//!
//! 1. [`Filtration`]: validated, value-ordered simplices
//! 2. [`BoundaryMatrix`]: face/coface incidence as sparse GF(2) columns
//! 3. [`ColumnReducer`]: column reduction to unique lows
//! 4. [`extract_barcodes`]: birth/death pairs from the pivot structure
//!
//! No I/O and no logging happen here.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod barcode;
pub mod boundary;
pub mod column;
pub mod error;
pub mod filtration;
pub mod reduction;
pub mod simplex;
pub mod traits;
pub mod validation;

pub use barcode::{extract_barcodes, Barcode};
pub use boundary::{boundary_column, BoundaryMatrix};
pub use column::Column;
pub use error::*;
pub use filtration::Filtration;
pub use reduction::{
    has_unique_lows, PivotIndexReduction, ReducedMatrix, ReductionStats, ReductionStrategy,
    StandardReduction, UnknownStrategy,
};
pub use simplex::{Simplex, Vertex};
pub use traits::*;
pub use validation::parse_simplices;
