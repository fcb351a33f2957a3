//! Abstract interfaces for phbar
//!
//! Matrix access traits shared by boundary and reduced matrices, and the
//! strategy trait behind column reduction.

pub mod matrix;
pub mod reducer;

pub use matrix::{MatrixOperations, SparseMatrix};
pub use reducer::ColumnReducer;
