//! Precondition checks and input parsing for phbar
//!
//! This module contains pure functions with no I/O dependencies. Checks
//! return the first violation found, blaming the lowest offending index.

pub mod filtration;
pub mod parsing;

pub use filtration::{validate_face_closure, validate_finite, validate_unique, validate_values};
pub use parsing::{parse_simplices, SimplexTokens};
