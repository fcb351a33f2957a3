//! phbar - Persistent Homology Barcodes
//!
//! This library computes persistence barcodes of simplicial filtrations over
//! GF(2), with file input, configurable strategies and diagram output.
//!
//! ## Architecture
//!
//! phbar follows a clean model/driver separation:
//!
//! - **phbar-core**: Filtration model, boundary construction, reduction and
//!   extraction (`no_std`, no I/O, no logging)
//! - **phbar**: File input, configuration, the timed pipeline, diagrams and
//!   the `phbar` command-line tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use phbar::{read_filtration, Pipeline, PipelineConfig, ReductionStrategy};
//!
//! fn example() -> phbar::Result<()> {
//!     let filtration = read_filtration("complex.txt")?;
//!
//!     let config = PipelineConfig::default()
//!         .with_reduction(ReductionStrategy::Standard)
//!         .with_min_persistence(0.1);
//!     let output = Pipeline::new(config.clone()).run(&filtration)?;
//!
//!     for interval in &output.diagram(&filtration, &config) {
//!         println!("{} {} {}", interval.dimension, interval.birth, interval.death);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: Memory-mapped reading of large filtration files
//! - **parallel**: Boundary columns computed on the rayon pool
//! - **serde**: JSON configuration and diagram output
//! - **cli**: The `phbar` binary

// Re-export the core model and algorithms
pub use phbar_core::{
    // Model
    Filtration, Simplex, Vertex,
    // Stages
    boundary_column, extract_barcodes, Barcode, BoundaryMatrix, Column, ReducedMatrix,
    ReductionStats,
    // Strategies
    ColumnReducer, PivotIndexReduction, ReductionStrategy, StandardReduction,
    // Core traits
    MatrixOperations, SparseMatrix,
    // Core errors
    MalformedKind, MalformedSimplex, PhbarError, Violation,
};

pub mod config;
pub mod diagram;
pub mod error;
pub mod io;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod pipeline;

pub use config::{BoundaryStrategy, PipelineConfig};
pub use diagram::{PersistenceDiagram, PersistenceInterval};
pub use error::{Error, Result};
pub use io::{parse_filtration, read_filtration, read_filtration_from};
pub use pipeline::{compute_barcodes, Pipeline, PipelineOutput, StageTimings};

#[cfg(feature = "mmap")]
pub use io::read_filtration_mmap;

#[cfg(feature = "parallel")]
pub use parallel::build_boundary_parallel;
