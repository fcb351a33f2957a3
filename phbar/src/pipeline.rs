//! End-to-end barcode computation
//!
//! Runs the optional face check, boundary construction, reduction and
//! extraction in order, timing each stage and logging its size.

use std::time::{Duration, Instant};

use phbar_core::{extract_barcodes, Barcode, BoundaryMatrix, Filtration, ReducedMatrix, SparseMatrix};
use tracing::{debug, info, info_span};

use crate::config::{BoundaryStrategy, PipelineConfig};
use crate::diagram::PersistenceDiagram;
use crate::error::Result;

/// Wall-clock time spent in each stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageTimings {
    pub face_check: Duration,
    pub boundary: Duration,
    pub reduction: Duration,
    pub extraction: Duration,
}

impl StageTimings {
    pub fn total(&self) -> Duration {
        self.face_check + self.boundary + self.reduction + self.extraction
    }
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub boundary: BoundaryMatrix,
    pub reduced: ReducedMatrix,
    pub barcodes: Vec<Barcode>,
    pub timings: StageTimings,
}

impl PipelineOutput {
    /// Sorted diagram with the presentation filters of `config` applied
    pub fn diagram(&self, filtration: &Filtration, config: &PipelineConfig) -> PersistenceDiagram {
        let mut diagram = PersistenceDiagram::from_barcodes(&self.barcodes, filtration);
        if !config.include_zero_length {
            diagram.remove_zero_length();
        }
        if config.min_persistence > 0.0 {
            diagram.filter_min_persistence(config.min_persistence);
        }
        diagram.sort();
        diagram
    }
}

/// Configured barcode pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(&self, filtration: &Filtration) -> Result<PipelineOutput> {
        self.config.validate()?;
        let _span = info_span!("pipeline", simplices = filtration.len()).entered();
        let mut timings = StageTimings::default();

        if self.config.check_faces {
            let start = Instant::now();
            filtration.check_face_closure()?;
            timings.face_check = start.elapsed();
            debug!(elapsed = ?timings.face_check, "face closure verified");
        }

        let start = Instant::now();
        let boundary = self.build_boundary(filtration);
        timings.boundary = start.elapsed();
        info!(
            strategy = %self.config.boundary,
            nnz = boundary.nnz(),
            elapsed = ?timings.boundary,
            "built boundary matrix"
        );

        let start = Instant::now();
        let reduced = self
            .config
            .reduction
            .reduce(&boundary, self.config.track_basis);
        timings.reduction = start.elapsed();
        let stats = reduced.stats();
        info!(
            strategy = %self.config.reduction,
            column_additions = stats.column_additions,
            pivots = stats.pivots,
            zero_columns = stats.zero_columns,
            elapsed = ?timings.reduction,
            "reduced boundary matrix"
        );

        let start = Instant::now();
        let barcodes = extract_barcodes(&reduced, filtration)?;
        timings.extraction = start.elapsed();
        let infinite = barcodes.iter().filter(|b| b.is_infinite()).count();
        info!(
            finite = barcodes.len() - infinite,
            infinite,
            elapsed = ?timings.extraction,
            "extracted barcodes"
        );

        Ok(PipelineOutput {
            boundary,
            reduced,
            barcodes,
            timings,
        })
    }

    fn build_boundary(&self, filtration: &Filtration) -> BoundaryMatrix {
        match self.config.boundary {
            BoundaryStrategy::SubsetScan => BoundaryMatrix::from_filtration(filtration),
            BoundaryStrategy::FaceIndex => BoundaryMatrix::from_filtration_indexed(filtration),
            #[cfg(feature = "parallel")]
            BoundaryStrategy::ParallelSubsetScan => {
                crate::parallel::build_boundary_parallel(filtration)
            }
            #[cfg(not(feature = "parallel"))]
            BoundaryStrategy::ParallelSubsetScan => {
                tracing::warn!("built without the `parallel` feature, using subset-scan");
                BoundaryMatrix::from_filtration(filtration)
            }
        }
    }
}

/// Barcodes of `filtration` under the default configuration
pub fn compute_barcodes(filtration: &Filtration) -> Result<Vec<Barcode>> {
    Pipeline::default().run(filtration).map(|output| output.barcodes)
}
