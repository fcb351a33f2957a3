//! Pipeline configuration
//!
//! Strategy selection for each stage plus the presentation filters applied
//! after extraction.

use std::fmt;
use std::str::FromStr;

pub use phbar_core::{ReductionStrategy, UnknownStrategy};

use crate::error::{Error, Result};

/// How the boundary matrix is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BoundaryStrategy {
    /// Pairwise subset tests over the whole filtration
    SubsetScan,
    /// Hash lookup of each simplex's faces
    #[default]
    FaceIndex,
    /// Subset tests with columns computed on the rayon pool.
    ///
    /// Falls back to [`BoundaryStrategy::SubsetScan`] without the
    /// `parallel` feature.
    ParallelSubsetScan,
}

impl BoundaryStrategy {
    pub const fn name(self) -> &'static str {
        match self {
            BoundaryStrategy::SubsetScan => "subset-scan",
            BoundaryStrategy::FaceIndex => "face-index",
            BoundaryStrategy::ParallelSubsetScan => "parallel-subset-scan",
        }
    }
}

impl fmt::Display for BoundaryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "subset-scan" => Ok(BoundaryStrategy::SubsetScan),
            "face-index" => Ok(BoundaryStrategy::FaceIndex),
            "parallel-subset-scan" => Ok(BoundaryStrategy::ParallelSubsetScan),
            other => Err(UnknownStrategy(other.into())),
        }
    }
}

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Boundary construction strategy
    pub boundary: BoundaryStrategy,
    /// Column reduction strategy
    pub reduction: ReductionStrategy,
    /// Verify that every face precedes its coface before building
    pub check_faces: bool,
    /// Record the reduction basis (needed for cycle representatives)
    pub track_basis: bool,
    /// Drop finite bars shorter than this when presenting
    pub min_persistence: f64,
    /// Keep finite bars with birth value equal to death value
    pub include_zero_length: bool,
}

impl PipelineConfig {
    /// Set the boundary construction strategy
    pub fn with_boundary(mut self, boundary: BoundaryStrategy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the reduction strategy
    pub fn with_reduction(mut self, reduction: ReductionStrategy) -> Self {
        self.reduction = reduction;
        self
    }

    /// Enable or disable the face-order check
    pub fn with_face_check(mut self, check_faces: bool) -> Self {
        self.check_faces = check_faces;
        self
    }

    /// Record the reduction basis
    pub fn with_basis_tracking(mut self) -> Self {
        self.track_basis = true;
        self
    }

    /// Set the minimum persistence kept by presentation
    pub fn with_min_persistence(mut self, min_persistence: f64) -> Self {
        self.min_persistence = min_persistence;
        self
    }

    /// Drop bars whose birth and death values coincide
    pub fn without_zero_length(mut self) -> Self {
        self.include_zero_length = false;
        self
    }

    /// Reject values no run could use
    pub fn validate(&self) -> Result<()> {
        if !self.min_persistence.is_finite() || self.min_persistence < 0.0 {
            return Err(Error::Config(format!(
                "min_persistence must be finite and non-negative, got {}",
                self.min_persistence
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    #[cfg(feature = "serde")]
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse a configuration from JSON text; missing fields take defaults
    #[cfg(feature = "serde")]
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryStrategy::default(),
            reduction: ReductionStrategy::default(),
            check_faces: false,
            track_basis: false,
            min_persistence: 0.0,
            include_zero_length: true,
        }
    }
}
