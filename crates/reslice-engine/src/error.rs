//! Error types for resampling runs.
//!
//! Per-pixel sampling rejection is not an error and never appears here;
//! it is absorbed into fill values by the interpolation contract. These
//! variants cover contract violations and collaborator failures, all of
//! which abort the run.

use reslice_core::volume::CalibrationError;
use thiserror::Error;

/// Main error type for resampling operations.
#[derive(Error, Debug)]
pub enum ResampleError {
    /// The calibration source broke its cardinality contract.
    #[error("calibration error: {0}")]
    Calibration(#[from] CalibrationError),

    /// A voxel-to-world map with no inverse.
    #[error("singular voxel-to-world geometry")]
    SingularGeometry,

    /// Inconsistent volume geometry (dimension counts, extents).
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Failure reported by the source collaborator.
    #[error("source error: {0}")]
    Source(String),

    /// Failure reported by the sink collaborator.
    #[error("sink error: {0}")]
    Sink(String),
}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ResampleError>;

impl ResampleError {
    /// Create a geometry error.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Create a source error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create a sink error.
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
