//! Interpolation kernels for point-sampling a calibrated voxel field.
//!
//! All kernels share the [`Interpolator`] contract: given a volume and a
//! coordinate in voxel units they produce a [`Sample`] that is either an
//! accepted calibrated value or the volume's fill value. A sample is
//! rejected when the coordinate falls outside the addressable grid or when
//! any raw sample in the kernel's stencil is a pre-existing fill marker.

pub mod nearest;
pub mod trait_;
pub mod tricubic;
pub mod trilinear;

pub use nearest::NearestNeighbour;
pub use trait_::{Interpolator, Sample};
pub use tricubic::{cubic_blend, Tricubic};
pub use trilinear::Trilinear;

use serde::{Deserialize, Serialize};

/// Caller-facing kernel selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpolationKind {
    /// Round to the nearest voxel; extends half a voxel past the grid.
    NearestNeighbour,
    /// Blend the 2x2x2 enclosing cell.
    Trilinear,
    /// Blend a 4x4x4 neighbourhood; falls back to trilinear at edges.
    Tricubic,
}

impl InterpolationKind {
    /// The kernel implementing this selection.
    pub fn interpolator(&self) -> &'static dyn Interpolator {
        match self {
            Self::NearestNeighbour => &NearestNeighbour,
            Self::Trilinear => &Trilinear,
            Self::Tricubic => &Tricubic,
        }
    }
}
