//! Interpolator trait for sampling values at continuous coordinates.

use crate::spatial::Coord;
use crate::volume::Volume;

/// The outcome of one interpolation: a value plus whether it was accepted.
///
/// A rejected sample carries the volume's fill value so it can be written
/// into the output buffer unconditionally; only accepted samples enter
/// range statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// False when the coordinate was outside the grid or the stencil
    /// touched a raw value outside the valid range.
    pub accepted: bool,
    /// The calibrated value, or the fill value when rejected.
    pub value: f64,
}

impl Sample {
    /// An accepted, calibrated sample.
    pub fn accepted(value: f64) -> Self {
        Self {
            accepted: true,
            value,
        }
    }

    /// A rejected sample carrying the fill value.
    pub fn fill(value: f64) -> Self {
        Self {
            accepted: false,
            value,
        }
    }
}

/// Interpolator trait for sampling a volume at continuous voxel
/// coordinates.
///
/// Coordinates are in voxel units with axis order (slice, row, column)
/// and 0 at the first voxel. Rejection is all-or-nothing over the
/// kernel's stencil: one fill marker anywhere rejects the whole sample.
pub trait Interpolator: Send + Sync {
    /// Sample the volume at a coordinate.
    fn interpolate(&self, volume: &Volume, coord: Coord) -> Sample;
}
