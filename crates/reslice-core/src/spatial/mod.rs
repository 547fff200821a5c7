//! Spatial coordinate types.
//!
//! Voxel coordinates are ordered (slice, row, column), with the slice axis
//! being the slowest-varying axis of the volume buffer.

pub mod coord;

pub use coord::Coord;

/// Index of the slice axis (slowest-varying).
pub const SLICE: usize = 0;
/// Index of the row axis.
pub const ROW: usize = 1;
/// Index of the column axis (fastest-varying).
pub const COLUMN: usize = 2;
