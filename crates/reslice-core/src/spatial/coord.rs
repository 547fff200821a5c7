//! Coordinate type for voxel and world positions.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A 3-component coordinate vector, ordered (slice, row, column).
///
/// Used both for positions (points fed through a transform) and for
/// directions (recovered by differencing two transformed points, which
/// cancels the translation part).
///
/// This is a thin wrapper around nalgebra's `Vector3` to provide
/// domain-specific functionality while keeping nalgebra operations
/// available through `inner()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord(pub Vector3<f64>);

impl Coord {
    /// Create a new coordinate from (slice, row, column) components.
    pub fn new(slice: f64, row: f64, column: f64) -> Self {
        Self(Vector3::new(slice, row, column))
    }

    /// Create a coordinate at the origin.
    pub fn zeros() -> Self {
        Self(Vector3::zeros())
    }

    /// Component along the slice axis.
    pub fn slice(&self) -> f64 {
        self.0[super::SLICE]
    }

    /// Component along the row axis.
    pub fn row(&self) -> f64 {
        self.0[super::ROW]
    }

    /// Component along the column axis.
    pub fn column(&self) -> f64 {
        self.0[super::COLUMN]
    }

    /// Get the inner nalgebra vector.
    pub fn inner(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl std::ops::Index<usize> for Coord {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::ops::IndexMut<usize> for Coord {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl std::ops::Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl std::ops::Sub for Coord {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl std::ops::Mul<f64> for Coord {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self(self.0 * scalar)
    }
}

impl std::ops::AddAssign for Coord {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}
