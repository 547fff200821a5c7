//! Affine map implementation.
//!
//! An affine map is a linear transformation plus a translation:
//! `T(x) = A*x + t`.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::spatial::Coord;

/// A fixed affine map `T(x) = A*x + t` over (slice, row, column) space.
///
/// Affine maps compose in closed form and are cheap to evaluate, which is
/// what enables the per-row/column stepping fast path in the slice
/// resampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMap {
    matrix: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl AffineMap {
    /// Create an affine map from a matrix and a translation vector.
    pub fn new(matrix: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        Self { matrix, translation }
    }

    /// Create the identity map.
    pub fn identity() -> Self {
        Self::new(Matrix3::identity(), Vector3::zeros())
    }

    /// Create a pure translation.
    pub fn translation(slice: f64, row: f64, column: f64) -> Self {
        Self::new(Matrix3::identity(), Vector3::new(slice, row, column))
    }

    /// Create a uniform scaling about the origin.
    pub fn scaling(factor: f64) -> Self {
        Self::new(Matrix3::identity() * factor, Vector3::zeros())
    }

    /// Get the linear part.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Get the translation part.
    pub fn translation_vector(&self) -> &Vector3<f64> {
        &self.translation
    }

    /// Evaluate the map at a point.
    pub fn apply(&self, point: Coord) -> Coord {
        Coord(self.matrix * point.0 + self.translation)
    }

    /// Closed-form composition: `self.after(inner)` maps
    /// `x -> self(inner(x))`.
    pub fn after(&self, inner: &AffineMap) -> AffineMap {
        AffineMap {
            matrix: self.matrix * inner.matrix,
            translation: self.matrix * inner.translation + self.translation,
        }
    }

    /// Invert the map, if the linear part is non-singular.
    ///
    /// `T^-1(y) = A^-1*y - A^-1*t`.
    pub fn inverse(&self) -> Option<AffineMap> {
        let inv = self.matrix.try_inverse()?;
        Some(AffineMap {
            matrix: inv,
            translation: -(inv * self.translation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Coord::new(1.0, -2.0, 3.5);
        assert_eq!(AffineMap::identity().apply(p), p);
    }

    #[test]
    fn test_composition_matches_sequential_application() {
        let a = AffineMap::new(
            Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let b = AffineMap::new(Matrix3::identity() * 2.0, Vector3::new(-1.0, 0.0, 0.5));

        let composed = a.after(&b);
        let p = Coord::new(0.5, 1.5, -2.0);
        let expected = a.apply(b.apply(p));
        let got = composed.apply(p);
        assert!((got - expected).inner().norm() < 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = AffineMap::new(
            Matrix3::new(2.0, 0.0, 0.0, 0.0, 1.0, 0.5, 0.0, 0.0, 1.0),
            Vector3::new(1.0, -1.0, 4.0),
        );
        let inv = t.inverse().unwrap();
        let p = Coord::new(3.0, 2.0, 1.0);
        let round = inv.apply(t.apply(p));
        assert!((round - p).inner().norm() < 1e-12);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let t = AffineMap::new(Matrix3::zeros(), Vector3::zeros());
        assert!(t.inverse().is_none());
    }
}
