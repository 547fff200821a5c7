//! General pointwise maps.
//!
//! Anything that can evaluate a point can act as a transform: deformation
//! fields, thin-plate splines, or the composite of two transforms that is
//! not linear as a whole.

use crate::spatial::Coord;
use crate::transform::Transform;

/// An arbitrary pointwise coordinate map.
///
/// Implementors must be pure: evaluation has no side effects and the same
/// input always yields the same output.
pub trait PointMap: Send + Sync {
    /// Evaluate the map at a point.
    fn apply(&self, point: Coord) -> Coord;
}

/// The composite of two transforms, applied inner first.
///
/// Produced by [`Transform::after`] whenever at least one operand is not
/// linear; temporaries of this shape live only for the duration of one
/// slice-resample call.
pub struct Composed {
    outer: Transform,
    inner: Transform,
}

impl Composed {
    /// Create a composite that maps `p -> outer(inner(p))`.
    pub fn new(outer: Transform, inner: Transform) -> Self {
        Self { outer, inner }
    }
}

impl PointMap for Composed {
    fn apply(&self, point: Coord) -> Coord {
        self.outer.apply(self.inner.apply(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::AffineMap;

    #[test]
    fn test_composed_applies_inner_first() {
        let inner = Transform::Linear(AffineMap::translation(1.0, 0.0, 0.0));
        let outer = Transform::Linear(AffineMap::scaling(3.0));
        let composed = Composed::new(outer, inner);
        // (0,0,0) -> (1,0,0) -> (3,0,0)
        assert_eq!(composed.apply(Coord::zeros()), Coord::new(3.0, 0.0, 0.0));
    }
}
