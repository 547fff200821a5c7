//! Spatial transforms between voxel and world coordinate spaces.
//!
//! A [`Transform`] is either `Linear` (a fixed affine map that composes in
//! closed form and is cheap to evaluate) or `General` (an arbitrary
//! pointwise map). Composition of two linear transforms stays linear;
//! anything else becomes general.

pub mod affine;
pub mod general;

pub use affine::AffineMap;
pub use general::{Composed, PointMap};

use std::fmt;
use std::sync::Arc;

use crate::spatial::Coord;

/// Classification of a transform, queried once per slice to select the
/// resampling fast path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Expressible as a fixed affine map.
    Linear,
    /// Arbitrary pointwise map (possibly nonlinear).
    General,
}

/// A mapping between 3-D coordinate spaces.
#[derive(Clone)]
pub enum Transform {
    /// Affine map evaluated in closed form.
    Linear(AffineMap),
    /// Arbitrary pointwise map.
    General(Arc<dyn PointMap>),
}

impl Transform {
    /// Create the identity transform.
    pub fn identity() -> Self {
        Self::Linear(AffineMap::identity())
    }

    /// Wrap an arbitrary pointwise map as a general transform.
    pub fn from_map<M: PointMap + 'static>(map: M) -> Self {
        Self::General(Arc::new(map))
    }

    /// Classify this transform.
    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Linear(_) => TransformKind::Linear,
            Self::General(_) => TransformKind::General,
        }
    }

    /// True if this transform is a fixed affine map.
    pub fn is_linear(&self) -> bool {
        self.kind() == TransformKind::Linear
    }

    /// Evaluate the transform at a point.
    pub fn apply(&self, point: Coord) -> Coord {
        match self {
            Self::Linear(map) => map.apply(point),
            Self::General(map) => map.apply(point),
        }
    }

    /// Compose with another transform: `self.after(inner)` maps
    /// `p -> self(inner(p))`.
    ///
    /// The result is `Linear` only when both inputs are linear; otherwise
    /// the pair is captured as a general [`Composed`] map.
    pub fn after(&self, inner: &Transform) -> Transform {
        match (self, inner) {
            (Self::Linear(outer), Self::Linear(inner)) => Self::Linear(outer.after(inner)),
            _ => Self::General(Arc::new(Composed::new(self.clone(), inner.clone()))),
        }
    }

    /// Recover the direction corresponding to `point - origin` in the
    /// transformed space. Differencing two transformed points cancels the
    /// translation, so this yields a direction vector even for maps with
    /// an offset.
    pub fn direction(&self, point: Coord, origin: Coord) -> Coord {
        self.apply(point) - self.apply(origin)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear(map) => f.debug_tuple("Linear").field(map).finish(),
            Self::General(_) => f.debug_tuple("General").finish(),
        }
    }
}
