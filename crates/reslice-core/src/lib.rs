pub mod spatial;
pub mod transform;
pub mod volume;
pub mod interpolation;

pub use spatial::Coord;
pub use transform::{AffineMap, PointMap, Transform, TransformKind};
pub use volume::{ScalarType, Slice, SliceExtrema, Volume};
pub use interpolation::{InterpolationKind, Interpolator, Sample};
