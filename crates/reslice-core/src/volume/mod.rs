//! Volume data model: raw sample buffers, datatypes, per-slice intensity
//! calibration and output slice buffers.

pub mod calibration;
pub mod datatype;
pub mod slice;
pub mod volume;

pub use calibration::{build_calibration, CalibrationError, SliceExtrema};
pub use datatype::ScalarType;
pub use slice::Slice;
pub use volume::Volume;
