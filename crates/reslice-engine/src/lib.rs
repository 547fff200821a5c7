//! Streaming 3-D volume resampler.
//!
//! Drives a windowed resample of a source volume into an output grid under
//! an arbitrary spatial transform, with per-slice intensity calibration
//! and valid-range aggregation. File formats and storage live behind the
//! [`io::VolumeSource`] / [`io::VolumeSink`] collaborator traits.

pub mod error;
pub mod io;
pub mod memory;
pub mod progress;
pub mod resample;
pub mod slice;

pub use error::{ResampleError, Result};
pub use io::{VolumeInfo, VolumeSink, VolumeSource};
pub use memory::{MemorySink, MemorySource};
pub use progress::{ConsoleProgress, ProgressCallback};
pub use resample::{resample_volumes, ResampleOptions, ValidRange};
pub use slice::{resample_slice, SMALL_VALUE};
