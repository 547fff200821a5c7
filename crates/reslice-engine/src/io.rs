//! I/O collaborator interfaces.
//!
//! The engine never touches storage directly. A [`VolumeSource`] hands it
//! windowed raw buffers plus calibration metadata, and a [`VolumeSink`]
//! accepts finished slices, per-slice calibration pairs and the final
//! dataset valid range. Both describe their variable through
//! [`VolumeInfo`].

use reslice_core::transform::AffineMap;
use reslice_core::volume::SliceExtrema;
use reslice_core::{ScalarType, Transform};

use crate::error::{ResampleError, Result};

/// Description of a volume variable on either side of the resample.
///
/// `extents` lists every dimension of the variable, slowest first; the
/// last three are the spatial (slice, row, column) extents and any
/// leading dimensions (e.g. time) are windowed over by the orchestrator.
#[derive(Debug, Clone)]
pub struct VolumeInfo {
    /// Full variable extents, slowest-varying first.
    pub extents: Vec<usize>,
    /// Stored representation of the samples.
    pub datatype: ScalarType,
    /// Raw interval considered genuine data.
    pub valid_range: [f64; 2],
    /// Sentinel for "no data" output samples.
    pub fill_value: f64,
    /// Voxel-space to world-space map.
    pub voxel_to_world: Transform,
    /// World-space to voxel-space map.
    pub world_to_voxel: Transform,
}

impl VolumeInfo {
    /// Build an info block from a linear voxel-to-world map, deriving the
    /// world-to-voxel map by inversion.
    pub fn with_linear_geometry(
        extents: Vec<usize>,
        datatype: ScalarType,
        valid_range: [f64; 2],
        fill_value: f64,
        voxel_to_world: AffineMap,
    ) -> Result<Self> {
        let world_to_voxel = voxel_to_world
            .inverse()
            .ok_or(ResampleError::SingularGeometry)?;
        Ok(Self {
            extents,
            datatype,
            valid_range,
            fill_value,
            voxel_to_world: Transform::Linear(voxel_to_world),
            world_to_voxel: Transform::Linear(world_to_voxel),
        })
    }

    /// Number of variable dimensions.
    pub fn ndims(&self) -> usize {
        self.extents.len()
    }

    /// The trailing spatial extents as `[slices, rows, columns]`.
    ///
    /// # Panics
    /// Panics if the variable has fewer than three dimensions; the
    /// orchestrator validates this before use.
    pub fn spatial(&self) -> [usize; 3] {
        let n = self.extents.len();
        [self.extents[n - 3], self.extents[n - 2], self.extents[n - 1]]
    }
}

/// Windowed read access to the input volume.
pub trait VolumeSource {
    /// Describe the source variable.
    fn info(&self) -> &VolumeInfo;

    /// Load one window of raw samples.
    ///
    /// `start` and `count` have one entry per variable dimension; the
    /// returned buffer holds `count` samples in variable order.
    fn load(&mut self, start: &[usize], count: &[usize]) -> Result<Vec<f64>>;

    /// Raw per-slice extrema for the window, if the source records them.
    ///
    /// Each returned array must hold either one broadcast value or one
    /// value per slice of the window; anything else aborts the run.
    fn slice_extrema(&mut self, start: &[usize], count: &[usize])
        -> Result<Option<SliceExtrema>>;
}

/// Write access to the output volume.
pub trait VolumeSink {
    /// Describe the output variable.
    fn info(&self) -> &VolumeInfo;

    /// Write one finished slice of pixels at the given start coordinate.
    fn write_pixels(&mut self, start: &[usize], pixels: &[f64]) -> Result<()>;

    /// Record a slice's calibration pair.
    ///
    /// The calibration variable may be addressed more coarsely than the
    /// pixel grid (e.g. one value per slice); translating `start` into
    /// that addressing is the sink's concern.
    fn write_calibration(&mut self, start: &[usize], minimum: f64, maximum: f64) -> Result<()>;

    /// Record the dataset-level valid range.
    ///
    /// Called exactly once, after all slices, and only when the output's
    /// stored representation is floating-point.
    fn write_valid_range(&mut self, minimum: f64, maximum: f64) -> Result<()>;
}
