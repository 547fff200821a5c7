//! In-memory volume window with per-slice calibration.

use crate::spatial::{COLUMN, ROW, SLICE};
use crate::volume::calibration::{build_calibration, CalibrationError, SliceExtrema};
use crate::volume::datatype::ScalarType;

/// One windowed read of a source volume: a 3-D buffer of raw samples plus
/// the metadata needed to sample it.
///
/// Raw values outside `valid_range` are pre-existing fill markers and must
/// never be blended; interpolation kernels test this before calibrating.
/// The calibration arrays have one entry per slice of the buffer and are
/// rebuilt each time a new window is loaded.
#[derive(Debug, Clone)]
pub struct Volume {
    data: Vec<f64>,
    size: [usize; 3],
    datatype: ScalarType,
    valid_range: [f64; 2],
    fill_value: f64,
    scale: Vec<f64>,
    offset: Vec<f64>,
    count_fill_in_range: bool,
}

impl Volume {
    /// Create a volume window with identity calibration.
    ///
    /// # Arguments
    /// * `data` - Raw samples, row-major (slice slowest, column fastest)
    /// * `size` - Extents as `[slices, rows, columns]`
    /// * `datatype` - Stored representation of the samples
    /// * `valid_range` - Raw interval considered genuine data
    /// * `fill_value` - Sentinel reported for rejected samples
    ///
    /// # Panics
    /// Panics if `data.len()` does not match the product of `size`.
    pub fn new(
        data: Vec<f64>,
        size: [usize; 3],
        datatype: ScalarType,
        valid_range: [f64; 2],
        fill_value: f64,
    ) -> Self {
        assert_eq!(
            data.len(),
            size[SLICE] * size[ROW] * size[COLUMN],
            "Volume buffer length must match size"
        );
        let nslice = size[SLICE];
        Self {
            data,
            size,
            datatype,
            valid_range,
            fill_value,
            scale: vec![1.0; nslice],
            offset: vec![0.0; nslice],
            count_fill_in_range: false,
        }
    }

    /// Rebuild the per-slice calibration from the source's raw extrema.
    ///
    /// Floating-point datatypes and absent extrema yield the no-op
    /// calibration; see [`build_calibration`] for the conversion and the
    /// cardinality contract.
    pub fn set_calibration(
        &mut self,
        extrema: Option<&SliceExtrema>,
    ) -> Result<(), CalibrationError> {
        let (scale, offset) =
            build_calibration(self.datatype, self.valid_range, self.size[SLICE], extrema)?;
        self.scale = scale;
        self.offset = offset;
        Ok(())
    }

    /// Count fill-valued output samples into the slice range statistics.
    ///
    /// Off by default: only accepted samples contribute to a slice's
    /// (min, max).
    pub fn set_count_fill_in_range(&mut self, enabled: bool) {
        self.count_fill_in_range = enabled;
    }

    /// Whether fill-valued outputs contribute to slice range statistics.
    pub fn count_fill_in_range(&self) -> bool {
        self.count_fill_in_range
    }

    /// Extents as `[slices, rows, columns]`.
    pub fn size(&self) -> [usize; 3] {
        self.size
    }

    /// Stored representation of the raw samples.
    pub fn datatype(&self) -> ScalarType {
        self.datatype
    }

    /// Raw interval considered genuine data.
    pub fn valid_range(&self) -> [f64; 2] {
        self.valid_range
    }

    /// Sentinel value reported for rejected samples.
    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    /// Calibration scale for a slice.
    pub fn scale(&self, slice: usize) -> f64 {
        self.scale[slice]
    }

    /// Calibration offset for a slice.
    pub fn offset(&self, slice: usize) -> f64 {
        self.offset[slice]
    }

    /// Raw sample at integer voxel indices.
    pub fn raw(&self, slice: usize, row: usize, column: usize) -> f64 {
        self.data[(slice * self.size[ROW] + row) * self.size[COLUMN] + column]
    }

    /// True if a raw value lies outside `valid_range`, i.e. is a
    /// pre-existing fill marker.
    pub fn is_fill(&self, raw: f64) -> bool {
        raw < self.valid_range[0] || raw > self.valid_range[1]
    }

    /// Calibrated value for a raw sample on a slice:
    /// `scale[slice]*raw + offset[slice]`.
    pub fn calibrate(&self, raw: f64, slice: usize) -> f64 {
        self.scale[slice] * raw + self.offset[slice]
    }
}
