//! In-memory I/O collaborators.
//!
//! `MemorySource` and `MemorySink` implement the collaborator traits over
//! plain buffers. They exist to exercise the engine in tests and examples;
//! real storage backends live outside this crate.

use reslice_core::volume::SliceExtrema;

use crate::error::{ResampleError, Result};
use crate::io::{VolumeInfo, VolumeSink, VolumeSource};

/// A volume source backed by a fully resident buffer.
#[derive(Debug, Clone)]
pub struct MemorySource {
    info: VolumeInfo,
    data: Vec<f64>,
    extrema: Option<SliceExtrema>,
}

impl MemorySource {
    /// Create a source over a raw buffer laid out per `info.extents`.
    ///
    /// # Panics
    /// Panics if the buffer length does not match the extents.
    pub fn new(info: VolumeInfo, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            info.extents.iter().product::<usize>(),
            "Source buffer length must match extents"
        );
        Self {
            info,
            data,
            extrema: None,
        }
    }

    /// Attach calibration extrema returned for every window.
    pub fn with_extrema(mut self, extrema: SliceExtrema) -> Self {
        self.extrema = Some(extrema);
        self
    }
}

impl VolumeSource for MemorySource {
    fn info(&self) -> &VolumeInfo {
        &self.info
    }

    fn load(&mut self, start: &[usize], count: &[usize]) -> Result<Vec<f64>> {
        if start.len() != self.info.ndims() || count.len() != self.info.ndims() {
            return Err(ResampleError::source("start/count rank mismatch"));
        }
        Ok(extract_window(&self.data, &self.info.extents, start, count))
    }

    fn slice_extrema(
        &mut self,
        _start: &[usize],
        _count: &[usize],
    ) -> Result<Option<SliceExtrema>> {
        Ok(self.extrema.clone())
    }
}

/// Copy a `count`-shaped window starting at `start` out of a row-major
/// buffer with the given extents.
fn extract_window(data: &[f64], extents: &[usize], start: &[usize], count: &[usize]) -> Vec<f64> {
    let total: usize = count.iter().product();
    let mut out = Vec::with_capacity(total);
    let mut cursor = vec![0usize; extents.len()];
    for _ in 0..total {
        let mut linear = 0;
        for idim in 0..extents.len() {
            linear = linear * extents[idim] + start[idim] + cursor[idim];
        }
        out.push(data[linear]);
        for idim in (0..extents.len()).rev() {
            cursor[idim] += 1;
            if cursor[idim] < count[idim] {
                break;
            }
            cursor[idim] = 0;
        }
    }
    out
}

/// A volume sink that records everything written to it.
#[derive(Debug, Clone)]
pub struct MemorySink {
    info: VolumeInfo,
    data: Vec<f64>,
    calibration: Vec<(Vec<usize>, f64, f64)>,
    valid_range: Option<(f64, f64)>,
}

impl MemorySink {
    /// Create a zeroed sink for the described output variable.
    pub fn new(info: VolumeInfo) -> Self {
        let len = info.extents.iter().product();
        Self {
            info,
            data: vec![0.0; len],
            calibration: Vec::new(),
            valid_range: None,
        }
    }

    /// The full output buffer, row-major per the extents.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Every `(start, minimum, maximum)` calibration write, in order.
    pub fn calibration(&self) -> &[(Vec<usize>, f64, f64)] {
        &self.calibration
    }

    /// The dataset-level valid range, if one was written.
    pub fn valid_range(&self) -> Option<(f64, f64)> {
        self.valid_range
    }
}

impl VolumeSink for MemorySink {
    fn info(&self) -> &VolumeInfo {
        &self.info
    }

    fn write_pixels(&mut self, start: &[usize], pixels: &[f64]) -> Result<()> {
        if start.len() != self.info.ndims() {
            return Err(ResampleError::sink("start rank mismatch"));
        }
        let spatial = self.info.spatial();
        if pixels.len() != spatial[1] * spatial[2] {
            return Err(ResampleError::sink("pixel buffer is not one slice"));
        }
        // One slice occupies contiguous storage: the spatial axes are the
        // innermost dimensions and start is zero on row/column.
        let mut linear = 0;
        for idim in 0..self.info.ndims() {
            linear = linear * self.info.extents[idim] + start[idim];
        }
        self.data[linear..linear + pixels.len()].copy_from_slice(pixels);
        Ok(())
    }

    fn write_calibration(&mut self, start: &[usize], minimum: f64, maximum: f64) -> Result<()> {
        self.calibration.push((start.to_vec(), minimum, maximum));
        Ok(())
    }

    fn write_valid_range(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        self.valid_range = Some((minimum, maximum));
        Ok(())
    }
}
