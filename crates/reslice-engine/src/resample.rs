//! Streaming resample orchestration.
//!
//! Reads the source in windows that cover the spatial dimensions, keeps
//! only one window resident at a time, resamples every output slice
//! against it and hands pixels plus calibration to the sink.

use reslice_core::interpolation::InterpolationKind;
use reslice_core::{Transform, Volume};
use serde::{Deserialize, Serialize};

use crate::error::{ResampleError, Result};
use crate::io::{VolumeSink, VolumeSource};
use crate::progress::ProgressCallback;
use crate::slice::resample_slice;

/// Caller-selected behavior for one resample run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResampleOptions {
    /// Interpolation kernel for every sampled pixel.
    pub interpolation: InterpolationKind,
    /// Count fill-valued output pixels into slice range statistics.
    pub count_fill_in_range: bool,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            interpolation: InterpolationKind::Trilinear,
            count_fill_in_range: false,
        }
    }
}

/// Run-scoped accumulator for the dataset-level valid range.
///
/// The maximum is a plain running maximum. The minimum deliberately is
/// not its mirror image: after the first slice it tracks the largest
/// per-slice minimum seen, a long-standing compatibility behavior rather
/// than a symmetric min-reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    minimum: f64,
    maximum: f64,
}

impl ValidRange {
    /// An empty accumulator: `[+MAX, -MAX]`.
    pub fn new() -> Self {
        Self {
            minimum: f64::MAX,
            maximum: -f64::MAX,
        }
    }

    /// Fold one slice's `(minimum, maximum)` into the global range.
    pub fn update(&mut self, slice_min: f64, slice_max: f64) {
        if slice_max > self.maximum {
            self.maximum = slice_max;
        }
        if self.minimum == f64::MAX || slice_min > self.minimum {
            self.minimum = slice_min;
        }
    }

    /// The accumulated minimum.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// The accumulated maximum.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }
}

impl Default for ValidRange {
    fn default() -> Self {
        Self::new()
    }
}

/// Resample the source volume into the sink under the given world
/// transform.
///
/// The transform maps output world space to input world space; the
/// voxel-to-world maps on either side come from the collaborators'
/// [`VolumeInfo`](crate::io::VolumeInfo). The source is read one spatial
/// window at a time, odometer-stepping any leading non-spatial
/// dimensions. After the last slice, floating-point sinks receive the
/// accumulated dataset valid range; integer sinks keep their fixed
/// calibration range.
pub fn resample_volumes<S: VolumeSource, K: VolumeSink>(
    source: &mut S,
    sink: &mut K,
    transform: &Transform,
    options: &ResampleOptions,
    progress: Option<&dyn ProgressCallback>,
) -> Result<()> {
    let in_info = source.info().clone();
    let out_info = sink.info().clone();

    let ndims = in_info.ndims();
    if ndims < 3 {
        return Err(ResampleError::geometry(format!(
            "source variable has {ndims} dimensions, need at least 3"
        )));
    }
    if out_info.ndims() != ndims {
        return Err(ResampleError::geometry(format!(
            "source has {ndims} dimensions but sink has {}",
            out_info.ndims()
        )));
    }

    let in_spatial = in_info.spatial();
    let out_spatial = out_info.spatial();
    let slice_dim = ndims - 3;
    let nslice = out_spatial[0];

    // Window covers the full spatial extents; leading dimensions step one
    // at a time.
    let mut in_start = vec![0usize; ndims];
    let mut in_count = vec![1usize; ndims];
    in_count[slice_dim..].copy_from_slice(&in_spatial);
    let in_end = in_info.extents.clone();

    let windows: usize = in_info.extents[..slice_dim].iter().product();
    let interpolator = options.interpolation.interpolator();
    let mut slice_buf = reslice_core::Slice::new(out_spatial[1], out_spatial[2]);
    let mut global = ValidRange::new();

    tracing::info!(
        windows,
        slices_per_window = nslice,
        kernel = ?options.interpolation,
        "starting resample"
    );
    if let Some(p) = progress {
        p.on_start(windows * nslice);
    }

    while in_start[0] < in_end[0] {
        let mut out_start = in_start.clone();

        let data = source.load(&in_start, &in_count)?;
        let mut volume = Volume::new(
            data,
            in_spatial,
            in_info.datatype,
            in_info.valid_range,
            in_info.fill_value,
        );
        let extrema = source.slice_extrema(&in_start, &in_count)?;
        volume.set_calibration(extrema.as_ref())?;
        volume.set_count_fill_in_range(options.count_fill_in_range);

        for islice in 0..nslice {
            if let Some(p) = progress {
                p.on_slice(islice);
            }
            out_start[slice_dim] = islice;

            let (minimum, maximum) = resample_slice(
                islice,
                &volume,
                &in_info.world_to_voxel,
                &out_info.voxel_to_world,
                transform,
                interpolator,
                &mut slice_buf,
            );
            global.update(minimum, maximum);
            tracing::debug!(islice, minimum, maximum, "slice resampled");

            sink.write_calibration(&out_start, minimum, maximum)?;
            sink.write_pixels(&out_start, slice_buf.data())?;
        }

        // Advance the window odometer over the leading dimensions.
        let mut idim = ndims - 1;
        in_start[idim] += in_count[idim];
        while idim > 0 && in_start[idim] >= in_end[idim] {
            in_start[idim] = 0;
            idim -= 1;
            in_start[idim] += in_count[idim];
        }
    }

    if let Some(p) = progress {
        p.on_complete();
    }

    if out_info.datatype.is_floating() {
        sink.write_valid_range(global.minimum(), global.maximum())?;
    }
    tracing::info!(
        global_min = global.minimum(),
        global_max = global.maximum(),
        "resample complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range_tracks_maximum() {
        let mut range = ValidRange::new();
        range.update(1.0, 5.0);
        range.update(2.0, 3.0);
        assert_eq!(range.maximum(), 5.0);
    }

    #[test]
    fn test_valid_range_minimum_is_largest_minimum() {
        // Historical asymmetric reducer: the minimum climbs, it never
        // descends once set.
        let mut range = ValidRange::new();
        range.update(3.0, 10.0);
        range.update(1.0, 10.0);
        range.update(5.0, 10.0);
        assert_eq!(range.minimum(), 5.0);
        assert_eq!(range.maximum(), 10.0);
    }

    #[test]
    fn test_valid_range_first_update_replaces_sentinel() {
        let mut range = ValidRange::new();
        range.update(-7.0, -2.0);
        assert_eq!(range.minimum(), -7.0);
        assert_eq!(range.maximum(), -2.0);
    }
}
