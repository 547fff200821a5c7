//! Single-slice resampling.
//!
//! Maps every (row, column) pixel of one output slice through the total
//! composed transform into source-voxel space and samples the input
//! volume there. When the total transform is linear the per-pixel
//! evaluation collapses to vector accumulation of precomputed row and
//! column steps.

use reslice_core::interpolation::Interpolator;
use reslice_core::{Coord, Slice, Transform, Volume};

/// Placeholder width for degenerate slice ranges.
pub const SMALL_VALUE: f64 = 1e-20;

/// Resample one output slice, returning its `(minimum, maximum)` over
/// accepted samples.
///
/// Composes `input_world_to_voxel . transform . output_voxel_to_world`
/// into one total transform for the duration of the call. Every pixel is
/// written (fill value when rejected); only accepted samples enter the
/// returned range unless the volume counts fill values too.
///
/// Degenerate ranges are widened so downstream calibration never sees a
/// zero-width interval: an all-rejected slice reports `(0, SMALL_VALUE)`,
/// and `max <= min` widens the maximum away from the minimum.
pub fn resample_slice(
    slice_num: usize,
    volume: &Volume,
    input_world_to_voxel: &Transform,
    output_voxel_to_world: &Transform,
    transform: &Transform,
    interpolator: &dyn Interpolator,
    slice: &mut Slice,
) -> (f64, f64) {
    let zero = Coord::zeros();
    let mut column = Coord::new(0.0, 0.0, 1.0);
    let mut row = Coord::new(0.0, 1.0, 0.0);
    let mut start = Coord::new(slice_num as f64, 0.0, 0.0);

    // output voxel -> world -> world -> input voxel
    let total = input_world_to_voxel.after(&transform.after(output_voxel_to_world));
    let all_linear = total.is_linear();

    // For a linear total transform, four evaluations fix the whole slice:
    // the transformed start plus row/column steps recovered by
    // point-difference (so the translation cancels).
    if all_linear {
        row = total.direction(row, zero);
        column = total.direction(column, zero);
        start = total.apply(start);
    }

    let mut maximum = -f64::MAX;
    let mut minimum = f64::MAX;

    for irow in 0..slice.rows() {
        let mut coord = row * irow as f64 + start;
        for icol in 0..slice.columns() {
            let source_coord = if all_linear { coord } else { total.apply(coord) };
            let sample = interpolator.interpolate(volume, source_coord);
            if sample.accepted || volume.count_fill_in_range() {
                if sample.value > maximum {
                    maximum = sample.value;
                }
                if sample.value < minimum {
                    minimum = sample.value;
                }
            }
            slice.set(irow, icol, sample.value);
            coord += column;
        }
    }

    if maximum == -f64::MAX && minimum == f64::MAX {
        minimum = 0.0;
        maximum = SMALL_VALUE;
    } else if maximum <= minimum {
        if minimum == 0.0 {
            maximum = SMALL_VALUE;
        } else if minimum < 0.0 {
            maximum = 0.0;
        } else {
            maximum = 2.0 * minimum;
        }
    }

    (minimum, maximum)
}
