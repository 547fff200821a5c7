//! Tricubic interpolation.
//!
//! Separable Catmull-Rom cubic over a 4x4x4 neighbourhood, evaluated by a
//! fixed-depth recursion over the axes slice -> row -> column. Within one
//! voxel of any edge the 4-wide window does not fit and the kernel falls
//! back to trilinear interpolation.

use crate::interpolation::trait_::{Interpolator, Sample};
use crate::interpolation::trilinear::Trilinear;
use crate::spatial::{Coord, COLUMN, ROW, SLICE};
use crate::volume::Volume;

/// Tricubic kernel with trilinear edge fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tricubic;

impl Interpolator for Tricubic {
    fn interpolate(&self, volume: &Volume, coord: Coord) -> Sample {
        let size = volume.size();
        let slcmax = size[SLICE] as i64 - 1;
        let rowmax = size[ROW] as i64 - 1;
        let colmax = size[COLUMN] as i64 - 1;

        if coord.slice() < 0.0
            || coord.slice() > slcmax as f64
            || coord.row() < 0.0
            || coord.row() > rowmax as f64
            || coord.column() < 0.0
            || coord.column() > colmax as f64
        {
            return Sample::fill(volume.fill_value());
        }

        let mut slcind = coord.slice().floor() as i64;
        let mut rowind = coord.row().floor() as i64;
        let mut colind = coord.column().floor() as i64;
        let frac = [
            coord.slice() - slcind as f64,
            coord.row() - rowind as f64,
            coord.column() - colind as f64,
        ];

        // Lower corner of the 4x4x4 neighbourhood.
        slcind -= 1;
        rowind -= 1;
        colind -= 1;

        // Not enough margin for four samples on some axis.
        if slcind > slcmax - 3
            || slcind < 0
            || rowind > rowmax - 3
            || rowind < 0
            || colind > colmax - 3
            || colind < 0
        {
            return Trilinear.interpolate(volume, coord);
        }

        let mut index = [slcind, rowind, colind];
        match cubic_eval(volume, &mut index, 0, &frac) {
            Some(value) => Sample::accepted(value),
            None => Sample::fill(volume.fill_value()),
        }
    }
}

/// One level of the recursive N-dimensional cubic evaluation.
///
/// Gathers four values along `axis` (raw samples at the innermost axis,
/// recursive blends otherwise) and blends them with [`cubic_blend`].
/// Calibration happens exactly once, at the slice level (`axis == 0`),
/// before the slice-axis blend. Returns `None` as soon as any
/// contributing raw sample is a fill marker.
fn cubic_eval(volume: &Volume, index: &mut [i64; 3], axis: usize, frac: &[f64; 3]) -> Option<f64> {
    let base = index[axis];
    let mut values = [0.0f64; 4];

    if axis == 2 {
        for (k, value) in values.iter_mut().enumerate() {
            *value = volume.raw(
                index[0] as usize,
                index[1] as usize,
                (base + k as i64) as usize,
            );
        }
        if values.iter().any(|&v| volume.is_fill(v)) {
            return None;
        }
    } else {
        for (k, value) in values.iter_mut().enumerate() {
            index[axis] = base + k as i64;
            let Some(blended) = cubic_eval(volume, index, axis + 1, frac) else {
                index[axis] = base;
                return None;
            };
            *value = blended;
        }
        index[axis] = base;
    }

    if axis == 0 {
        for (k, value) in values.iter_mut().enumerate() {
            *value = volume.calibrate(*value, (base + k as i64) as usize);
        }
    }

    let [v0, v1, v2, v3] = values;
    Some(cubic_blend(v0, v1, v2, v3, frac[axis]))
}

/// Cubic Hermite (Catmull-Rom) blend of four consecutive samples.
///
/// Yields `v1` at `u = 0` and `v2` at `u = 1`, with continuity of value
/// and first derivative across cells sharing `v1`, `v2`.
pub fn cubic_blend(v0: f64, v1: f64, v2: f64, v3: f64, u: f64) -> f64 {
    v1 + u * (0.5 * (v2 - v0)
        + u * ((v0 - 2.5 * v1 + 2.0 * v2 - 0.5 * v3)
            + u * (-0.5 * v0 + 1.5 * v1 - 1.5 * v2 + 0.5 * v3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::{ScalarType, SliceExtrema};

    fn ramp_volume(n: usize) -> Volume {
        let data: Vec<f64> = (0..n * n * n).map(|i| i as f64).collect();
        Volume::new(data, [n, n, n], ScalarType::Short, [0.0, 1000.0], -1.0)
    }

    #[test]
    fn test_cubic_blend_endpoints() {
        assert_eq!(cubic_blend(5.0, 1.0, 2.0, -3.0, 0.0), 1.0);
        assert_eq!(cubic_blend(5.0, 1.0, 2.0, -3.0, 1.0), 2.0);
    }

    #[test]
    fn test_matches_grid_values_in_interior() {
        let vol = ramp_volume(6);
        let s = Tricubic.interpolate(&vol, Coord::new(2.0, 2.0, 2.0));
        assert!(s.accepted);
        assert!((s.value - vol.raw(2, 2, 2)).abs() < 1e-12);
    }

    #[test]
    fn test_reproduces_linear_ramp() {
        // Catmull-Rom reproduces degree-1 fields exactly.
        let vol = ramp_volume(6);
        let s = Tricubic.interpolate(&vol, Coord::new(2.5, 2.25, 2.75));
        assert!(s.accepted);
        let expected = 2.5 * 36.0 + 2.25 * 6.0 + 2.75;
        assert!((s.value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_edge_falls_back_to_trilinear() {
        let vol = ramp_volume(6);
        // Within one voxel of the low edge on the slice axis.
        for coord in [
            Coord::new(0.5, 2.5, 2.5),
            Coord::new(4.6, 2.5, 2.5),
            Coord::new(2.5, 0.2, 2.5),
            Coord::new(2.5, 2.5, 4.9),
        ] {
            let cubic = Tricubic.interpolate(&vol, coord);
            let linear = Trilinear.interpolate(&vol, coord);
            assert_eq!(cubic, linear);
        }
    }

    #[test]
    fn test_small_volume_always_falls_back() {
        let vol = ramp_volume(3);
        let coord = Coord::new(1.0, 1.0, 1.0);
        assert_eq!(
            Tricubic.interpolate(&vol, coord),
            Trilinear.interpolate(&vol, coord)
        );
    }

    #[test]
    fn test_any_fill_in_stencil_rejects() {
        // Voxel (1,1,1): a corner of the 4x4x4 stencil, far from the
        // 2x2x2 cell.
        let mut data: Vec<f64> = (0..216).map(|i| i as f64).collect();
        data[43] = -100.0;
        let vol = Volume::new(data, [6, 6, 6], ScalarType::Short, [0.0, 1000.0], -5.0);
        let s = Tricubic.interpolate(&vol, Coord::new(2.5, 2.5, 2.5));
        assert!(!s.accepted);
        assert_eq!(s.value, -5.0);

        // The trilinear cell itself is clean, so the fallback would accept;
        // the cubic stencil must still reject.
        assert!(Trilinear.interpolate(&vol, Coord::new(2.5, 2.5, 2.5)).accepted);
    }

    #[test]
    fn test_slice_calibration_applied_once() {
        let mut vol = ramp_volume(6);
        let extrema = SliceExtrema::per_slice(
            vec![1000.0, 2000.0, 3000.0, 1000.0, 1000.0, 1000.0],
            vec![0.0; 6],
        );
        vol.set_calibration(Some(&extrema)).unwrap();

        // Zero fraction everywhere: the blend collapses to v1 at each
        // axis, i.e. the calibrated grid value at (2,2,2) on slice 2.
        let s = Tricubic.interpolate(&vol, Coord::new(2.0, 2.0, 2.0));
        assert!(s.accepted);
        assert!((s.value - vol.calibrate(vol.raw(2, 2, 2), 2)).abs() < 1e-9);
    }
}
