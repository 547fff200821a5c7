//! Trilinear interpolation.

use crate::interpolation::trait_::{Interpolator, Sample};
use crate::spatial::{Coord, COLUMN, ROW, SLICE};
use crate::volume::Volume;

/// Trilinear kernel.
///
/// Blends the 2x2x2 cell enclosing the coordinate. The cell base index is
/// capped at `size-2` per axis, so a coordinate landing exactly on the
/// last grid line reuses the last cell (extend-to-voxel-edge policy).
///
/// Calibration is applied per bounding slice: the four corners within
/// each slice are blended raw, calibrated with that slice's scale/offset,
/// and only then blended across the slice axis. Raw values from different
/// slices are never mixed before calibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trilinear;

impl Interpolator for Trilinear {
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

        // Whole part of the coordinate, capped so the far corner of the
        // cell stays inside the grid.
        let mut slcind = coord.slice().floor() as i64;
        let mut rowind = coord.row().floor() as i64;
        let mut colind = coord.column().floor() as i64;
        if slcind >= slcmax - 1 {
            slcind = slcmax - 1;
        }
        if rowind >= rowmax - 1 {
            rowind = rowmax - 1;
        }
        if colind >= colmax - 1 {
            colind = colmax - 1;
        }
        // An axis of extent 1 cannot form a cell.
        if slcind < 0 || rowind < 0 || colind < 0 {
            return Sample::fill(volume.fill_value());
        }

        let (s0, r0i, c0) = (slcind as usize, rowind as usize, colind as usize);
        let v000 = volume.raw(s0, r0i, c0);
        let v001 = volume.raw(s0, r0i, c0 + 1);
        let v010 = volume.raw(s0, r0i + 1, c0);
        let v011 = volume.raw(s0, r0i + 1, c0 + 1);
        let v100 = volume.raw(s0 + 1, r0i, c0);
        let v101 = volume.raw(s0 + 1, r0i, c0 + 1);
        let v110 = volume.raw(s0 + 1, r0i + 1, c0);
        let v111 = volume.raw(s0 + 1, r0i + 1, c0 + 1);

        // One fill marker anywhere in the cell rejects the whole sample.
        if volume.is_fill(v000)
            || volume.is_fill(v001)
            || volume.is_fill(v010)
            || volume.is_fill(v011)
            || volume.is_fill(v100)
            || volume.is_fill(v101)
            || volume.is_fill(v110)
            || volume.is_fill(v111)
        {
            return Sample::fill(volume.fill_value());
        }

        let f0 = coord.slice() - slcind as f64;
        let f1 = coord.row() - rowind as f64;
        let f2 = coord.column() - colind as f64;
        let r0 = 1.0 - f0;
        let r1 = 1.0 - f1;
        let r2 = 1.0 - f2;

        let r1r2 = r1 * r2;
        let r1f2 = r1 * f2;
        let f1r2 = f1 * r2;
        let f1f2 = f1 * f2;

        let mut result = r0
            * (volume.scale(s0) * (r1r2 * v000 + r1f2 * v001 + f1r2 * v010 + f1f2 * v011)
                + volume.offset(s0));
        result += f0
            * (volume.scale(s0 + 1) * (r1r2 * v100 + r1f2 * v101 + f1r2 * v110 + f1f2 * v111)
                + volume.offset(s0 + 1));

        Sample::accepted(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::NearestNeighbour;
    use crate::volume::{ScalarType, SliceExtrema};

    fn ramp_volume() -> Volume {
        let data: Vec<f64> = (0..64).map(|i| i as f64).collect();
        Volume::new(data, [4, 4, 4], ScalarType::Short, [0.0, 100.0], -1.0)
    }

    #[test]
    fn test_matches_nearest_at_grid_points() {
        let vol = ramp_volume();
        for s in 0..4 {
            for r in 0..4 {
                for c in 0..4 {
                    let coord = Coord::new(s as f64, r as f64, c as f64);
                    let tri = Trilinear.interpolate(&vol, coord);
                    let near = NearestNeighbour.interpolate(&vol, coord);
                    assert!(tri.accepted);
                    assert!((tri.value - near.value).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_midpoint_blends_cell() {
        let vol = ramp_volume();
        let s = Trilinear.interpolate(&vol, Coord::new(0.5, 0.5, 0.5));
        assert!(s.accepted);
        // Mean of the 8 corners of the first cell on a linear ramp.
        let expected = (0.0 + 1.0 + 4.0 + 5.0 + 16.0 + 17.0 + 20.0 + 21.0) / 8.0;
        assert!((s.value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_last_grid_line_reuses_cell() {
        let vol = ramp_volume();
        let s = Trilinear.interpolate(&vol, Coord::new(3.0, 3.0, 3.0));
        assert!(s.accepted);
        assert_eq!(s.value, 63.0);
    }

    #[test]
    fn test_rejects_outside_grid() {
        let vol = ramp_volume();
        // Trilinear bounds are strict, unlike nearest-neighbour.
        let s = Trilinear.interpolate(&vol, Coord::new(-0.25, 0.0, 0.0));
        assert!(!s.accepted);
        assert_eq!(s.value, -1.0);
        assert!(!Trilinear.interpolate(&vol, Coord::new(0.0, 3.01, 0.0)).accepted);
    }

    #[test]
    fn test_one_fill_corner_rejects_cell() {
        for corner in 0..8 {
            let mut data: Vec<f64> = (0..64).map(|i| i as f64).collect();
            let (ds, dr, dc) = ((corner >> 2) & 1, (corner >> 1) & 1, corner & 1);
            data[(ds * 4 + dr) * 4 + dc] = -50.0;
            let vol = Volume::new(data, [4, 4, 4], ScalarType::Short, [0.0, 100.0], -9.0);
            let s = Trilinear.interpolate(&vol, Coord::new(0.5, 0.5, 0.5));
            assert!(!s.accepted, "corner {corner} should reject");
            assert_eq!(s.value, -9.0);
        }
    }

    #[test]
    fn test_per_slice_calibration_applied_before_slice_blend() {
        let mut vol = ramp_volume();
        let extrema = SliceExtrema::per_slice(
            vec![100.0, 200.0, 100.0, 100.0],
            vec![0.0, 10.0, 0.0, 0.0],
        );
        vol.set_calibration(Some(&extrema)).unwrap();

        // Halfway between slices 0 and 1, at a grid point in row/column.
        let s = Trilinear.interpolate(&vol, Coord::new(0.5, 1.0, 1.0));
        assert!(s.accepted);
        let lo = vol.calibrate(vol.raw(0, 1, 1), 0);
        let hi = vol.calibrate(vol.raw(1, 1, 1), 1);
        assert!((s.value - 0.5 * (lo + hi)).abs() < 1e-12);
    }
}
