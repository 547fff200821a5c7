//! Nearest-neighbour interpolation.

use crate::interpolation::trait_::{Interpolator, Sample};
use crate::spatial::{Coord, COLUMN, ROW, SLICE};
use crate::volume::Volume;

/// Nearest-neighbour kernel.
///
/// Rounds each coordinate component to the nearest integer (half away
/// from zero) and tests bounds on the rounded index only, so a coordinate
/// may sit up to half a voxel outside the grid and still be accepted.
/// This edge-extension policy is deliberate and must not be narrowed to
/// strict in-bounds checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbour;

impl Interpolator for NearestNeighbour {
    fn interpolate(&self, volume: &Volume, coord: Coord) -> Sample {
        let size = volume.size();
        let slcmax = size[SLICE] as i64 - 1;
        let rowmax = size[ROW] as i64 - 1;
        let colmax = size[COLUMN] as i64 - 1;

        let slcind = coord.slice().round() as i64;
        let rowind = coord.row().round() as i64;
        let colind = coord.column().round() as i64;
        if slcind < 0
            || slcind > slcmax
            || rowind < 0
            || rowind > rowmax
            || colind < 0
            || colind > colmax
        {
            return Sample::fill(volume.fill_value());
        }

        let raw = volume.raw(slcind as usize, rowind as usize, colind as usize);
        if volume.is_fill(raw) {
            return Sample::fill(volume.fill_value());
        }

        Sample::accepted(volume.calibrate(raw, slcind as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::ScalarType;

    fn ramp_volume() -> Volume {
        let data: Vec<f64> = (0..27).map(|i| i as f64).collect();
        Volume::new(data, [3, 3, 3], ScalarType::Short, [0.0, 100.0], -1.0)
    }

    #[test]
    fn test_exact_grid_point() {
        let vol = ramp_volume();
        let s = NearestNeighbour.interpolate(&vol, Coord::new(1.0, 2.0, 0.0));
        assert!(s.accepted);
        assert_eq!(s.value, vol.raw(1, 2, 0));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let vol = ramp_volume();
        let s = NearestNeighbour.interpolate(&vol, Coord::new(0.5, 0.5, 0.5));
        assert!(s.accepted);
        assert_eq!(s.value, vol.raw(1, 1, 1));
    }

    #[test]
    fn test_half_voxel_edge_extension() {
        let vol = ramp_volume();
        // Up to half a voxel outside the grid is still accepted.
        let lo = NearestNeighbour.interpolate(&vol, Coord::new(-0.49, 0.0, 0.0));
        assert!(lo.accepted);
        assert_eq!(lo.value, vol.raw(0, 0, 0));

        let hi = NearestNeighbour.interpolate(&vol, Coord::new(2.49, 2.0, 2.0));
        assert!(hi.accepted);
        assert_eq!(hi.value, vol.raw(2, 2, 2));

        // Past the half-voxel ring the rounded index leaves the grid.
        let out = NearestNeighbour.interpolate(&vol, Coord::new(-0.51, 0.0, 0.0));
        assert!(!out.accepted);
        assert_eq!(out.value, vol.fill_value());
    }

    #[test]
    fn test_rejects_fill_marker() {
        let mut data: Vec<f64> = (0..27).map(|i| i as f64).collect();
        data[13] = 200.0; // outside valid_range
        let vol = Volume::new(data, [3, 3, 3], ScalarType::Short, [0.0, 100.0], -7.0);
        let s = NearestNeighbour.interpolate(&vol, Coord::new(1.0, 1.0, 1.0));
        assert!(!s.accepted);
        assert_eq!(s.value, -7.0);
    }

    #[test]
    fn test_applies_slice_calibration() {
        let mut vol = ramp_volume();
        let extrema = crate::volume::SliceExtrema::per_slice(
            vec![100.0, 200.0, 300.0],
            vec![0.0, 0.0, 0.0],
        );
        vol.set_calibration(Some(&extrema)).unwrap();
        let s = NearestNeighbour.interpolate(&vol, Coord::new(1.0, 0.0, 1.0));
        assert!(s.accepted);
        // slice 1: scale = 200/100 = 2, offset = 0; raw = 10.
        assert_eq!(s.value, 20.0);
    }
}
