//! Per-slice intensity calibration.
//!
//! Integer volumes store raw samples whose real value is recovered through
//! a per-slice affine map: `calibrated = raw*scale[s] + offset[s]`. The
//! scale and offset are derived from the raw per-slice extrema recorded by
//! the source, normalized over the datatype's valid range.

use thiserror::Error;

use crate::volume::datatype::ScalarType;

/// Calibration metadata read alongside a volume window.
///
/// Each array holds either a single broadcast value for the whole window
/// or exactly one value per slice. The two arrays are validated
/// independently; any other cardinality is a contract violation by the
/// source, not a data condition.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceExtrema {
    /// Raw per-slice maxima (length 1 or `nslice`).
    pub max: Vec<f64>,
    /// Raw per-slice minima (length 1 or `nslice`).
    pub min: Vec<f64>,
}

impl SliceExtrema {
    /// Broadcast extrema: one (max, min) pair for every slice.
    pub fn broadcast(max: f64, min: f64) -> Self {
        Self {
            max: vec![max],
            min: vec![min],
        }
    }

    /// Per-slice extrema.
    pub fn per_slice(max: Vec<f64>, min: Vec<f64>) -> Self {
        Self { max, min }
    }
}

/// Fatal calibration failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalibrationError {
    /// The source supplied a number of extrema values that is neither 1
    /// nor the window's slice count.
    #[error("calibration cardinality mismatch for {name}: got {got} values for {slices} slices")]
    Cardinality {
        /// Which extrema array failed validation.
        name: &'static str,
        got: usize,
        slices: usize,
    },
}

/// Build per-slice `(scale, offset)` arrays for a freshly loaded window.
///
/// Floating-point datatypes and absent extrema get the no-op calibration
/// `(1, 0)`. Otherwise each extrema array is broadcast to `nslice` values
/// and converted to affine form over `valid_range`:
///
/// ```text
/// denom    = valid_range[1] - valid_range[0]
/// scale[s] = denom != 0 ? (max[s] - min[s]) / denom : 0
/// offset[s] = min[s] - valid_range[0] * scale[s]
/// ```
///
/// so that `raw = valid_range[0]` maps to `min[s]` and
/// `raw = valid_range[1]` maps to `max[s]` exactly.
pub fn build_calibration(
    datatype: ScalarType,
    valid_range: [f64; 2],
    nslice: usize,
    extrema: Option<&SliceExtrema>,
) -> Result<(Vec<f64>, Vec<f64>), CalibrationError> {
    let extrema = match extrema {
        Some(e) if !datatype.is_floating() => e,
        _ => return Ok((vec![1.0; nslice], vec![0.0; nslice])),
    };

    let max = expand("image-max", &extrema.max, nslice)?;
    let min = expand("image-min", &extrema.min, nslice)?;

    let denom = valid_range[1] - valid_range[0];
    let mut scale = Vec::with_capacity(nslice);
    let mut offset = Vec::with_capacity(nslice);
    for islice in 0..nslice {
        let s = if denom != 0.0 {
            (max[islice] - min[islice]) / denom
        } else {
            0.0
        };
        scale.push(s);
        offset.push(min[islice] - valid_range[0] * s);
    }
    Ok((scale, offset))
}

fn expand(
    name: &'static str,
    values: &[f64],
    nslice: usize,
) -> Result<Vec<f64>, CalibrationError> {
    match values.len() {
        1 => Ok(vec![values[0]; nslice]),
        n if n == nslice => Ok(values.to_vec()),
        n => Err(CalibrationError::Cardinality {
            name,
            got: n,
            slices: nslice,
        }),
    }
}
