//! Output slice buffer.

/// A 2-D output buffer filled by one slice-resample invocation.
///
/// Allocated once per resample run and reused for every output slice.
#[derive(Debug, Clone)]
pub struct Slice {
    data: Vec<f64>,
    size: [usize; 2],
}

impl Slice {
    /// Create a zeroed slice buffer of `[rows, columns]`.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            data: vec![0.0; rows * columns],
            size: [rows, columns],
        }
    }

    /// Extents as `[rows, columns]`.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.size[0]
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.size[1]
    }

    /// The pixel buffer, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Pixel value at (row, column).
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.size[1] + column]
    }

    /// Set the pixel value at (row, column).
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.data[row * self.size[1] + column] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_roundtrip() {
        let mut slice = Slice::new(2, 3);
        slice.set(1, 2, 9.0);
        assert_eq!(slice.get(1, 2), 9.0);
        assert_eq!(slice.data()[5], 9.0);
        assert_eq!(slice.rows(), 2);
        assert_eq!(slice.columns(), 3);
    }
}
