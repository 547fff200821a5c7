//! Stored sample datatypes.

use serde::{Deserialize, Serialize};

/// The stored representation of a volume's raw samples.
///
/// Integer types carry per-slice scale/offset calibration; floating types
/// are always stored pre-calibrated (scale 1, offset 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarType {
    Byte,
    Short,
    Int,
    Float,
    Double,
}

impl ScalarType {
    /// True for floating-point storage, which never carries calibration.
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_classification() {
        assert!(ScalarType::Float.is_floating());
        assert!(ScalarType::Double.is_floating());
        assert!(!ScalarType::Byte.is_floating());
        assert!(!ScalarType::Short.is_floating());
        assert!(!ScalarType::Int.is_floating());
    }
}
