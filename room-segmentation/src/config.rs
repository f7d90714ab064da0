use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentationError};

/// Tolerances for one segmentation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Coordinate merge tolerance and quantization grid size.
    #[serde(default = "default_snap_eps")]
    pub snap_eps: f64,
    /// Faces smaller than this (coordinate units squared) are slivers.
    #[serde(default = "default_min_area")]
    pub min_area: f64,
}

fn default_snap_eps() -> f64 {
    1e-3
}

fn default_min_area() -> f64 {
    1.0
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        SegmentationConfig {
            snap_eps: default_snap_eps(),
            min_area: default_min_area(),
        }
    }
}

impl SegmentationConfig {
    pub fn new(snap_eps: f64, min_area: f64) -> Self {
        SegmentationConfig { snap_eps, min_area }
    }

    /// `snap_eps` is used as a divisor, so it must be positive with a
    /// finite reciprocal.
    pub fn validate(&self) -> Result<()> {
        if !self.snap_eps.is_finite()
            || self.snap_eps <= 0.0
            || !self.snap_eps.recip().is_finite()
        {
            return Err(SegmentationError::InvalidSnapEpsilon(self.snap_eps));
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(SegmentationError::InvalidMinArea(self.min_area));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SegmentationConfig::default();
        assert_eq!(config.snap_eps, 1e-3);
        assert_eq!(config.min_area, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SegmentationConfig = serde_json::from_str(r#"{"min_area": 4.5}"#).unwrap();
        assert_eq!(config.snap_eps, 1e-3);
        assert_eq!(config.min_area, 4.5);
    }

    #[test]
    fn test_non_positive_snap_eps_is_rejected() {
        for eps in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let result = SegmentationConfig::new(eps, 1.0).validate();
            assert!(
                matches!(result, Err(SegmentationError::InvalidSnapEpsilon(_))),
                "snap_eps {} should be rejected",
                eps
            );
        }
    }

    #[test]
    fn test_subnormal_snap_eps_is_rejected() {
        let result = SegmentationConfig::new(1e-320, 1.0).validate();
        assert!(matches!(result, Err(SegmentationError::InvalidSnapEpsilon(_))));
        assert!(SegmentationConfig::new(1e-300, 1.0).validate().is_ok());
    }

    #[test]
    fn test_negative_min_area_is_rejected() {
        let result = SegmentationConfig::new(1e-3, -1.0).validate();
        assert!(matches!(result, Err(SegmentationError::InvalidMinArea(_))));
        assert!(SegmentationConfig::new(1e-3, 0.0).validate().is_ok());
    }
}
