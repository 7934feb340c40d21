//! Distance estimation from bounding-box width
//!
//! A hand-calibrated inverse-width heuristic: an object whose box is
//! `reference_width_px` wide is assumed to be `known_distance_m` away, and
//! distance scales with the inverse of the box width. No camera intrinsics are
//! involved, so accuracy depends on the scene and the object class.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GuidanceError;

/// Box width (pixels) observed at the calibration distance
pub const REFERENCE_WIDTH_PX: f64 = 200.0;

/// Calibration distance (meters)
pub const KNOWN_DISTANCE_M: f64 = 2.0;

/// Estimated distance in meters, rounded to two decimal places
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance(f64);

impl Distance {
    /// Round a raw meter value to centimeters
    pub fn from_meters(meters: f64) -> Self {
        Self((meters * 100.0).round() / 100.0)
    }

    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Strictly closer than `threshold_m`
    pub fn is_within(&self, threshold_m: f64) -> bool {
        self.0 < threshold_m
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// `(200 / width) * 2`, rounded to two decimals.
///
/// Unguarded: a zero width yields an infinite distance. Use
/// [`DistanceEstimator::estimate`] when the width is not known to be positive.
pub fn estimate_distance(width_px: f64) -> Distance {
    Distance::from_meters((REFERENCE_WIDTH_PX / width_px) * KNOWN_DISTANCE_M)
}

/// Calibrated distance estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceEstimator {
    /// Box width (pixels) at the calibration distance
    pub reference_width_px: f64,
    /// Calibration distance (meters)
    pub known_distance_m: f64,
}

impl Default for DistanceEstimator {
    fn default() -> Self {
        Self {
            reference_width_px: REFERENCE_WIDTH_PX,
            known_distance_m: KNOWN_DISTANCE_M,
        }
    }
}

impl DistanceEstimator {
    /// Estimate distance for a box `width_px` wide
    pub fn estimate(&self, width_px: f64) -> Result<Distance, GuidanceError> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return Err(GuidanceError::NonPositiveWidth(width_px));
        }
        Ok(Distance::from_meters(
            (self.reference_width_px / width_px) * self.known_distance_m,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_calibration_points() {
        assert_eq!(estimate_distance(100.0).meters(), 4.0);
        assert_eq!(estimate_distance(150.0).meters(), 2.67);
        assert_eq!(estimate_distance(200.0).meters(), 2.0);
        assert_eq!(estimate_distance(250.0).meters(), 1.6);
        assert_eq!(estimate_distance(500.0).meters(), 0.8);
    }

    #[test]
    fn test_display_keeps_two_decimals() {
        assert_eq!(estimate_distance(100.0).to_string(), "4.00");
        assert_eq!(estimate_distance(150.0).to_string(), "2.67");
        assert_eq!(estimate_distance(500.0).to_string(), "0.80");
    }

    #[test]
    fn test_threshold_uses_rounded_value() {
        // 400.5 px is 0.9988 m raw, which rounds to 1.00 and is not within 1 m
        assert!(!estimate_distance(400.5).is_within(1.0));
        assert!(estimate_distance(500.0).is_within(1.0));
        assert!(!estimate_distance(250.0).is_within(1.0));
    }

    #[test]
    fn test_zero_width_is_unguarded() {
        assert!(estimate_distance(0.0).meters().is_infinite());
    }

    #[test]
    fn test_estimator_rejects_degenerate_widths() {
        let estimator = DistanceEstimator::default();
        assert_eq!(
            estimator.estimate(0.0),
            Err(GuidanceError::NonPositiveWidth(0.0))
        );
        assert!(estimator.estimate(-3.0).is_err());
        assert!(estimator.estimate(f64::NAN).is_err());
        assert_eq!(estimator.estimate(100.0).unwrap().meters(), 4.0);
    }

    #[test]
    fn test_custom_calibration() {
        let estimator = DistanceEstimator {
            reference_width_px: 300.0,
            known_distance_m: 1.5,
        };
        assert_eq!(estimator.estimate(150.0).unwrap().meters(), 3.0);
    }

    proptest! {
        #[test]
        fn prop_matches_formula(width in 0.01f64..10_000.0) {
            let expected = ((200.0 / width) * 2.0 * 100.0).round() / 100.0;
            prop_assert_eq!(estimate_distance(width).meters(), expected);
        }

        #[test]
        fn prop_within_half_centimeter(width in 1.0f64..10_000.0) {
            let raw = (200.0 / width) * 2.0;
            prop_assert!((estimate_distance(width).meters() - raw).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_wider_is_not_farther(a in 1.0f64..5_000.0, delta in 0.0f64..5_000.0) {
            prop_assert!(estimate_distance(a + delta) <= estimate_distance(a));
        }

        #[test]
        fn prop_estimator_defaults_match_free_function(width in 0.01f64..10_000.0) {
            let estimator = DistanceEstimator::default();
            prop_assert_eq!(estimator.estimate(width).unwrap(), estimate_distance(width));
        }
    }
}
