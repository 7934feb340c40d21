//! Guidance cues
//!
//! Turns a detection's bounding box into the two facts the user hears:
//! - Approximate distance from the box width (calibrated heuristic)
//! - Direction relative to the frame center

pub mod direction;
pub mod distance;

pub use direction::{direction_of, Direction};
pub use distance::{estimate_distance, Distance, DistanceEstimator};

use thiserror::Error;

/// Guidance error types
#[derive(Error, Debug, PartialEq)]
pub enum GuidanceError {
    #[error("Bounding box width must be positive, got {0}")]
    NonPositiveWidth(f64),
}
