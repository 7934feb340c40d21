//! Render/Announce Loop
//!
//! Drives one detection cycle per display refresh while running:
//! - Overlay the primary detection with its estimated distance
//! - Speak it when the primary class changes
//! - Vibrate and sound an alarm when it is very close
//!
//! Start/stop requests from the operator and from voice commands arrive as
//! [`Control`] messages and are applied between cycles, so cycles never
//! overlap and the session needs no locking.

pub mod config;
pub mod control;
pub mod cycle;
pub mod runner;
pub mod session;
pub mod setup;

#[cfg(test)]
mod testing;

pub use config::AnnouncerConfig;
pub use control::{Control, ControlHandle, Origin};
pub use cycle::{announcement, CycleOutcome, Observation};
pub use runner::{Announcer, Outputs};
pub use session::Session;
pub use setup::prepare;

use camera_capture::CameraError;
use object_detection::DetectionError;
use thiserror::Error;

/// Announcer error types
#[derive(Error, Debug)]
pub enum AnnouncerError {
    #[error("Camera setup failed: {0}")]
    Camera(#[from] CameraError),

    #[error("Detection model failed to load: {0}")]
    Model(#[from] DetectionError),

    #[error("Announce loop is no longer running")]
    LoopClosed,
}
