//! Camera Capture Library
//!
//! Acquires the live video feed the announcer looks at.
//! Supports:
//! - Rear-facing ("environment") camera requests with no front fallback
//! - Decoded RGB frames at the device's native resolution
//! - A synthetic source for console runs and tests

pub mod frame;
pub mod synthetic;

pub use frame::VideoFrame;
pub use synthetic::SyntheticCamera;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Camera error types
#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Camera access denied")]
    PermissionDenied,

    #[error("Camera not available: {0}")]
    Unavailable(String),

    #[error("Camera not opened")]
    NotOpened,

    #[error("Streaming error: {0}")]
    Stream(String),
}

/// Which way the requested camera faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Back of the device, pointed at the surroundings
    #[default]
    Rear,
    /// Selfie camera
    Front,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Required facing; the request fails rather than falling back
    pub facing: Facing,
    /// Frame width produced by the synthetic source
    pub width: u32,
    /// Frame height produced by the synthetic source
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            facing: Facing::Rear,
            width: 1280,
            height: 720,
        }
    }
}

/// Platform media-capture contract.
///
/// `open` is called once per session. A failure is terminal for the session:
/// the caller reports it and never starts detection. There is no retry.
#[async_trait]
pub trait CameraSource: Send {
    /// Request a stream matching `config.facing` and bind it as the live feed
    async fn open(&mut self, config: &CameraConfig) -> Result<(), CameraError>;

    /// Current frame of the live feed
    async fn next_frame(&mut self) -> Result<VideoFrame, CameraError>;
}

#[async_trait]
impl<T: CameraSource + ?Sized> CameraSource for Box<T> {
    async fn open(&mut self, config: &CameraConfig) -> Result<(), CameraError> {
        (**self).open(config).await
    }

    async fn next_frame(&mut self) -> Result<VideoFrame, CameraError> {
        (**self).next_frame().await
    }
}
