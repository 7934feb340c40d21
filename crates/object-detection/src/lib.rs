//! Object Detection
//!
//! Contract for the pretrained detector the announcer consumes:
//! - One-time asynchronous model load
//! - Per-frame detection returning labelled pixel bounding boxes
//! - The first entry of a result list is the primary detection
//!
//! Model inference itself lives outside this workspace. The detectors here
//! replay recorded or scripted results.

pub mod object;
pub mod replay;
pub mod scripted;

pub use object::{primary, retain_confident, BoundingBox, Detection};
pub use replay::ReplayDetector;
pub use scripted::ScriptedDetector;

use async_trait::async_trait;
use camera_capture::VideoFrame;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Detection error types
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Model loading failed: {0}")]
    ModelLoad(String),

    #[error("Model not loaded")]
    NotLoaded,

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Detection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Recorded detections to replay, one JSON array per frame
    pub replay_path: Option<String>,

    /// Drop detections scoring below this before picking the primary one.
    /// `None` keeps the upstream list untouched.
    pub min_score: Option<f32>,
}

/// Pretrained object detector.
///
/// `load` must complete before `detect` is called. Results are ordered the
/// way the underlying model returns them.
#[async_trait]
pub trait ObjectDetector: Send {
    /// One-time model initialization
    async fn load(&mut self) -> Result<(), DetectionError>;

    /// Detect objects in a frame
    async fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<Detection>, DetectionError>;
}

#[async_trait]
impl<T: ObjectDetector + ?Sized> ObjectDetector for Box<T> {
    async fn load(&mut self) -> Result<(), DetectionError> {
        (**self).load().await
    }

    async fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<Detection>, DetectionError> {
        (**self).detect(frame).await
    }
}
