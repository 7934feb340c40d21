//! Scripted detector for tests and demos

use std::collections::VecDeque;

use async_trait::async_trait;
use camera_capture::VideoFrame;
use tracing::debug;

use crate::{Detection, DetectionError, ObjectDetector};

/// Detector returning a queued result per call.
///
/// Once the script runs out every frame comes back empty.
#[derive(Debug, Default)]
pub struct ScriptedDetector {
    script: VecDeque<Result<Vec<Detection>, String>>,
    load_failure: Option<String>,
    loaded: bool,
    calls: usize,
}

impl ScriptedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful frame result
    pub fn then(mut self, detections: Vec<Detection>) -> Self {
        self.script.push_back(Ok(detections));
        self
    }

    /// Queue a failing frame
    pub fn then_fail(mut self, message: impl Into<String>) -> Self {
        self.script.push_back(Err(message.into()));
        self
    }

    /// Make `load` fail with `message`
    pub fn failing_load(mut self, message: impl Into<String>) -> Self {
        self.load_failure = Some(message.into());
        self
    }

    /// Number of `detect` calls so far
    pub fn calls(&self) -> usize {
        self.calls
    }
}

#[async_trait]
impl ObjectDetector for ScriptedDetector {
    async fn load(&mut self) -> Result<(), DetectionError> {
        if let Some(message) = &self.load_failure {
            return Err(DetectionError::ModelLoad(message.clone()));
        }
        self.loaded = true;
        Ok(())
    }

    async fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<Detection>, DetectionError> {
        if !self.loaded {
            return Err(DetectionError::NotLoaded);
        }
        self.calls += 1;
        debug!("Scripted detect for frame {}", frame.sequence);

        match self.script.pop_front() {
            Some(Ok(detections)) => Ok(detections),
            Some(Err(message)) => Err(DetectionError::Inference(message)),
            None => Ok(Vec::new()),
        }
    }
}
