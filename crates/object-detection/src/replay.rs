//! Replay of recorded detections
//!
//! The recording is a JSON array with one entry per frame, each entry being
//! the detector output for that frame in model order:
//!
//! ```json
//! [
//!   [{ "class": "person", "bbox": [100, 50, 100, 100], "score": 0.91 }],
//!   []
//! ]
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use camera_capture::VideoFrame;
use tracing::{debug, info};

use crate::{Detection, DetectionError, ObjectDetector};

/// Detector that loops over a recorded detection sequence
pub struct ReplayDetector {
    path: Option<PathBuf>,
    frames: Option<Vec<Vec<Detection>>>,
    cursor: usize,
}

impl ReplayDetector {
    /// Replay the recording at `path`; it is read during `load`
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            frames: None,
            cursor: 0,
        }
    }

    /// Replay an in-memory recording
    pub fn from_frames(frames: Vec<Vec<Detection>>) -> Self {
        Self {
            path: None,
            frames: Some(frames),
            cursor: 0,
        }
    }

    /// Parse a JSON recording
    pub fn parse(json: &str) -> Result<Vec<Vec<Detection>>, DetectionError> {
        serde_json::from_str(json).map_err(|e| DetectionError::ModelLoad(e.to_string()))
    }
}

#[async_trait]
impl ObjectDetector for ReplayDetector {
    async fn load(&mut self) -> Result<(), DetectionError> {
        if let Some(path) = &self.path {
            info!("Loading detection recording from {}", path.display());
            let json = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DetectionError::ModelLoad(format!("{}: {}", path.display(), e)))?;
            let frames = Self::parse(&json)?;
            info!("Recording loaded: {} frames", frames.len());
            self.frames = Some(frames);
        }
        self.cursor = 0;
        Ok(())
    }

    async fn detect(&mut self, frame: &VideoFrame) -> Result<Vec<Detection>, DetectionError> {
        let frames = self.frames.as_ref().ok_or(DetectionError::NotLoaded)?;
        if frames.is_empty() {
            return Ok(Vec::new());
        }

        let detections = frames[self.cursor % frames.len()].clone();
        self.cursor = (self.cursor + 1) % frames.len();
        debug!(
            "Replayed {} detections for frame {}",
            detections.len(),
            frame.sequence
        );
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDING: &str = r#"[
        [{"class": "person", "bbox": [100, 50, 100, 100], "score": 0.91},
         {"class": "chair", "bbox": [600, 300, 80, 120]}],
        []
    ]"#;

    #[test]
    fn test_parse_recording() {
        let frames = ReplayDetector::parse(RECORDING).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0][0].class, "person");
        assert_eq!(frames[0][0].score, Some(0.91));
        assert!(frames[1].is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ReplayDetector::parse("{\"not\": \"frames\"}"),
            Err(DetectionError::ModelLoad(_))
        ));
    }

    #[tokio::test]
    async fn test_replay_cycles() {
        let mut detector = ReplayDetector::from_frames(ReplayDetector::parse(RECORDING).unwrap());
        detector.load().await.unwrap();
        let frame = VideoFrame::blank(8, 8, 0);

        assert_eq!(detector.detect(&frame).await.unwrap().len(), 2);
        assert!(detector.detect(&frame).await.unwrap().is_empty());
        assert_eq!(detector.detect(&frame).await.unwrap()[0].class, "person");
    }

    #[tokio::test]
    async fn test_missing_recording_fails_load() {
        let mut detector = ReplayDetector::from_path("/nonexistent/recording.json");
        assert!(matches!(
            detector.load().await,
            Err(DetectionError::ModelLoad(_))
        ));
        let frame = VideoFrame::blank(8, 8, 0);
        assert!(matches!(
            detector.detect(&frame).await,
            Err(DetectionError::NotLoaded)
        ));
    }
}
