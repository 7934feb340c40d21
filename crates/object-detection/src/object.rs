//! Detected objects

use serde::{Deserialize, Serialize};

/// Bounding box in frame pixels, serialized as `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center in pixels
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}

/// Detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label, e.g. "person"
    pub class: String,

    /// Bounding box [x, y, width, height]
    pub bbox: BoundingBox,

    /// Detection confidence, when the model reports one
    #[serde(default)]
    pub score: Option<f32>,
}

impl Detection {
    pub fn new(class: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            class: class.into(),
            bbox,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

/// The detection acted upon this frame: whatever the model returned first
pub fn primary(detections: &[Detection]) -> Option<&Detection> {
    detections.first()
}

/// Keep detections scoring at least `min_score`, preserving order.
/// Unscored detections are kept.
pub fn retain_confident(detections: &mut Vec<Detection>, min_score: f32) {
    detections.retain(|d| d.score.map_or(true, |s| s >= min_score));
}
