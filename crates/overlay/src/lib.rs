//! Detection Overlay
//!
//! The drawing surface laid over the live video: it is resized to the
//! video's native resolution each cycle, cleared, and shows at most one
//! labelled box for the primary detection.

mod raster;

pub use raster::{OverlayShape, RasterOverlay};

use object_detection::BoundingBox;
use serde::{Deserialize, Serialize};

/// Label baseline sits this many pixels above the box
pub const LABEL_OFFSET_PX: f64 = 5.0;

/// Overlay styling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Stroke and label color (RGB)
    pub color: [u8; 3],
    /// Box stroke width (pixels)
    pub line_width: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            line_width: 2,
        }
    }
}

/// Drawing surface contract
pub trait Overlay: Send {
    /// Match the surface to the video's native resolution
    fn resize(&mut self, width: u32, height: u32);

    /// Remove everything drawn so far
    fn clear(&mut self);

    /// Outline a bounding box
    fn stroke_rect(&mut self, bbox: &BoundingBox);

    /// Draw label text with its baseline at (x, y)
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Box plus its label just above the top-left corner
    fn draw_labelled_box(&mut self, bbox: &BoundingBox, label: &str) {
        self.stroke_rect(bbox);
        self.fill_text(label, bbox.x, bbox.y - LABEL_OFFSET_PX);
    }
}

impl<T: Overlay + ?Sized> Overlay for Box<T> {
    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn stroke_rect(&mut self, bbox: &BoundingBox) {
        (**self).stroke_rect(bbox)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        (**self).fill_text(text, x, y)
    }
}
