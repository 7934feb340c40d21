//! RGBA raster overlay

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use object_detection::BoundingBox;
use tracing::debug;

use crate::{Overlay, OverlayConfig};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// What is currently on the overlay
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayShape {
    Rect(BoundingBox),
    Label { text: String, x: f64, y: f64 },
}

/// Overlay backed by a transparent RGBA canvas.
///
/// Boxes are rasterized; labels are kept as shapes since there is no font
/// renderer on this surface.
pub struct RasterOverlay {
    config: OverlayConfig,
    canvas: RgbaImage,
    shapes: Vec<OverlayShape>,
}

impl RasterOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            canvas: RgbaImage::new(0, 0),
            shapes: Vec::new(),
        }
    }

    /// Canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    /// Shapes drawn since the last clear
    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }

    /// Nothing drawn
    pub fn is_clear(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    fn color(&self) -> Rgba<u8> {
        let [r, g, b] = self.config.color;
        Rgba([r, g, b, 255])
    }
}

impl Overlay for RasterOverlay {
    fn resize(&mut self, width: u32, height: u32) {
        if self.canvas.dimensions() != (width, height) {
            debug!("Overlay resized to {}x{}", width, height);
            self.canvas = RgbaImage::new(width, height);
            self.shapes.clear();
        }
    }

    fn clear(&mut self) {
        for pixel in self.canvas.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        self.shapes.clear();
    }

    fn stroke_rect(&mut self, bbox: &BoundingBox) {
        self.shapes.push(OverlayShape::Rect(*bbox));

        let color = self.color();
        let (canvas_w, canvas_h) = self.canvas.dimensions();
        let x = bbox.x.round() as i64;
        let y = bbox.y.round() as i64;
        let w = bbox.width.round() as i64;
        let h = bbox.height.round() as i64;

        // Thick strokes are nested one-pixel outlines growing inward.
        // Edges past the canvas are pinned one pixel outside it so they stay invisible.
        for inset in 0..i64::from(self.config.line_width) {
            let inner_w = w.saturating_sub(inset.saturating_mul(2));
            let inner_h = h.saturating_sub(inset.saturating_mul(2));
            if inner_w < 1 || inner_h < 1 {
                break;
            }
            let left = clip(x.saturating_add(inset), canvas_w);
            let top = clip(y.saturating_add(inset), canvas_h);
            let right = clip(x.saturating_add(inset).saturating_add(inner_w - 1), canvas_w);
            let bottom = clip(y.saturating_add(inset).saturating_add(inner_h - 1), canvas_h);
            if left == right && (left < 0 || left >= i64::from(canvas_w)) {
                continue;
            }
            if top == bottom && (top < 0 || top >= i64::from(canvas_h)) {
                continue;
            }
            let rect = Rect::at(left as i32, top as i32)
                .of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
            draw_hollow_rect_mut(&mut self.canvas, rect, color);
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.shapes.push(OverlayShape::Label {
            text: text.to_string(),
            x,
            y,
        });
    }
}

fn clip(coord: i64, extent: u32) -> i64 {
    coord.clamp(-1, i64::from(extent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> RasterOverlay {
        let mut overlay = RasterOverlay::new(OverlayConfig::default());
        overlay.resize(50, 50);
        overlay
    }

    #[test]
    fn test_labelled_box() {
        let mut overlay = overlay();
        let bbox = BoundingBox::new(10.0, 10.0, 20.0, 20.0);
        overlay.draw_labelled_box(&bbox, "person (4.00m)");

        assert_eq!(
            overlay.shapes(),
            &[
                OverlayShape::Rect(bbox),
                OverlayShape::Label {
                    text: "person (4.00m)".to_string(),
                    x: 10.0,
                    y: 5.0,
                },
            ]
        );

        let red = Rgba([255, 0, 0, 255]);
        assert_eq!(*overlay.canvas().get_pixel(10, 10), red);
        assert_eq!(*overlay.canvas().get_pixel(11, 15), red);
        assert_eq!(*overlay.canvas().get_pixel(12, 15), TRANSPARENT);
        assert_eq!(*overlay.canvas().get_pixel(20, 20), TRANSPARENT);
    }

    #[test]
    fn test_clear_wipes_canvas() {
        let mut overlay = overlay();
        overlay.stroke_rect(&BoundingBox::new(1.0, 1.0, 10.0, 10.0));
        overlay.clear();

        assert!(overlay.is_clear());
        assert!(overlay.canvas().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_resize_follows_video() {
        let mut overlay = overlay();
        overlay.stroke_rect(&BoundingBox::new(1.0, 1.0, 10.0, 10.0));
        overlay.resize(1000, 600);
        assert_eq!(overlay.dimensions(), (1000, 600));
        assert!(overlay.is_clear());
    }

    #[test]
    fn test_degenerate_and_offscreen_boxes() {
        let mut overlay = overlay();
        overlay.stroke_rect(&BoundingBox::new(5.0, 5.0, 0.0, 0.0));
        overlay.stroke_rect(&BoundingBox::new(-30.0, -30.0, 200.0, 200.0));
        assert_eq!(overlay.shapes().len(), 2);
    }

    #[test]
    fn test_far_offscreen_boxes_are_ignored() {
        let mut overlay = overlay();
        overlay.stroke_rect(&BoundingBox::new(1.0e12, 1.0e12, 40.0, 40.0));
        overlay.stroke_rect(&BoundingBox::new(-1.0e12, 10.0, 40.0, 40.0));
        overlay.stroke_rect(&BoundingBox::new(f64::MAX, f64::MAX, f64::MAX, f64::MAX));
        assert!(overlay.canvas().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn test_partly_offscreen_box_keeps_visible_edges() {
        let mut overlay = overlay();
        overlay.stroke_rect(&BoundingBox::new(-10.0, 20.0, 30.0, 1.0e9));

        let red = Rgba([255, 0, 0, 255]);
        assert_eq!(*overlay.canvas().get_pixel(19, 20), red);
        assert_eq!(*overlay.canvas().get_pixel(5, 20), red);
        assert_eq!(*overlay.canvas().get_pixel(0, 30), TRANSPARENT);
        assert_eq!(*overlay.canvas().get_pixel(19, 49), red);
        assert_eq!(*overlay.canvas().get_pixel(5, 49), TRANSPARENT);
    }
}
