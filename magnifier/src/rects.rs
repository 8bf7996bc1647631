//! Lens and cover rectangle derivation.
//!
//! All functions work in image-pixel space against a canvas the size of the
//! image. Clamping only moves a rectangle, it never resizes it.

#[cfg(test)]
#[path = "rects_test.rs"]
mod rects_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{ImageFrame, Point, Rect, Size};

/// Rectangles produced for one frame, depending on zoom mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoomRects {
    /// `clip_rect` of the image is stretched into `zoom_rect`, which is also the lens outline.
    Lens { zoom_rect: Rect, clip_rect: Rect },
    /// `cover_rect` of the image is stretched over the whole canvas.
    Cover { cover_rect: Rect },
}

/// Shift `(x, y, w, h)` so it lies inside a `canvas_w` x `canvas_h` canvas.
///
/// The lower-bound checks are `<=` on x and `<` on y, the upper-bound checks
/// `>=` on both. The upper bound wins, so a rectangle wider than the canvas
/// ends up with a negative x.
#[must_use]
pub fn clamp_rect(x: f64, y: f64, w: f64, h: f64, canvas_w: f64, canvas_h: f64) -> Rect {
    let mut x = x;
    let mut y = y;
    if x <= 0.0 {
        x = 0.0;
    }
    if x + w >= canvas_w {
        x = canvas_w - w;
    }
    if y < 0.0 {
        y = 0.0;
    }
    if y + h >= canvas_h {
        y = canvas_h - h;
    }
    Rect { x, y, w, h }
}

fn clamp_to_frame(rect: Rect, frame: ImageFrame) -> Rect {
    clamp_rect(rect.x, rect.y, rect.w, rect.h, frame.width, frame.height)
}

/// Destination of the zoomed crop and outline of the lens.
#[must_use]
pub fn zoom_rect(center: Point, lens_size: Size, frame: ImageFrame) -> Rect {
    clamp_to_frame(Rect::centered_at(center, lens_size), frame)
}

/// Source crop for lens mode: the lens area shrunk by `zoom_factor`.
#[must_use]
pub fn clip_rect(center: Point, lens_size: Size, zoom_factor: f64, frame: ImageFrame) -> Rect {
    clamp_to_frame(Rect::centered_at(center, lens_size.scaled_down(zoom_factor)), frame)
}

/// Source crop for cover mode.
///
/// The crop origin is `center - center / zoom_factor`, which keeps `center` at
/// the same relative position in the stretched crop as in the full canvas.
#[must_use]
pub fn cover_rect(center: Point, zoom_factor: f64, frame: ImageFrame) -> Rect {
    let size = frame.size().scaled_down(zoom_factor);
    let x = center.x - (center.x / zoom_factor);
    let y = center.y - (center.y / zoom_factor);
    clamp_rect(x, y, size.width, size.height, frame.width, frame.height)
}

/// Lens-mode rectangle pair.
#[must_use]
pub fn lens_rects(center: Point, lens_size: Size, zoom_factor: f64, frame: ImageFrame) -> ZoomRects {
    ZoomRects::Lens {
        zoom_rect: zoom_rect(center, lens_size, frame),
        clip_rect: clip_rect(center, lens_size, zoom_factor, frame),
    }
}

/// Cover-mode rectangle.
#[must_use]
pub fn cover_rects(center: Point, zoom_factor: f64, frame: ImageFrame) -> ZoomRects {
    ZoomRects::Cover { cover_rect: cover_rect(center, zoom_factor, frame) }
}
