//! Rendering: turns the current rectangles into a draw plan for a 2D surface.
//!
//! The engine never touches a drawing context. [`plan_frame`] returns the
//! ordered list of [`DrawOp`]s a host replays on its own surface (canvas 2D,
//! an image buffer, a test recorder). Image draws always read from the loaded
//! image and write to the canvas, both in image-pixel space.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LENS_BORDER_COLOR, LENS_BORDER_WIDTH_PX};
use crate::geometry::{ImageFrame, Rect};
use crate::rects::ZoomRects;

/// Lens outline style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderStyle {
    /// Stroke width in canvas pixels.
    pub width: f64,
    /// CSS color string, also used for the opaque lens backing.
    pub color: String,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self { width: LENS_BORDER_WIDTH_PX, color: LENS_BORDER_COLOR.to_owned() }
    }
}

/// One drawing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Clear `rect` to transparent.
    Clear { rect: Rect },
    /// Draw the `src` region of the image stretched into `dst`.
    DrawImage { src: Rect, dst: Rect },
    /// Fill `rect` with `color`.
    FillRect { rect: Rect, color: String },
    /// Stroke the outline of `rect`.
    StrokeRect { rect: Rect, line_width: f64, color: String },
}

/// Build the draw plan for one frame.
///
/// Without a frame the plan is empty; without rectangles only the base image
/// is drawn.
#[must_use]
pub fn plan_frame(frame: Option<ImageFrame>, rects: Option<ZoomRects>, border: &BorderStyle) -> Vec<DrawOp> {
    let Some(frame) = frame else {
        return Vec::new();
    };
    let canvas = frame.bounds();

    // Layer 1: clear and draw the unzoomed image.
    let mut ops = vec![DrawOp::Clear { rect: canvas }, DrawOp::DrawImage { src: canvas, dst: canvas }];

    // Layer 2: zoom overlay.
    match rects {
        Some(ZoomRects::Lens { zoom_rect, clip_rect }) => push_lens(&mut ops, zoom_rect, clip_rect, border),
        Some(ZoomRects::Cover { cover_rect }) => ops.push(DrawOp::DrawImage { src: cover_rect, dst: canvas }),
        None => {}
    }
    ops
}

fn push_lens(ops: &mut Vec<DrawOp>, zoom_rect: Rect, clip_rect: Rect, border: &BorderStyle) {
    ops.push(DrawOp::FillRect { rect: zoom_rect, color: border.color.clone() });
    ops.push(DrawOp::DrawImage { src: clip_rect, dst: zoom_rect });
    ops.push(DrawOp::StrokeRect { rect: zoom_rect, line_width: border.width, color: border.color.clone() });
}
