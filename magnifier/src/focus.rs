//! View-to-image pointer mapping.
//!
//! A pointer event arrives in the host's client coordinate space. The canvas
//! occupies some on-screen box that may be CSS-scaled relative to the image's
//! natural size, and the surface itself may carry a rotation + uniform scale
//! transform. [`resolve_focus`] undoes both and yields an image-pixel point.
//!
//! For a rotated surface the reported bounding box is the axis-aligned hull of
//! the rotated element, so its size says nothing useful about the element.
//! The pointer is instead expressed in polar form around the box center,
//! rotated back by the surface angle, and re-anchored around the center of the
//! element's untransformed layout size scaled by the surface scale.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use serde::{Deserialize, Serialize};

use crate::consts::TRANSFORM_SCALE_PRECISION;
use crate::geometry::{ImageFrame, Point, Size};

/// The on-screen box a surface occupies, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Untransformed layout width of the surface (CSS width before any transform).
    pub layout_width: f64,
    /// Untransformed layout height of the surface.
    pub layout_height: f64,
}

impl BoundingBox {
    /// A box whose layout size equals its on-screen size (no surface transform).
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height, layout_width: width, layout_height: height }
    }

    /// Override the untransformed layout size.
    #[must_use]
    pub fn with_layout(mut self, layout: Size) -> Self {
        self.layout_width = layout.width;
        self.layout_height = layout.height;
        self
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn layout_size(&self) -> Size {
        Size::new(self.layout_width, self.layout_height)
    }
}

/// Linear part `[a c; b d]` of a 2D affine transform applied to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for DisplayTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DisplayTransform {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0 };

    /// Rotation by `theta` radians combined with uniform `scale`.
    #[must_use]
    pub fn from_rotation_scale(theta: f64, scale: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { a: scale * cos, b: scale * sin, c: -scale * sin, d: scale * cos }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Rotation angle in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Uniform scale, rounded to two decimals.
    #[must_use]
    pub fn scale(&self) -> f64 {
        (self.a.hypot(self.b) * TRANSFORM_SCALE_PRECISION).round() / TRANSFORM_SCALE_PRECISION
    }
}

/// Map a client-space pointer position to image-pixel space.
///
/// Returns `None` when the surface has no usable extent, the frame is
/// degenerate, or any input is non-finite.
#[must_use]
pub fn resolve_focus(
    client: Point,
    bounds: &BoundingBox,
    transform: &DisplayTransform,
    frame: ImageFrame,
) -> Option<Point> {
    if frame.is_degenerate() {
        return None;
    }

    let local = Point::new(client.x - bounds.left, client.y - bounds.top);
    let (element, element_size) = if transform.is_identity() {
        (local, bounds.size())
    } else {
        untransform(local, bounds, transform)
    };

    if !(element_size.width.is_finite() && element_size.height.is_finite())
        || element_size.width <= 0.0
        || element_size.height <= 0.0
    {
        return None;
    }

    let view_to_model_x = frame.width / element_size.width;
    let view_to_model_y = frame.height / element_size.height;
    let resolved = Point::new(element.x * view_to_model_x, element.y * view_to_model_y);
    resolved.is_finite().then_some(resolved)
}

/// Recover the pre-transform element position and size for a transformed surface.
fn untransform(local: Point, bounds: &BoundingBox, transform: &DisplayTransform) -> (Point, Size) {
    let scale = transform.scale();
    let size = Size::new(bounds.layout_width * scale, bounds.layout_height * scale);
    let theta = transform.rotation();
    if theta == 0.0 {
        return (local, size);
    }

    let dx = local.x - (bounds.width / 2.0);
    let dy = local.y - (bounds.height / 2.0);
    let distance = dx.hypot(dy);
    let angle = dy.atan2(dx) - theta;
    let element = Point::new(
        (size.width / 2.0) + (distance * angle.cos()),
        (size.height / 2.0) + (distance * angle.sin()),
    );
    (element, size)
}
