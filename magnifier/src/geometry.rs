//! Plain value types shared by every engine module.
//!
//! All coordinates are `f64`. Image-space values are in natural image pixels
//! unless a companion [`crate::units::Unit`] says otherwise. "No focus" is
//! expressed as `Option<Point>::None` rather than a sentinel point.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Divide both sides by `factor`.
    #[must_use]
    pub fn scaled_down(self, factor: f64) -> Self {
        Self { width: self.width / factor, height: self.height / factor }
    }
}

/// Natural pixel dimensions of the loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageFrame {
    pub width: f64,
    pub height: f64,
}

impl ImageFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side cannot be used as a divisor or multiplier.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The full canvas as a rectangle at the origin.
    #[must_use]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle of `size` whose center sits at `center`.
    #[must_use]
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self {
            x: center.x - (size.width / 2.0),
            y: center.y - (size.height / 2.0),
            w: size.width,
            h: size.height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub fn area(self) -> f64 {
        self.w * self.h
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + (self.w / 2.0), self.y + (self.h / 2.0))
    }
}
