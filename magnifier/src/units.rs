//! Normalized/pixel unit conversions.
//!
//! Lens sizes and zoom centers can be given either as fractions of the image
//! dimensions or in raw image pixels. Every rectangle calculation works in
//! pixels, so values pass through [`to_pixel_size`] / [`to_pixel_point`] first,
//! and [`to_unit_point`] converts the live focus back for reporting.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{ImageFrame, Point, Size};

/// Error returned when parsing a [`Unit`] or [`crate::state::ZoomMode`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseNameError {
    /// What was being parsed, e.g. `"unit"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// How a [`Size`] or [`Point`] is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    /// Fractions of the image width/height, nominally 0..=1.
    #[default]
    Normalized,
    /// Natural image pixels, used as-is.
    Pixel,
}

impl Unit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normalized => "NORMALIZED",
            Self::Pixel => "PIXEL",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NORMALIZED" => Ok(Self::Normalized),
            "PIXEL" => Ok(Self::Pixel),
            _ => Err(ParseNameError { kind: "unit", value: s.to_owned() }),
        }
    }
}

/// Convert `size` to pixels.
///
/// Returns `None` for a normalized size against a degenerate frame.
#[must_use]
pub fn to_pixel_size(size: Size, unit: Unit, frame: ImageFrame) -> Option<Size> {
    match unit {
        Unit::Pixel => Some(size),
        Unit::Normalized if frame.is_degenerate() => None,
        Unit::Normalized => Some(Size::new(size.width * frame.width, size.height * frame.height)),
    }
}

/// Convert `point` to pixels. Absent stays absent.
#[must_use]
pub fn to_pixel_point(point: Option<Point>, unit: Unit, frame: ImageFrame) -> Option<Point> {
    let point = point?;
    match unit {
        Unit::Pixel => Some(point),
        Unit::Normalized if frame.is_degenerate() => None,
        Unit::Normalized => Some(Point::new(point.x * frame.width, point.y * frame.height)),
    }
}

/// Express a pixel-space point in `unit`. Exact inverse of [`to_pixel_point`].
#[must_use]
pub fn to_unit_point(pixel_point: Option<Point>, unit: Unit, frame: ImageFrame) -> Option<Point> {
    let point = pixel_point?;
    match unit {
        Unit::Pixel => Some(point),
        Unit::Normalized if frame.is_degenerate() => None,
        Unit::Normalized => Some(Point::new(point.x / frame.width, point.y / frame.height)),
    }
}
