//! Immutable engine snapshot and the pure `compute_rects` entry point.
//!
//! [`EngineState`] holds the caller's parameters exactly as bound, in their
//! own units. [`EngineState::resolve`] converts everything to pixel space once
//! the image frame is known; before that no rectangle can be derived and every
//! entry point returns `None`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LENS_HEIGHT, DEFAULT_LENS_WIDTH, DEFAULT_ZOOM_FACTOR};
use crate::geometry::{ImageFrame, Point, Size};
use crate::rects::{self, ZoomRects};
use crate::units::{self, ParseNameError, Unit};
use crate::zoom::{self, ZoomBounds};

/// Relative tolerance when comparing a reported center against the bound one.
const CENTER_CHANGE_EPSILON: f64 = 1e-12;

/// Which rectangle derivation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoomMode {
    /// A bordered lens over the focus point.
    Lens,
    /// The whole canvas zoomed around the focus point.
    #[default]
    Cover,
}

impl ZoomMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lens => "LENS",
            Self::Cover => "COVER",
        }
    }
}

impl fmt::Display for ZoomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoomMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LENS" => Ok(Self::Lens),
            "COVER" => Ok(Self::Cover),
            _ => Err(ParseNameError { kind: "zoom mode", value: s.to_owned() }),
        }
    }
}

/// Caller-owned parameters, as bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineState {
    /// Natural image size; `None` until the image has loaded.
    pub frame: Option<ImageFrame>,
    pub lens_size: Size,
    pub lens_size_unit: Unit,
    /// Focus point; `None` means no active focus.
    pub zoom_center: Option<Point>,
    pub zoom_center_unit: Unit,
    /// Requested factor; clamped into `zoom_bounds` on resolve.
    pub zoom_factor: f64,
    pub zoom_bounds: ZoomBounds,
    pub zoom_mode: ZoomMode,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            frame: None,
            lens_size: Size::new(DEFAULT_LENS_WIDTH, DEFAULT_LENS_HEIGHT),
            lens_size_unit: Unit::Normalized,
            zoom_center: None,
            zoom_center_unit: Unit::Normalized,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            zoom_bounds: ZoomBounds::default(),
            zoom_mode: ZoomMode::default(),
        }
    }
}

/// Everything in pixel space, ready for rectangle derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedState {
    pub frame: ImageFrame,
    pub lens_size: Size,
    pub center: Option<Point>,
    pub zoom_factor: f64,
    pub zoom_mode: ZoomMode,
}

impl ResolvedState {
    /// Rectangles for the current mode, or `None` without a focus point.
    #[must_use]
    pub fn rects(&self) -> Option<ZoomRects> {
        let center = self.center?;
        Some(match self.zoom_mode {
            ZoomMode::Lens => rects::lens_rects(center, self.lens_size, self.zoom_factor, self.frame),
            ZoomMode::Cover => rects::cover_rects(center, self.zoom_factor, self.frame),
        })
    }
}

/// A focus point expressed in the bound unit, and whether it differs from the bound value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterObservation {
    pub value: Option<Point>,
    pub changed: bool,
}

impl EngineState {
    /// Default parameters over a loaded frame.
    #[must_use]
    pub fn new(frame: ImageFrame) -> Self {
        Self { frame: Some(frame), ..Self::default() }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn clamped_zoom_factor(&self) -> f64 {
        zoom::clamp_zoom_factor(self.zoom_factor, self.zoom_bounds)
    }

    /// Lens size in pixels, once it can be known.
    #[must_use]
    pub fn pixel_lens_size(&self) -> Option<Size> {
        units::to_pixel_size(self.lens_size, self.lens_size_unit, self.frame?)
    }

    /// Bound zoom center in pixels. Absent center, unknown frame and
    /// normalized-over-degenerate-frame all yield `None`.
    #[must_use]
    pub fn pixel_center(&self) -> Option<Point> {
        units::to_pixel_point(self.zoom_center, self.zoom_center_unit, self.frame?)
    }

    /// Convert to pixel space. `None` before the frame is known or when the
    /// lens size cannot be expressed in pixels.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedState> {
        let frame = self.frame?;
        Some(ResolvedState {
            frame,
            lens_size: self.pixel_lens_size()?,
            center: self.pixel_center(),
            zoom_factor: self.clamped_zoom_factor(),
            zoom_mode: self.zoom_mode,
        })
    }

    /// Report `pixel_center` in the bound unit.
    ///
    /// Returns `None` when the value cannot be expressed yet (normalized unit
    /// before the frame is known).
    #[must_use]
    pub fn observe_center(&self, pixel_center: Option<Point>) -> Option<CenterObservation> {
        let Some(center) = pixel_center else {
            return Some(CenterObservation { value: None, changed: self.zoom_center.is_some() });
        };
        let value = match self.zoom_center_unit {
            Unit::Pixel => center,
            Unit::Normalized => units::to_unit_point(Some(center), Unit::Normalized, self.frame?)?,
        };
        let changed = self
            .zoom_center
            .is_none_or(|bound| !same_coordinate(value.x, bound.x) || !same_coordinate(value.y, bound.y));
        Some(CenterObservation { value: Some(value), changed })
    }
}

fn same_coordinate(a: f64, b: f64) -> bool {
    (a - b).abs() <= CENTER_CHANGE_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Rectangles for `state`, or `None` before the frame is known or without focus.
#[must_use]
pub fn compute_rects(state: &EngineState) -> Option<ZoomRects> {
    state.resolve()?.rects()
}
