//! Zoom-factor bounds and wheel adjustment.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, WHEEL_DELTA_DIVISOR};

/// Inclusive zoom-factor range.
///
/// Callers must keep `min <= max`; the engine does not check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self { min: MIN_ZOOM_FACTOR, max: MAX_ZOOM_FACTOR }
    }
}

impl ZoomBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, factor: f64) -> bool {
        factor >= self.min && factor <= self.max
    }
}

/// Clamp `requested` into `bounds`, max first then min.
#[must_use]
pub fn clamp_zoom_factor(requested: f64, bounds: ZoomBounds) -> f64 {
    let mut factor = requested;
    if factor > bounds.max {
        factor = bounds.max;
    }
    if factor < bounds.min {
        factor = bounds.min;
    }
    factor
}

/// Apply a wheel delta to `current`.
///
/// Scrolling down (positive `delta_y`) zooms out. Returns `None` when the
/// clamped result equals `current`, so callers can skip the redraw.
#[must_use]
pub fn zoom_after_wheel(current: f64, delta_y: f64, bounds: ZoomBounds) -> Option<f64> {
    if !delta_y.is_finite() {
        return None;
    }
    let next = clamp_zoom_factor(current - (delta_y / WHEEL_DELTA_DIVISOR), bounds);
    #[allow(clippy::float_cmp)]
    let unchanged = next == current;
    (!unchanged).then_some(next)
}
