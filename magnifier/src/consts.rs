//! Shared numeric constants for the magnifier crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Default lower bound for the zoom factor.
pub const MIN_ZOOM_FACTOR: f64 = 1.2;

/// Default upper bound for the zoom factor.
pub const MAX_ZOOM_FACTOR: f64 = 3.0;

/// Zoom factor used until the host sets one.
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// Wheel delta units per 1.0 of zoom factor.
pub const WHEEL_DELTA_DIVISOR: f64 = 1000.0;

// ── Lens ────────────────────────────────────────────────────────

/// Default lens width as a fraction of the image width.
pub const DEFAULT_LENS_WIDTH: f64 = 0.5;

/// Default lens height as a fraction of the image height.
pub const DEFAULT_LENS_HEIGHT: f64 = 0.5;

/// Lens border width in canvas pixels.
pub const LENS_BORDER_WIDTH_PX: f64 = 5.0;

/// Lens border color.
pub const LENS_BORDER_COLOR: &str = "#000000";

// ── Focus ───────────────────────────────────────────────────────

/// Decimal places kept when extracting the uniform scale of a display transform.
pub const TRANSFORM_SCALE_PRECISION: f64 = 100.0;
