//! JSON-lines event scripts standing in for a UI host.
//!
//! Each non-blank line is one [`ScriptEvent`], tagged by its `"event"` field:
//!
//! ```text
//! {"event":"image_loaded","width":800,"height":600}
//! {"event":"pointer_move","x":200,"y":150,"bounds":{"left":0,"top":0,"width":400,"height":300}}
//! {"event":"wheel","delta_y":-120}
//! ```
//!
//! Lines starting with `#` are comments.

use magnifier::engine::{Action, MagnifierCore};
use magnifier::focus::{BoundingBox, DisplayTransform};
use magnifier::geometry::{Point, Size};
use magnifier::render::BorderStyle;
use magnifier::state::ZoomMode;
use magnifier::units::Unit;
use magnifier::zoom::ZoomBounds;
use serde::{Deserialize, Serialize};

/// On-screen surface box as written in a script.
///
/// The layout size defaults to the on-screen size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub layout_width: Option<f64>,
    #[serde(default)]
    pub layout_height: Option<f64>,
}

impl From<ScriptBounds> for BoundingBox {
    fn from(b: ScriptBounds) -> Self {
        BoundingBox::new(b.left, b.top, b.width, b.height).with_layout(Size::new(
            b.layout_width.unwrap_or(b.width),
            b.layout_height.unwrap_or(b.height),
        ))
    }
}

/// One host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    LoadImage,
    ImageLoaded {
        width: f64,
        height: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
        /// Defaults to a box the size of the image at the origin.
        #[serde(default)]
        bounds: Option<ScriptBounds>,
        #[serde(default)]
        transform: Option<DisplayTransform>,
    },
    PointerLeave,
    Wheel {
        delta_y: f64,
    },
    SetLensSize {
        width: f64,
        height: f64,
        /// Keeps the current unit when omitted.
        #[serde(default)]
        unit: Option<Unit>,
    },
    SetZoomCenter {
        point: Option<Point>,
        #[serde(default)]
        unit: Option<Unit>,
    },
    SetZoomFactor {
        value: f64,
    },
    SetZoomMode {
        mode: ZoomMode,
    },
    SetZoomBounds {
        min: f64,
        max: f64,
    },
    SetBorder {
        border: BorderStyle,
    },
    SetUpdateOnMouseEvents {
        enabled: bool,
    },
}

impl ScriptEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadImage => "load_image",
            Self::ImageLoaded { .. } => "image_loaded",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerLeave => "pointer_leave",
            Self::Wheel { .. } => "wheel",
            Self::SetLensSize { .. } => "set_lens_size",
            Self::SetZoomCenter { .. } => "set_zoom_center",
            Self::SetZoomFactor { .. } => "set_zoom_factor",
            Self::SetZoomMode { .. } => "set_zoom_mode",
            Self::SetZoomBounds { .. } => "set_zoom_bounds",
            Self::SetBorder { .. } => "set_border",
            Self::SetUpdateOnMouseEvents { .. } => "set_update_on_mouse_events",
        }
    }

    /// Feed this event to `core`.
    pub fn apply(self, core: &mut MagnifierCore) -> Vec<Action> {
        match self {
            Self::LoadImage => {
                core.load_image();
                Vec::new()
            }
            Self::ImageLoaded { width, height } => core.on_image_loaded(width, height),
            Self::PointerMove { x, y, bounds, transform } => {
                let bounds = bounds.map_or_else(|| default_bounds(core), BoundingBox::from);
                core.on_pointer_move(Point::new(x, y), &bounds, &transform.unwrap_or_default())
            }
            Self::PointerLeave => core.on_pointer_leave(),
            Self::Wheel { delta_y } => core.on_wheel(delta_y),
            Self::SetLensSize { width, height, unit } => {
                let unit = unit.unwrap_or(core.params().lens_size_unit);
                core.set_lens_size(Size::new(width, height), unit)
            }
            Self::SetZoomCenter { point, unit } => {
                let unit = unit.unwrap_or(core.params().zoom_center_unit);
                core.set_zoom_center(point, unit)
            }
            Self::SetZoomFactor { value } => core.set_zoom_factor(value),
            Self::SetZoomMode { mode } => core.set_zoom_mode(mode),
            Self::SetZoomBounds { min, max } => core.set_zoom_bounds(ZoomBounds::new(min, max)),
            Self::SetBorder { border } => core.set_border(border),
            Self::SetUpdateOnMouseEvents { enabled } => {
                core.set_update_on_mouse_events(enabled);
                Vec::new()
            }
        }
    }
}

/// An unscaled surface at the origin, the size of the loaded image.
fn default_bounds(core: &MagnifierCore) -> BoundingBox {
    let size = core.params().frame.map_or(Size::new(0.0, 0.0), |f| f.size());
    BoundingBox::new(0.0, 0.0, size.width, size.height)
}

/// A parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptLine {
    Blank,
    Event(ScriptEvent),
}

/// Parse one script line.
///
/// # Errors
///
/// Returns the JSON error for a line that is neither blank, a comment, nor a valid event.
pub fn parse_line(line: &str) -> Result<ScriptLine, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ScriptLine::Blank);
    }
    serde_json::from_str(trimmed).map(ScriptLine::Event)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
