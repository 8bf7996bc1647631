//! Stateful core driven by host events.
//!
//! [`MagnifierCore`] owns the bound parameters plus the live focus and zoom
//! factor, and turns image, pointer, wheel and parameter events into
//! [`Action`]s for the host. All geometry is delegated to the pure modules;
//! the core only decides when to recompute and what to report back.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::{Deserialize, Serialize};

use crate::focus::{self, BoundingBox, DisplayTransform};
use crate::geometry::{ImageFrame, Point, Size};
use crate::rects::ZoomRects;
use crate::render::{self, BorderStyle, DrawOp};
use crate::state::{EngineState, ResolvedState, ZoomMode};
use crate::units::{self, Unit};
use crate::zoom::{self, ZoomBounds};

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// The draw plan changed; call [`MagnifierCore::draw_plan`] and replay it.
    RenderNeeded,
    /// The live zoom factor differs from the bound one.
    ZoomFactorChanged(f64),
    /// The live focus, in the bound unit, differs from the bound zoom center.
    ZoomCenterChanged(Option<Point>),
}

/// Core magnifier state: bound parameters plus live pixel-space values.
#[derive(Debug, Clone)]
pub struct MagnifierCore {
    params: EngineState,
    border: BorderStyle,
    update_on_mouse_events: bool,
    lens_px: Option<Size>,
    center_px: Option<Point>,
    zoom_factor: f64,
    pending_update: bool,
}

impl Default for MagnifierCore {
    fn default() -> Self {
        Self::new(EngineState::default(), BorderStyle::default(), true)
    }
}

impl MagnifierCore {
    /// Build a core from initial parameters. The image frame in `params`, if
    /// any, is treated as already loaded.
    #[must_use]
    pub fn new(params: EngineState, border: BorderStyle, update_on_mouse_events: bool) -> Self {
        let mut core = Self {
            params,
            border,
            update_on_mouse_events,
            lens_px: None,
            center_px: None,
            zoom_factor: zoom::clamp_zoom_factor(params.zoom_factor, params.zoom_bounds),
            pending_update: false,
        };
        core.derive_pixel_values();
        core
    }

    // --- Image lifecycle ---

    /// A new image source started loading; geometry is suspended until
    /// [`Self::on_image_loaded`].
    pub fn load_image(&mut self) {
        self.params.frame = None;
    }

    /// The image finished loading with the given natural size.
    pub fn on_image_loaded(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.params.frame = Some(ImageFrame::new(width, height));
        if self.pending_update {
            tracing::debug!(width, height, "running deferred update");
        }
        self.pending_update = false;
        self.update_parameters()
    }

    // --- Bound parameters ---

    pub fn set_lens_size(&mut self, size: Size, unit: Unit) -> Vec<Action> {
        self.params.lens_size = size;
        self.params.lens_size_unit = unit;
        self.update_parameters()
    }

    pub fn set_zoom_center(&mut self, center: Option<Point>, unit: Unit) -> Vec<Action> {
        self.params.zoom_center = center;
        self.params.zoom_center_unit = unit;
        self.update_parameters()
    }

    pub fn set_zoom_factor(&mut self, factor: f64) -> Vec<Action> {
        self.params.zoom_factor = factor;
        self.update_parameters()
    }

    /// Replace the zoom bounds. Callers must keep `min <= max`.
    pub fn set_zoom_bounds(&mut self, bounds: ZoomBounds) -> Vec<Action> {
        self.params.zoom_bounds = bounds;
        self.update_parameters()
    }

    pub fn set_zoom_mode(&mut self, mode: ZoomMode) -> Vec<Action> {
        self.params.zoom_mode = mode;
        self.update()
    }

    pub fn set_border(&mut self, border: BorderStyle) -> Vec<Action> {
        self.border = border;
        if self.is_ready() { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// When disabled, pointer and wheel events are ignored.
    pub fn set_update_on_mouse_events(&mut self, enabled: bool) {
        self.update_on_mouse_events = enabled;
    }

    // --- Input events ---

    /// Pointer entered or moved over the surface.
    pub fn on_pointer_move(
        &mut self,
        client: Point,
        bounds: &BoundingBox,
        transform: &DisplayTransform,
    ) -> Vec<Action> {
        if !self.update_on_mouse_events {
            return Vec::new();
        }
        let Some(frame) = self.params.frame else {
            tracing::trace!("pointer move before image load ignored");
            return Vec::new();
        };
        self.center_px = focus::resolve_focus(client, bounds, transform, frame);
        self.update()
    }

    /// Pointer left the surface; focus becomes absent.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if !self.update_on_mouse_events {
            return Vec::new();
        }
        self.center_px = None;
        self.update()
    }

    /// Wheel scrolled by `delta_y` (positive = down = zoom out).
    pub fn on_wheel(&mut self, delta_y: f64) -> Vec<Action> {
        if !self.update_on_mouse_events {
            return Vec::new();
        }
        let Some(next) = zoom::zoom_after_wheel(self.zoom_factor, delta_y, self.params.zoom_bounds) else {
            return Vec::new();
        };
        tracing::debug!(from = self.zoom_factor, to = next, "zoom factor changed");
        self.zoom_factor = next;

        let mut actions = Vec::new();
        #[allow(clippy::float_cmp)]
        let differs_from_bound = next != self.params.zoom_factor;
        if differs_from_bound {
            actions.push(Action::ZoomFactorChanged(next));
        }
        actions.extend(self.update());
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.params.is_ready()
    }

    /// The bound parameters, as last set by the host.
    #[must_use]
    pub fn params(&self) -> &EngineState {
        &self.params
    }

    #[must_use]
    pub fn border(&self) -> &BorderStyle {
        &self.border
    }

    #[must_use]
    pub fn update_on_mouse_events(&self) -> bool {
        self.update_on_mouse_events
    }

    /// Live, clamped zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Live focus in image pixels.
    #[must_use]
    pub fn focus(&self) -> Option<Point> {
        self.center_px
    }

    /// Live focus expressed in the bound zoom-center unit.
    #[must_use]
    pub fn focus_in_unit(&self) -> Option<Point> {
        let frame = self.params.frame?;
        units::to_unit_point(self.center_px, self.params.zoom_center_unit, frame)
    }

    /// Live values in pixel space, once the image is loaded.
    #[must_use]
    pub fn resolved(&self) -> Option<ResolvedState> {
        Some(ResolvedState {
            frame: self.params.frame?,
            lens_size: self.lens_px?,
            center: self.center_px,
            zoom_factor: self.zoom_factor,
            zoom_mode: self.params.zoom_mode,
        })
    }

    #[must_use]
    pub fn rects(&self) -> Option<ZoomRects> {
        self.resolved()?.rects()
    }

    #[must_use]
    pub fn draw_plan(&self) -> Vec<DrawOp> {
        render::plan_frame(self.params.frame, self.rects(), &self.border)
    }

    // --- Internals ---

    /// Re-derive pixel values from the bound parameters, then update.
    fn update_parameters(&mut self) -> Vec<Action> {
        self.derive_pixel_values();
        self.update()
    }

    fn derive_pixel_values(&mut self) {
        self.lens_px = self.params.pixel_lens_size();
        self.center_px = match (self.params.zoom_center, self.params.frame) {
            (None, _) => None,
            (Some(_), Some(_)) => self.params.pixel_center(),
            // Pixel centers need no frame; normalized ones wait for it.
            (Some(center), None) if self.params.zoom_center_unit == Unit::Pixel => Some(center),
            (Some(_), None) => self.center_px,
        };
        self.zoom_factor = zoom::clamp_zoom_factor(self.params.zoom_factor, self.params.zoom_bounds);
    }

    /// Request a render and report the focus back if it drifted from the bound value.
    fn update(&mut self) -> Vec<Action> {
        if !self.is_ready() {
            self.pending_update = true;
            return Vec::new();
        }
        let mut actions = vec![Action::RenderNeeded];
        if let Some(observed) = self.params.observe_center(self.center_px) {
            if observed.changed {
                actions.push(Action::ZoomCenterChanged(observed.value));
            }
        }
        actions
    }
}
