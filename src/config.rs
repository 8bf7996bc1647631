//! Initial magnifier parameters from an optional JSON file plus CLI overrides.
//!
//! Every field has a default, so an empty object (or no file at all) yields
//! a COVER-mode magnifier with a half-image lens and factor 2 in 1.2..=3.

use std::fs;
use std::path::Path;

use magnifier::engine::MagnifierCore;
use magnifier::geometry::{Point, Size};
use magnifier::render::BorderStyle;
use magnifier::state::{EngineState, ZoomMode};
use magnifier::units::Unit;
use magnifier::zoom::ZoomBounds;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("zoom bounds must satisfy 0 < min <= max (got min {min}, max {max})")]
    InvalidBounds { min: f64, max: f64 },
    #[error("lens size must be positive (got {width} x {height})")]
    InvalidLensSize { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagnifierConfig {
    pub zoom_mode: ZoomMode,
    pub min_zoom_factor: f64,
    pub max_zoom_factor: f64,
    pub zoom_factor: f64,
    pub lens_size: Size,
    pub lens_size_unit: Unit,
    pub zoom_center: Option<Point>,
    pub zoom_center_unit: Unit,
    pub update_on_mouse_events: bool,
    pub border: BorderStyle,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        let state = EngineState::default();
        Self {
            zoom_mode: state.zoom_mode,
            min_zoom_factor: state.zoom_bounds.min,
            max_zoom_factor: state.zoom_bounds.max,
            zoom_factor: state.zoom_factor,
            lens_size: state.lens_size,
            lens_size_unit: state.lens_size_unit,
            zoom_center: state.zoom_center,
            zoom_center_unit: state.zoom_center_unit,
            update_on_mouse_events: true,
            border: BorderStyle::default(),
        }
    }
}

/// Values given on the command line; `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub zoom_mode: Option<ZoomMode>,
    pub zoom_factor: Option<f64>,
    pub min_zoom_factor: Option<f64>,
    pub max_zoom_factor: Option<f64>,
    pub lens_width: Option<f64>,
    pub lens_height: Option<f64>,
    pub lens_size_unit: Option<Unit>,
    pub zoom_center_unit: Option<Unit>,
    pub ignore_mouse: bool,
}

impl MagnifierConfig {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config object.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: display.clone(), source })?;
        let config = Self::from_json_str(&raw).map_err(|source| ConfigError::Parse { path: display, source })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error for malformed input or unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(mode) = overrides.zoom_mode {
            self.zoom_mode = mode;
        }
        if let Some(factor) = overrides.zoom_factor {
            self.zoom_factor = factor;
        }
        if let Some(min) = overrides.min_zoom_factor {
            self.min_zoom_factor = min;
        }
        if let Some(max) = overrides.max_zoom_factor {
            self.max_zoom_factor = max;
        }
        if let Some(width) = overrides.lens_width {
            self.lens_size.width = width;
        }
        if let Some(height) = overrides.lens_height {
            self.lens_size.height = height;
        }
        if let Some(unit) = overrides.lens_size_unit {
            self.lens_size_unit = unit;
        }
        if let Some(unit) = overrides.zoom_center_unit {
            self.zoom_center_unit = unit;
        }
        if overrides.ignore_mouse {
            self.update_on_mouse_events = false;
        }
    }

    /// Check the caller-side contracts the engine does not enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] unless `0 < min <= max`, and
    /// [`ConfigError::InvalidLensSize`] for a non-positive lens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_zoom_factor, self.max_zoom_factor);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        let Size { width, height } = self.lens_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidLensSize { width, height });
        }
        Ok(())
    }

    #[must_use]
    pub fn engine_state(&self) -> EngineState {
        EngineState {
            frame: None,
            lens_size: self.lens_size,
            lens_size_unit: self.lens_size_unit,
            zoom_center: self.zoom_center,
            zoom_center_unit: self.zoom_center_unit,
            zoom_factor: self.zoom_factor,
            zoom_bounds: ZoomBounds::new(self.min_zoom_factor, self.max_zoom_factor),
            zoom_mode: self.zoom_mode,
        }
    }

    #[must_use]
    pub fn into_core(self) -> MagnifierCore {
        MagnifierCore::new(self.engine_state(), self.border, self.update_on_mouse_events)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
