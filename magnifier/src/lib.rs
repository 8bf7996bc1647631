//! Geometry engine for a magnifying-glass overlay on a raster image.
//!
//! Given a focus position over an image, the engine derives the rectangles a
//! host needs to draw either a bordered zoom lens or a full-canvas cover zoom.
//! It never draws anything itself: the host owns input capture and the 2D
//! surface, feeds raw events into [`engine::MagnifierCore`], and replays the
//! resulting [`render::DrawOp`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `Point`, `Size`, `Rect`, `ImageFrame` value types |
//! | [`units`] | Normalized/pixel unit conversions |
//! | [`focus`] | View-to-image pointer mapping, including rotated surfaces |
//! | [`rects`] | Lens and cover rectangle derivation with clamping |
//! | [`zoom`] | Zoom-factor bounds and wheel adjustment |
//! | [`state`] | Immutable `EngineState` snapshot and the `compute_rects` entry point |
//! | [`render`] | Draw plan for the host's 2D surface |
//! | [`engine`] | Stateful [`engine::MagnifierCore`] returning host actions |
//! | [`consts`] | Shared defaults (zoom limits, lens size, border width, etc.) |

pub mod consts;
pub mod engine;
pub mod focus;
pub mod geometry;
pub mod rects;
pub mod render;
pub mod state;
pub mod units;
pub mod zoom;
