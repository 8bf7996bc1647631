#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::Rect;

fn frame() -> ImageFrame {
    ImageFrame::new(800.0, 600.0)
}

fn lens_state(center: Option<Point>) -> EngineState {
    EngineState {
        lens_size: Size::new(400.0, 300.0),
        lens_size_unit: Unit::Pixel,
        zoom_center: center,
        zoom_center_unit: Unit::Pixel,
        zoom_mode: ZoomMode::Lens,
        ..EngineState::new(frame())
    }
}

// --- ZoomMode ---

#[test]
fn zoom_mode_default_is_cover() {
    assert_eq!(ZoomMode::default(), ZoomMode::Cover);
}

#[test]
fn zoom_mode_parses_case_insensitively() {
    assert_eq!("lens".parse::<ZoomMode>(), Ok(ZoomMode::Lens));
    assert_eq!("COVER".parse::<ZoomMode>(), Ok(ZoomMode::Cover));
}

#[test]
fn zoom_mode_rejects_unknown() {
    let err = "fisheye".parse::<ZoomMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown zoom mode 'fisheye'");
}

#[test]
fn zoom_mode_display() {
    assert_eq!(ZoomMode::Lens.to_string(), "LENS");
}

// --- EngineState defaults ---

#[test]
fn default_state_is_not_ready() {
    let s = EngineState::default();
    assert!(!s.is_ready());
    assert!(s.resolve().is_none());
}

#[test]
fn default_state_parameters() {
    let s = EngineState::default();
    assert_eq!(s.lens_size, Size::new(0.5, 0.5));
    assert_eq!(s.lens_size_unit, Unit::Normalized);
    assert_eq!(s.zoom_center, None);
    assert_eq!(s.zoom_factor, 2.0);
    assert_eq!(s.zoom_mode, ZoomMode::Cover);
}

#[test]
fn state_deserializes_with_missing_fields_defaulted() {
    let s: EngineState = serde_json::from_value(serde_json::json!({
        "frame": { "width": 800.0, "height": 600.0 },
        "zoom_mode": "LENS",
        "zoom_center": { "x": 0.5, "y": 0.5 },
    }))
    .unwrap();
    assert_eq!(s.frame, Some(frame()));
    assert_eq!(s.zoom_mode, ZoomMode::Lens);
    assert_eq!(s.zoom_factor, 2.0);
    assert_eq!(s.pixel_center(), Some(Point::new(400.0, 300.0)));
}

// --- resolve ---

#[test]
fn resolve_converts_normalized_lens_size() {
    let s = EngineState::new(frame());
    let r = s.resolve().unwrap();
    assert_eq!(r.lens_size, Size::new(400.0, 300.0));
}

#[test]
fn resolve_clamps_zoom_factor() {
    let s = EngineState { zoom_factor: 9.0, ..EngineState::new(frame()) };
    assert_eq!(s.resolve().unwrap().zoom_factor, 3.0);
}

#[test]
fn resolve_keeps_absent_center() {
    let r = EngineState::new(frame()).resolve().unwrap();
    assert!(r.center.is_none());
}

#[test]
fn resolve_with_degenerate_frame_and_normalized_lens_is_none() {
    let s = EngineState::new(ImageFrame::new(0.0, 600.0));
    assert!(s.resolve().is_none());
}

#[test]
fn pixel_center_without_frame_is_none_even_in_pixel_unit() {
    let s = EngineState {
        zoom_center: Some(Point::new(1.0, 1.0)),
        zoom_center_unit: Unit::Pixel,
        ..EngineState::default()
    };
    assert!(s.pixel_center().is_none());
}

// --- compute_rects ---

#[test]
fn lens_centered_on_image() {
    let rects = compute_rects(&lens_state(Some(Point::new(400.0, 300.0)))).unwrap();
    assert_eq!(
        rects,
        ZoomRects::Lens {
            zoom_rect: Rect::new(200.0, 150.0, 400.0, 300.0),
            clip_rect: Rect::new(300.0, 225.0, 200.0, 150.0),
        }
    );
}

#[test]
fn lens_at_origin_clamps_zoom_rect() {
    let rects = compute_rects(&lens_state(Some(Point::new(0.0, 0.0)))).unwrap();
    let ZoomRects::Lens { zoom_rect, .. } = rects else {
        panic!("expected lens rects, got {rects:?}");
    };
    assert_eq!(zoom_rect, Rect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn cover_mode_rect() {
    let s = EngineState {
        zoom_center: Some(Point::new(200.0, 150.0)),
        zoom_center_unit: Unit::Pixel,
        zoom_factor: 4.0,
        zoom_bounds: ZoomBounds::new(1.0, 4.0),
        zoom_mode: ZoomMode::Cover,
        ..EngineState::new(frame())
    };
    let rects = compute_rects(&s).unwrap();
    assert_eq!(rects, ZoomRects::Cover { cover_rect: Rect::new(150.0, 112.5, 200.0, 150.0) });
}

#[test]
fn cover_mode_uses_clamped_factor() {
    let s = EngineState {
        zoom_center: Some(Point::new(200.0, 150.0)),
        zoom_center_unit: Unit::Pixel,
        zoom_factor: 4.0,
        ..EngineState::new(frame())
    };
    let ZoomRects::Cover { cover_rect } = compute_rects(&s).unwrap() else {
        panic!("expected cover rect");
    };
    assert_eq!(cover_rect.w, 800.0 / 3.0);
}

#[test]
fn absent_center_yields_no_rects() {
    assert!(compute_rects(&lens_state(None)).is_none());
}

#[test]
fn unknown_frame_yields_no_rects() {
    let s = EngineState { frame: None, ..lens_state(Some(Point::new(1.0, 1.0))) };
    assert!(compute_rects(&s).is_none());
}

#[test]
fn normalized_center_is_scaled_before_derivation() {
    let s = EngineState {
        zoom_center: Some(Point::new(0.5, 0.5)),
        zoom_center_unit: Unit::Normalized,
        ..lens_state(None)
    };
    let ZoomRects::Lens { clip_rect, .. } = compute_rects(&s).unwrap() else {
        panic!("expected lens rects");
    };
    assert_eq!(clip_rect, Rect::new(300.0, 225.0, 200.0, 150.0));
}

// --- observe_center ---

#[test]
fn observing_bound_center_is_unchanged() {
    let s = EngineState { zoom_center: Some(Point::new(0.25, 0.5)), ..EngineState::new(frame()) };
    let obs = s.observe_center(s.pixel_center()).unwrap();
    assert_eq!(obs.value, Some(Point::new(0.25, 0.5)));
    assert!(!obs.changed);
}

#[test]
fn observing_moved_center_reports_normalized_value() {
    let s = EngineState { zoom_center: Some(Point::new(0.25, 0.5)), ..EngineState::new(frame()) };
    let obs = s.observe_center(Some(Point::new(400.0, 150.0))).unwrap();
    assert_eq!(obs.value, Some(Point::new(0.5, 0.25)));
    assert!(obs.changed);
}

#[test]
fn observing_in_pixel_unit_reports_pixels() {
    let s = EngineState { zoom_center_unit: Unit::Pixel, ..EngineState::new(frame()) };
    let obs = s.observe_center(Some(Point::new(10.0, 20.0))).unwrap();
    assert_eq!(obs.value, Some(Point::new(10.0, 20.0)));
    assert!(obs.changed);
}

#[test]
fn observing_absent_against_bound_center_is_a_change() {
    let s = EngineState { zoom_center: Some(Point::new(0.5, 0.5)), ..EngineState::new(frame()) };
    let obs = s.observe_center(None).unwrap();
    assert_eq!(obs.value, None);
    assert!(obs.changed);
}

#[test]
fn observing_absent_against_absent_is_unchanged() {
    let obs = EngineState::new(frame()).observe_center(None).unwrap();
    assert!(!obs.changed);
}

#[test]
fn observing_normalized_before_frame_is_deferred() {
    let s = EngineState::default();
    assert!(s.observe_center(Some(Point::new(1.0, 1.0))).is_none());
}

#[test]
fn observing_pixel_before_frame_is_allowed() {
    let s = EngineState { zoom_center_unit: Unit::Pixel, ..EngineState::default() };
    let obs = s.observe_center(Some(Point::new(1.0, 1.0))).unwrap();
    assert!(obs.changed);
}
