#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}

fn frame() -> ImageFrame {
    ImageFrame::new(800.0, 600.0)
}

// --- Unit parsing ---

#[test]
fn unit_default_is_normalized() {
    assert_eq!(Unit::default(), Unit::Normalized);
}

#[test]
fn unit_from_str_is_case_insensitive() {
    assert_eq!("pixel".parse::<Unit>(), Ok(Unit::Pixel));
    assert_eq!("NORMALIZED".parse::<Unit>(), Ok(Unit::Normalized));
}

#[test]
fn unit_from_str_rejects_unknown() {
    let err = "percent".parse::<Unit>().unwrap_err();
    assert_eq!(err.kind, "unit");
    assert_eq!(err.to_string(), "unknown unit 'percent'");
}

#[test]
fn unit_serde_uses_upper_case_names() {
    assert_eq!(serde_json::to_value(Unit::Pixel).unwrap(), serde_json::json!("PIXEL"));
    let parsed: Unit = serde_json::from_value(serde_json::json!("NORMALIZED")).unwrap();
    assert_eq!(parsed, Unit::Normalized);
}

#[test]
fn unit_display_matches_serde_name() {
    assert_eq!(Unit::Pixel.to_string(), "PIXEL");
}

// --- to_pixel_size ---

#[test]
fn pixel_size_passes_through() {
    let s = Size::new(400.0, 300.0);
    assert_eq!(to_pixel_size(s, Unit::Pixel, frame()), Some(s));
}

#[test]
fn normalized_size_scales_by_frame() {
    let s = to_pixel_size(Size::new(0.5, 0.25), Unit::Normalized, frame()).unwrap();
    assert_eq!(s, Size::new(400.0, 150.0));
}

#[test]
fn normalized_size_against_empty_frame_is_none() {
    let s = to_pixel_size(Size::new(0.5, 0.5), Unit::Normalized, ImageFrame::new(0.0, 600.0));
    assert!(s.is_none());
}

#[test]
fn pixel_size_ignores_empty_frame() {
    let s = to_pixel_size(Size::new(10.0, 10.0), Unit::Pixel, ImageFrame::new(0.0, 0.0));
    assert_eq!(s, Some(Size::new(10.0, 10.0)));
}

// --- to_pixel_point ---

#[test]
fn absent_point_stays_absent() {
    assert!(to_pixel_point(None, Unit::Normalized, frame()).is_none());
    assert!(to_pixel_point(None, Unit::Pixel, frame()).is_none());
}

#[test]
fn normalized_point_scales_per_axis() {
    let p = to_pixel_point(Some(Point::new(0.5, 0.5)), Unit::Normalized, frame()).unwrap();
    assert_eq!(p, Point::new(400.0, 300.0));
}

#[test]
fn pixel_point_passes_through() {
    let p = Point::new(12.0, 34.0);
    assert_eq!(to_pixel_point(Some(p), Unit::Pixel, frame()), Some(p));
}

#[test]
fn normalized_point_against_zero_height_frame_is_none() {
    let p = to_pixel_point(Some(Point::new(0.5, 0.5)), Unit::Normalized, ImageFrame::new(800.0, 0.0));
    assert!(p.is_none());
}

// --- to_unit_point ---

#[test]
fn unit_point_normalizes_by_frame() {
    let p = to_unit_point(Some(Point::new(200.0, 150.0)), Unit::Normalized, frame()).unwrap();
    assert_eq!(p, Point::new(0.25, 0.25));
}

#[test]
fn unit_point_in_pixels_is_identity() {
    let p = Point::new(200.0, 150.0);
    assert_eq!(to_unit_point(Some(p), Unit::Pixel, frame()), Some(p));
}

#[test]
fn unit_point_against_zero_frame_is_none() {
    let p = to_unit_point(Some(Point::new(1.0, 1.0)), Unit::Normalized, ImageFrame::new(0.0, 0.0));
    assert!(p.is_none());
}

proptest! {
    #[test]
    fn normalized_round_trip_recovers_pixel_point(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        w in 1.0f64..8000.0,
        h in 1.0f64..8000.0,
    ) {
        let f = ImageFrame::new(w, h);
        let unit = to_unit_point(Some(Point::new(x, y)), Unit::Normalized, f);
        let back = to_pixel_point(unit, Unit::Normalized, f).unwrap();
        prop_assert!(approx_eq(back.x, x), "x: {} != {}", back.x, x);
        prop_assert!(approx_eq(back.y, y), "y: {} != {}", back.y, y);
    }

    #[test]
    fn pixel_round_trip_is_exact(x in -5000.0f64..5000.0, y in -5000.0f64..5000.0) {
        let p = Point::new(x, y);
        let back = to_pixel_point(to_unit_point(Some(p), Unit::Pixel, frame()), Unit::Pixel, frame());
        prop_assert_eq!(back, Some(p));
    }
}
