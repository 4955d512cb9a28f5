//! Integration tests for the complete picking workflow
//!
//! These tests validate the end-to-end session flow including:
//! - Image acquisition from files and payloads
//! - Palette extraction on load
//! - Picking, conversion and contrast assessment
//! - History bounds and deduplication
//! - Error handling that leaves the session in its prior state

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pick_colors::export::{snippet, ExportFormat};
use pick_colors::{ColorData, Coordinate, PickerError, Session};
use std::io::Cursor;
use std::path::PathBuf;

fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pick_colors_{}_{}", std::process::id(), name))
}

/// 16 distinct colors in a 16x1 strip, one per column
fn strip() -> RgbaImage {
    RgbaImage::from_fn(16, 1, |x, _| Rgba([(x * 16) as u8, 255 - (x * 16) as u8, 128, 255]))
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_load_file_not_found() {
    let session = Session::new();
    let err = session.load_file(&temp_path("missing.png")).unwrap_err();

    match err {
        PickerError::ImageLoadError { .. } => {}
        _ => panic!("Expected ImageLoadError, got: {:?}", err),
    }
}

#[test]
fn test_load_unknown_extension() {
    let result = Session::new().load_file(&temp_path("notes.txt"));
    assert!(matches!(result, Err(PickerError::UnknownFormat { .. })));
}

#[test]
fn test_corrupt_payload_keeps_previous_image() {
    let session = Session::new()
        .load_payload(&encode(&strip(), ImageFormat::Png), "image/png")
        .unwrap();

    let err = session.load_payload(b"garbage", "image/png").unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(session.image().map(|i| i.dimensions()), Some((16, 1)));
}

// ============================================================================
// End-to-end Workflow
// ============================================================================

#[test]
fn test_file_round_trip_workflow() {
    let path = temp_path("uniform.png");
    let image = RgbaImage::from_pixel(64, 48, Rgba([99, 102, 241, 255]));
    std::fs::write(&path, encode(&image, ImageFormat::Png)).unwrap();

    let session = Session::new().load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(session.palette().len(), 5);
    assert!(session.palette().iter().all(|hex| hex == "#6366f1"));

    let session = session.pick_display(10.0, 10.0, (640.0, 480.0)).unwrap();
    let color = session.color();
    assert_eq!(color.hex(), "#6366f1");
    assert_eq!(color.hsl_string(), "hsl(239, 84%, 67%)");
    assert_eq!(color.cmyk_string(), "59, 58, 0, 5");
    assert_eq!(session.contrast().ratio_vs_black, 4.7);
    assert_eq!(session.contrast().ratio_vs_white, 4.47);
    assert!(session.contrast().is_dark);

    assert_eq!(
        snippet(color.hex(), "primary", ExportFormat::CssVariable).unwrap(),
        "--primary: #6366f1;"
    );
}

#[test]
fn test_palette_length_on_non_uniform_image() {
    let session = Session::new()
        .load_payload(&encode(&strip(), ImageFormat::Png), "image/png")
        .unwrap();

    // Columns 3, 8, 12, 4, 11 of the strip
    let expected: Vec<String> = [3u32, 8, 12, 4, 11]
        .iter()
        .map(|&x| ColorData::from_rgb((x * 16) as u8, 255 - (x * 16) as u8, 128).hex().to_string())
        .collect();
    assert_eq!(session.palette().colors(), expected.as_slice());
}

#[test]
fn test_history_is_bounded_and_deduplicated() {
    let image = RgbaImage::from_fn(13, 1, |x, _| Rgba([x as u8, 0, 0, 255]));
    let mut session = Session::new().load_image(image).unwrap();

    for x in 0..13 {
        session = session.pick(Coordinate::new(f64::from(x), 0.0)).unwrap();
    }

    let history = session.history();
    assert_eq!(history.len(), 12);
    assert_eq!(history.most_recent(), Some("#0c0000"));
    assert!(!history.contains("#000000"));
    assert_eq!(history.entries().last().map(String::as_str), Some("#010000"));

    // Re-picking an entry in the middle changes nothing
    let before = history.clone();
    let session = session.pick(Coordinate::new(5.0, 0.0)).unwrap();
    assert_eq!(session.history(), &before);
    assert_eq!(session.color().hex(), "#050000");
}

#[test]
fn test_extreme_colors() {
    let image = RgbaImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let session = Session::new().load_image(image).unwrap();

    let black = session.pick(Coordinate::new(0.0, 0.0)).unwrap();
    assert_eq!(black.color().cmyk_string(), "0, 0, 0, 100");
    assert_eq!(black.contrast().ratio_vs_black, 1.0);
    assert!(black.contrast().is_dark);

    let white = session.pick(Coordinate::new(1.0, 0.0)).unwrap();
    assert_eq!(white.color().hex(), "#ffffff");
    assert_eq!(white.contrast().ratio_vs_white, 1.0);
    assert!(!white.contrast().is_dark);
}

#[test]
fn test_transparent_pixels_use_color_channels() {
    let image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 0]));
    let session = Session::new()
        .load_payload(&encode(&image, ImageFormat::Png), "image/png")
        .unwrap()
        .pick(Coordinate::new(2.0, 2.0))
        .unwrap();
    assert_eq!(session.color().hex(), "#c86432");
}

#[test]
fn test_slider_round_trip() {
    let session = Session::new().adjust_hsl(200, 60, 40);
    let hsl = session.color().hsl();
    assert!(hsl.hue.abs_diff(200) <= 1);
    assert!(hsl.saturation.abs_diff(60) <= 1);
    assert!(hsl.lightness.abs_diff(40) <= 1);
}
