//! Tests for gradient style files.

use std::io::Write;

use field_common::FieldError;
use renderer::gradient::Rgb;
use renderer::style::GradientStyle;

const RAINFALL_STYLE: &str = r##"{
    "name": "rainfall",
    "description": "Four band rainfall",
    "stops": [
        { "threshold": 0.0, "color": "#A0D2FF", "label": "Drizzle" },
        { "threshold": 0.25, "color": "#3278FF", "label": "Light" },
        { "threshold": 0.5, "color": "#FFC800", "label": "Moderate" },
        { "threshold": 0.75, "color": "#D21E1E", "label": "Heavy" }
    ]
}"##;

#[test]
fn test_parse_style() {
    let style = GradientStyle::from_json(RAINFALL_STYLE).unwrap();
    assert_eq!(style.name, "rainfall");
    assert_eq!(style.stops.len(), 4);
    assert_eq!(style.stops[2].label.as_deref(), Some("Moderate"));
}

#[test]
fn test_style_to_gradient() {
    let gradient = GradientStyle::from_json(RAINFALL_STYLE)
        .unwrap()
        .to_gradient()
        .unwrap();
    assert_eq!(gradient.color_for(0.3), Rgb::new(0x32, 0x78, 0xFF));
    assert_eq!(gradient.color_for(1.15), Rgb::new(0xD2, 0x1E, 0x1E));
}

#[test]
fn test_style_with_unsorted_stops_is_rejected() {
    let style = GradientStyle::from_json(
        r##"{"name": "bad", "stops": [
            {"threshold": 0.5, "color": "#000000"},
            {"threshold": 0.1, "color": "#FFFFFF"}
        ]}"##,
    )
    .unwrap();
    assert!(matches!(
        style.to_gradient(),
        Err(FieldError::InvalidGradient(_))
    ));
}

#[test]
fn test_style_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RAINFALL_STYLE.as_bytes()).unwrap();

    let style = GradientStyle::from_file(file.path()).unwrap();
    assert_eq!(style.to_gradient().unwrap().stops().len(), 4);
}

#[test]
fn test_style_malformed_json() {
    assert!(matches!(
        GradientStyle::from_json("{ not json"),
        Err(FieldError::Json(_))
    ));
}
