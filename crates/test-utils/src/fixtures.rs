//! Common test fixtures: cameras, locations and point sets.

use field_common::{CameraState, GeoPoint, SamplePoint};

/// Default viewport used by fixtures.
pub const VIEWPORT_WIDTH: f64 = 256.0;
pub const VIEWPORT_HEIGHT: f64 = 256.0;

/// A 256x256 camera centered on `(lng, lat)`.
pub fn camera_at(lng: f64, lat: f64, zoom: f64) -> CameraState {
    CameraState::new(GeoPoint::new(lng, lat), zoom, VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
}

/// Camera over the central US at regional zoom.
pub fn conus_camera() -> CameraState {
    camera_at(-97.5, 35.2, 5.0)
}

/// A spread of non-polar locations, including both sides of the antimeridian.
pub fn sample_locations() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(-97.5, 35.2),
        GeoPoint::new(139.7, 35.7),
        GeoPoint::new(-0.1, 51.5),
        GeoPoint::new(151.2, -33.9),
        GeoPoint::new(179.9, 10.0),
        GeoPoint::new(-179.9, -10.0),
        GeoPoint::new(-70.6, -84.0),
        GeoPoint::new(25.0, 84.0),
    ]
}

/// A single full-intensity sample at `(lng, lat)`.
pub fn single_point(lng: f64, lat: f64) -> Vec<SamplePoint> {
    vec![SamplePoint::new(lng, lat, 1.0)]
}

/// A small storm cell over Oklahoma with graded intensities.
pub fn storm_cell() -> Vec<SamplePoint> {
    vec![
        SamplePoint::new(-97.5, 35.2, 0.9),
        SamplePoint::new(-97.0, 35.5, 0.6),
        SamplePoint::new(-98.1, 34.8, 0.3),
        SamplePoint::new(-96.4, 36.0, 0.1),
        SamplePoint::new(-97.8, 35.9, 0.0),
    ]
}
