//! Spherical Web Mercator projection.
//!
//! Geographic coordinates are projected onto the unit square, with x growing
//! east from the antimeridian and y growing south from the top edge
//! (latitude ~85.0511°N). Screen positions are expressed as normalized
//! device coordinates in [-1, 1]², origin at the viewport center, +y up.
//!
//! Latitudes at or beyond ±90° are not clamped: the tangent/log terms go to
//! infinity and the caller must keep samples and cameras off the poles.

use std::f64::consts::PI;

use field_common::{CameraState, GeoPoint};

/// World size in pixels at zoom 0, matching 512px host tiles.
pub const BASE_WORLD_SIZE: f64 = 512.0;

/// Geographic point recovered for a screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeo {
    pub point: GeoPoint,
    /// Which horizontal copy of the world the pixel falls in (0 = primary).
    pub world_wrap: i64,
}

/// Project degrees onto the Mercator unit square.
pub fn geo_to_mercator_unit(lng: f64, lat: f64) -> (f64, f64) {
    let x = (lng + 180.0) / 360.0;
    let lat_rad = lat * PI / 180.0;
    let y = (PI - (PI / 4.0 + lat_rad / 2.0).tan().ln()) / (2.0 * PI);
    (x, y)
}

/// Inverse of [`geo_to_mercator_unit`], returning `(lng, lat)` in degrees.
pub fn mercator_unit_to_geo(x: f64, y: f64) -> (f64, f64) {
    let lng = x * 360.0 - 180.0;
    let lat = 2.0 * ((PI * (1.0 - 2.0 * y)).exp().atan() - PI / 4.0) * 180.0 / PI;
    (lng, lat)
}

/// Wrap a longitude into [-180, 180).
pub fn normalize_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Signed shortest angular difference `a - b`, in (-180, 180].
///
/// Non-finite input yields NaN.
pub fn lng_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b + 180.0).rem_euclid(360.0) - 180.0;
    if diff == -180.0 {
        180.0
    } else {
        diff
    }
}

/// Convert a pixel index to the NDC of its center.
///
/// Row 0 is the top of the viewport, so it maps to the largest NDC y.
pub fn pixel_to_ndc(px: u32, py: u32, width: u32, height: u32) -> (f64, f64) {
    let x = (px as f64 + 0.5) / width as f64 * 2.0 - 1.0;
    let y = 1.0 - (py as f64 + 0.5) / height as f64 * 2.0;
    (x, y)
}

/// Recover the geographic point under a screen position.
///
/// The absolute Mercator x may leave [0, 1] when the viewport shows more
/// than one world; `world_wrap` records which copy it landed in and the
/// longitude is taken from the x position inside that copy.
pub fn screen_to_geo(ndc: (f64, f64), camera: &CameraState) -> ScreenGeo {
    let (center_x, center_y) = geo_to_mercator_unit(camera.center.lng, camera.center.lat);
    let scale = BASE_WORLD_SIZE * 2f64.powf(camera.zoom);

    // Mercator y grows south, NDC y grows up
    let pixel_x = ndc.0 * camera.width / 2.0;
    let pixel_y = -ndc.1 * camera.height / 2.0;

    let merc_x = center_x + pixel_x / scale;
    let merc_y = center_y + pixel_y / scale;

    let world_wrap = merc_x.floor();
    let wrapped_x = merc_x - world_wrap;

    let (lng, lat) = mercator_unit_to_geo(wrapped_x, merc_y);

    ScreenGeo {
        point: GeoPoint::new(lng, lat),
        world_wrap: world_wrap as i64,
    }
}
