//! Great-circle distance on a spherical Earth.

use field_common::GeoPoint;

use crate::mercator::lng_diff;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// The longitude term uses the shortest signed difference, so points on
/// either side of the antimeridian are measured the short way around.
pub fn haversine_distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let lat1_rad = p1.lat.to_radians();
    let lat2_rad = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = lng_diff(p2.lng, p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        let p = GeoPoint::new(-97.5, 35.2);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_one_degree_at_equator() {
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_antimeridian_is_short() {
        let d = haversine_distance(GeoPoint::new(179.9, 0.0), GeoPoint::new(-179.9, 0.0));
        assert!((d - 22.239).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_huge_longitude_is_bounded() {
        // 3.6e9 degrees is an exact multiple of 360
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(3.6e9, 0.0));
        assert!(d.abs() < 1e-6, "got {}", d);

        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(1e300, 0.0));
        assert!(d.is_finite() && d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    #[test]
    fn test_nan_coordinate_gives_nan() {
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(50.0, f64::NAN));
        assert!(d.is_nan());
    }
}
