//! Coordinate math for the precipitation field.
//!
//! Spherical Web Mercator projection, screen-to-geographic unprojection with
//! world-wrap tracking, and haversine great-circle distance, all in f64.

pub mod distance;
pub mod mercator;

pub use distance::{haversine_distance, EARTH_RADIUS_KM};
pub use mercator::{
    geo_to_mercator_unit, lng_diff, mercator_unit_to_geo, normalize_lng, pixel_to_ndc,
    screen_to_geo, ScreenGeo, BASE_WORLD_SIZE,
};
