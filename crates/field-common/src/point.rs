//! Geographic points and weighted precipitation samples.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// Maximum number of sample points a single frame can evaluate.
///
/// Matches the uniform array capacity of the GPU backend.
pub const MAX_SAMPLE_POINTS: usize = 250;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A weighted precipitation sample.
///
/// `value` is expected in [0, 1] after normalization; samples with a
/// normalized value of zero are treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub longitude: f64,
    pub latitude: f64,
    pub value: f64,
}

impl SamplePoint {
    pub fn new(longitude: f64, latitude: f64, value: f64) -> Self {
        Self {
            longitude,
            latitude,
            value,
        }
    }

    /// Location of the sample.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }

    /// Load a point set from a JSON array of `{longitude, latitude, value}`.
    pub fn list_from_json(json_str: &str) -> FieldResult<Vec<SamplePoint>> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load a point set from a JSON file.
    pub fn list_from_file<P: AsRef<std::path::Path>>(path: P) -> FieldResult<Vec<SamplePoint>> {
        let content = std::fs::read_to_string(path)?;
        Self::list_from_json(&content)
    }
}

/// Reject point sets larger than [`MAX_SAMPLE_POINTS`].
pub fn validate_point_count(count: usize) -> FieldResult<()> {
    if count > MAX_SAMPLE_POINTS {
        return Err(FieldError::TooManyPoints {
            count,
            max: MAX_SAMPLE_POINTS,
        });
    }
    Ok(())
}

/// Validate a point set before it reaches the kernel.
///
/// Checks the count cap, then requires every coordinate and value to be
/// finite. Longitudes outside [-180, 180] are accepted and wrap.
pub fn validate_points(points: &[SamplePoint]) -> FieldResult<()> {
    validate_point_count(points.len())?;

    for (index, point) in points.iter().enumerate() {
        let bad_field = if !point.longitude.is_finite() {
            Some("longitude")
        } else if !point.latitude.is_finite() {
            Some("latitude")
        } else if !point.value.is_finite() {
            Some("value")
        } else {
            None
        };

        if let Some(field) = bad_field {
            return Err(FieldError::InvalidPoint {
                index,
                message: format!("{} is not finite", field),
            });
        }
    }
    Ok(())
}
