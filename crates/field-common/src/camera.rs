//! Camera state supplied by the map host each frame.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};
use crate::point::GeoPoint;

/// Read-only view parameters for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Viewport center in degrees.
    pub center: GeoPoint,
    /// Fractional zoom level; world size is `512 * 2^zoom` pixels.
    pub zoom: f64,
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
}

impl CameraState {
    pub fn new(center: GeoPoint, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom,
            width,
            height,
        }
    }

    /// Viewport size as `(width, height)`.
    pub fn viewport_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Check that the viewport has a usable pixel size.
    pub fn validate(&self) -> FieldResult<()> {
        let valid = |v: f64| v.is_finite() && v >= 1.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(FieldError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_viewport() {
        let camera = CameraState::new(GeoPoint::new(0.0, 0.0), 2.0, 800.0, 600.0);
        assert!(camera.validate().is_ok());
        assert_eq!(camera.viewport_size(), (800.0, 600.0));

        let camera = CameraState::new(GeoPoint::new(0.0, 0.0), 2.0, 0.0, 600.0);
        assert!(matches!(
            camera.validate(),
            Err(FieldError::InvalidViewport { .. })
        ));

        let camera = CameraState::new(GeoPoint::new(0.0, 0.0), 2.0, 800.0, f64::NAN);
        assert!(camera.validate().is_err());
    }
}
