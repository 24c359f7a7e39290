//! Common types shared across the precipitation field crates.

pub mod camera;
pub mod config;
pub mod error;
pub mod point;

pub use camera::CameraState;
pub use config::{RenderConfig, RenderConfigPatch};
pub use error::{FieldError, FieldResult};
pub use point::{validate_point_count, validate_points, GeoPoint, SamplePoint, MAX_SAMPLE_POINTS};
