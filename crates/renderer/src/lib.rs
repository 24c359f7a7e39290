//! CPU reference renderer for the precipitation field.
//!
//! - Radial influence blending of sample points
//! - Banded gradient color lookup
//! - Per-pixel and whole-frame evaluation
//! - Layer state with frame snapshots
//! - PNG export

pub mod blend;
pub mod evaluator;
pub mod gradient;
pub mod layer;
pub mod png;
pub mod style;

pub use blend::{blend_intensity, falloff, BlendAccumulator, INTENSITY_BOOST};
pub use evaluator::{
    evaluate, frame_dimensions, render_frame, shade_location, Frame, FIXED_ALPHA,
    MAX_FRAME_DIMENSION,
};
pub use gradient::{Gradient, GradientStop, Rgb, Rgba};
pub use layer::{FrameSnapshot, PrecipitationLayer};
pub use style::GradientStyle;
