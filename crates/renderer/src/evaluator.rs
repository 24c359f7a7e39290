//! Per-pixel evaluation of the precipitation field.
//!
//! [`evaluate`] is a pure function of the camera, config, samples and
//! gradient, so pixels can be shaded in any order. [`render_frame`] runs it
//! over a whole viewport in parallel rows.

use std::time::Instant;

use field_common::{CameraState, FieldError, FieldResult, GeoPoint, RenderConfig, SamplePoint};
use projection::{pixel_to_ndc, screen_to_geo};
use rayon::prelude::*;
use tracing::debug;

use crate::blend::blend_intensity;
use crate::gradient::{Gradient, Rgba};
use crate::png::create_png_auto;

/// Alpha of every visible pixel. Opacity never follows intensity.
pub const FIXED_ALPHA: f32 = 0.8;

/// Largest viewport edge, in pixels, that [`render_frame`] will allocate.
pub const MAX_FRAME_DIMENSION: u32 = 16384;

/// Shade a geographic location that is known to be in the primary world.
pub fn shade_location(
    location: GeoPoint,
    config: &RenderConfig,
    points: &[SamplePoint],
    gradient: &Gradient,
) -> Rgba {
    let raw_value = blend_intensity(location, points, config);
    if raw_value <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    Rgba::from_rgb(gradient.color_for(raw_value), FIXED_ALPHA)
}

/// Shade one screen position given in normalized device coordinates.
///
/// Pixels that land on a wrapped copy of the world are always transparent,
/// so the field is drawn only once at low zoom.
pub fn evaluate(
    ndc: (f64, f64),
    camera: &CameraState,
    config: &RenderConfig,
    points: &[SamplePoint],
    gradient: &Gradient,
) -> Rgba {
    let hit = screen_to_geo(ndc, camera);
    if hit.world_wrap != 0 {
        return Rgba::TRANSPARENT;
    }
    shade_location(hit.point, config, points, gradient)
}

/// A rendered viewport in row-major RGBA8.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    /// RGBA of the pixel at column `x`, row `y` (row 0 is the top).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of pixels with non-zero alpha.
    pub fn visible_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    /// Encode as PNG, indexed when the frame has few enough colors.
    pub fn to_png(&self) -> FieldResult<Vec<u8>> {
        create_png_auto(&self.pixels, self.width as usize, self.height as usize)
    }
}

/// Whole-pixel frame size for a camera, plus the RGBA8 row stride.
///
/// Edges are rounded and must not exceed [`MAX_FRAME_DIMENSION`].
pub fn frame_dimensions(camera: &CameraState) -> FieldResult<(u32, u32, usize)> {
    camera.validate()?;

    let invalid = || FieldError::InvalidViewport {
        width: camera.width,
        height: camera.height,
    };

    let width = camera.width.round();
    let height = camera.height.round();
    let limit = MAX_FRAME_DIMENSION as f64;
    if width > limit || height > limit {
        return Err(invalid());
    }

    let (width, height) = (width as u32, height as u32);
    let row_bytes = (width as usize).checked_mul(4).ok_or_else(invalid)?;
    row_bytes.checked_mul(height as usize).ok_or_else(invalid)?;

    Ok((width, height, row_bytes))
}

/// Render every pixel of the camera's viewport.
///
/// The viewport size is rounded to whole pixels; see [`frame_dimensions`].
pub fn render_frame(
    camera: &CameraState,
    config: &RenderConfig,
    points: &[SamplePoint],
    gradient: &Gradient,
) -> FieldResult<Frame> {
    let (width, height, row_bytes) = frame_dimensions(camera)?;

    let start = Instant::now();
    let mut pixels = vec![0u8; row_bytes * height as usize];
    pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, out) in row.chunks_exact_mut(4).enumerate() {
                let ndc = pixel_to_ndc(px as u32, py as u32, width, height);
                let color = evaluate(ndc, camera, config, points, gradient);
                out.copy_from_slice(&color.to_rgba8());
            }
        });

    let frame = Frame {
        width,
        height,
        pixels,
    };

    debug!(
        width,
        height,
        points = points.len(),
        visible = frame.visible_pixels(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Rendered precipitation frame"
    );

    Ok(frame)
}
