//! Banded color lookup for precipitation intensity.
//!
//! Intensities map to a step function over an ordered list of stops: each
//! stop's color covers `[threshold, next_threshold)`. There is no
//! interpolation between bands.

use field_common::{FieldError, FieldResult};

/// Opaque RGB color for a gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Kernel output color with float channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Scale an 8-bit color into float channels with the given alpha.
    pub fn from_rgb(color: Rgb, alpha: f32) -> Self {
        Self {
            r: color.r as f32 / 255.0,
            g: color.g as f32 / 255.0,
            b: color.b as f32 / 255.0,
            a: alpha,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Quantize to 8 bits per channel.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// One band boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub threshold: f64,
    pub color: Rgb,
}

impl GradientStop {
    pub const fn new(threshold: f64, color: Rgb) -> Self {
        Self { threshold, color }
    }
}

/// Validated, ordered list of gradient stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient, rejecting empty tables, thresholds outside [0, 1]
    /// and thresholds that decrease.
    pub fn new(stops: Vec<GradientStop>) -> FieldResult<Self> {
        if stops.is_empty() {
            return Err(FieldError::InvalidGradient(
                "at least one stop is required".to_string(),
            ));
        }

        for (i, stop) in stops.iter().enumerate() {
            if !stop.threshold.is_finite() || !(0.0..=1.0).contains(&stop.threshold) {
                return Err(FieldError::InvalidGradient(format!(
                    "stop {} threshold {} is outside [0, 1]",
                    i, stop.threshold
                )));
            }
        }

        if let Some(i) = stops
            .windows(2)
            .position(|pair| pair[1].threshold < pair[0].threshold)
        {
            return Err(FieldError::InvalidGradient(format!(
                "stop {} threshold {} is below the previous threshold {}",
                i + 1,
                stops[i + 1].threshold,
                stops[i].threshold
            )));
        }

        Ok(Self { stops })
    }

    /// Five 20%-wide bands from light rain to heavy rain.
    pub fn precipitation() -> Self {
        Self {
            stops: vec![
                GradientStop::new(0.0, Rgb::new(130, 200, 255)),
                GradientStop::new(0.2, Rgb::new(40, 120, 255)),
                GradientStop::new(0.4, Rgb::new(0, 200, 80)),
                GradientStop::new(0.6, Rgb::new(255, 220, 0)),
                GradientStop::new(0.8, Rgb::new(230, 30, 30)),
            ],
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Index of the band `value` falls in after clamping to [0, 1].
    ///
    /// This is the last stop whose threshold is <= value. Values below the
    /// first threshold fall back to the first stop.
    pub fn band_index(&self, value: f64) -> usize {
        let value = value.clamp(0.0, 1.0);
        let mut index = 0;
        for (i, stop) in self.stops.iter().enumerate() {
            if stop.threshold <= value {
                index = i;
            }
        }
        index
    }

    /// Color for an intensity value.
    pub fn color_for(&self, value: f64) -> Rgb {
        self.stops[self.band_index(value)].color
    }

    /// Every color the kernel can emit with this gradient, transparent first.
    pub fn palette(&self, alpha: f32) -> Vec<[u8; 4]> {
        let mut palette = vec![Rgba::TRANSPARENT.to_rgba8()];
        for stop in &self.stops {
            let color = Rgba::from_rgb(stop.color, alpha).to_rgba8();
            if !palette.contains(&color) {
                palette.push(color);
            }
        }
        palette
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::precipitation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gradient_is_valid() {
        let gradient = Gradient::default();
        assert!(Gradient::new(gradient.stops().to_vec()).is_ok());
        assert_eq!(gradient.stops().len(), 5);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Gradient::new(vec![]),
            Err(FieldError::InvalidGradient(_))
        ));
    }

    #[test]
    fn test_rejects_decreasing_thresholds() {
        let stops = vec![
            GradientStop::new(0.0, Rgb::new(0, 0, 0)),
            GradientStop::new(0.5, Rgb::new(1, 1, 1)),
            GradientStop::new(0.4, Rgb::new(2, 2, 2)),
        ];
        let err = Gradient::new(stops).unwrap_err();
        assert!(err.to_string().contains("stop 2"), "got {}", err);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let stops = vec![GradientStop::new(1.5, Rgb::new(0, 0, 0))];
        assert!(Gradient::new(stops).is_err());
    }

    #[test]
    fn test_rgba8_quantization() {
        let color = Rgba::from_rgb(Rgb::new(255, 0, 128), 0.8);
        assert_eq!(color.to_rgba8(), [255, 0, 128, 204]);
        assert_eq!(Rgba::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_palette_dedupes() {
        let gradient = Gradient::new(vec![
            GradientStop::new(0.0, Rgb::new(10, 10, 10)),
            GradientStop::new(0.5, Rgb::new(10, 10, 10)),
        ])
        .unwrap();
        assert_eq!(gradient.palette(0.8).len(), 2);
    }
}
