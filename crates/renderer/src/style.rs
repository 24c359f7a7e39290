//! Gradient table files.
//!
//! A style document names a set of banded stops with hex colors:
//!
//! ```json
//! {
//!   "name": "precipitation",
//!   "stops": [
//!     { "threshold": 0.0, "color": "#82C8FF", "label": "Light" },
//!     { "threshold": 0.8, "color": "#E61E1E", "label": "Heavy" }
//!   ]
//! }
//! ```

use field_common::{FieldError, FieldResult};
use serde::{Deserialize, Serialize};

use crate::gradient::{Gradient, GradientStop, Rgb};

/// Gradient style loaded from JSON
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GradientStyle {
    pub name: String,
    pub description: Option<String>,
    pub stops: Vec<StyleStop>,
}

/// A single stop in a style file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleStop {
    pub threshold: f64,
    pub color: String,
    pub label: Option<String>,
}

impl GradientStyle {
    /// Load style from JSON string
    pub fn from_json(json_str: &str) -> FieldResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Load style from file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> FieldResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Describe an existing gradient as a style document.
    pub fn from_gradient(name: &str, gradient: &Gradient) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            stops: gradient
                .stops()
                .iter()
                .map(|stop| StyleStop {
                    threshold: stop.threshold,
                    color: rgb_to_hex(stop.color),
                    label: None,
                })
                .collect(),
        }
    }

    /// Build the validated gradient. Stops keep file order.
    pub fn to_gradient(&self) -> FieldResult<Gradient> {
        let stops = self
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| -> FieldResult<GradientStop> {
                let (r, g, b) = hex_to_rgb(&stop.color).ok_or_else(|| {
                    FieldError::InvalidGradient(format!(
                        "stop {} has invalid color '{}'",
                        i, stop.color
                    ))
                })?;
                Ok(GradientStop::new(stop.threshold, Rgb::new(r, g, b)))
            })
            .collect::<FieldResult<Vec<_>>>()?;

        Gradient::new(stops)
    }
}

/// Parse hex color string to RGB
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Format RGB as `#RRGGBB`
pub fn rgb_to_hex(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}
