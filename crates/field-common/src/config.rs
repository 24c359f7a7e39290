//! Render configuration with partial-merge updates.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, FieldResult};

/// Per-frame rendering parameters shared by every sample point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Radius of each influence blob in kilometers.
    pub influence_radius: f64,
    /// Exponent applied to the normalized distance; higher gives a sharper edge.
    pub falloff_steepness: f64,
    /// Raster resolution hint. Not read by the kernel.
    pub resolution: u32,
    /// Sample value mapped to 0 during normalization.
    pub min_value: f64,
    /// Sample value mapped to 1 during normalization.
    pub max_value: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            influence_radius: 100.0,
            falloff_steepness: 1.0,
            resolution: 256,
            min_value: 0.0,
            max_value: 1.0,
        }
    }
}

/// A partial config update. Unset fields keep their previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfigPatch {
    pub influence_radius: Option<f64>,
    pub falloff_steepness: Option<f64>,
    pub resolution: Option<u32>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl RenderConfigPatch {
    /// Load a patch from YAML.
    pub fn from_yaml(yaml_str: &str) -> FieldResult<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Load a patch from a YAML file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> FieldResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

impl RenderConfig {
    /// Apply a patch over this config, returning the validated result.
    ///
    /// `self` is left untouched when the merged config is invalid.
    pub fn merged(&self, patch: &RenderConfigPatch) -> FieldResult<Self> {
        let merged = Self {
            influence_radius: patch.influence_radius.unwrap_or(self.influence_radius),
            falloff_steepness: patch.falloff_steepness.unwrap_or(self.falloff_steepness),
            resolution: patch.resolution.unwrap_or(self.resolution),
            min_value: patch.min_value.unwrap_or(self.min_value),
            max_value: patch.max_value.unwrap_or(self.max_value),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Check all numeric bounds.
    pub fn validate(&self) -> FieldResult<()> {
        if !self.influence_radius.is_finite() || self.influence_radius <= 0.0 {
            return Err(FieldError::invalid_config(
                "influenceRadius",
                format!("must be a finite value > 0, got {}", self.influence_radius),
            ));
        }
        if !self.falloff_steepness.is_finite() || self.falloff_steepness < 1.0 {
            return Err(FieldError::invalid_config(
                "falloffSteepness",
                format!("must be a finite value >= 1, got {}", self.falloff_steepness),
            ));
        }
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(FieldError::invalid_config(
                "minValue/maxValue",
                "bounds must be finite",
            ));
        }
        if self.max_value <= self.min_value {
            return Err(FieldError::invalid_config(
                "maxValue",
                format!(
                    "must be greater than minValue ({} <= {})",
                    self.max_value, self.min_value
                ),
            ));
        }
        Ok(())
    }

    /// Map a raw sample value into [0, 1] using `minValue`/`maxValue`.
    pub fn normalize_value(&self, value: f64) -> f64 {
        let normalized = (value - self.min_value) / (self.max_value - self.min_value);
        normalized.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_merge_overwrites_only_set_fields() {
        let base = RenderConfig::default();
        let patch = RenderConfigPatch {
            influence_radius: Some(250.0),
            ..Default::default()
        };
        let merged = base.merged(&patch).unwrap();
        assert_eq!(merged.influence_radius, 250.0);
        assert_eq!(merged.falloff_steepness, base.falloff_steepness);
        assert_eq!(merged.resolution, base.resolution);
    }

    #[test]
    fn test_merge_rejects_invalid() {
        let base = RenderConfig::default();
        for patch in [
            RenderConfigPatch {
                influence_radius: Some(0.0),
                ..Default::default()
            },
            RenderConfigPatch {
                falloff_steepness: Some(0.5),
                ..Default::default()
            },
            RenderConfigPatch {
                max_value: Some(-1.0),
                ..Default::default()
            },
        ] {
            let err = base.merged(&patch).unwrap_err();
            assert!(err.is_configuration_error(), "unexpected error: {}", err);
        }
    }

    #[test]
    fn test_normalize_value() {
        let config = RenderConfig {
            min_value: 0.0,
            max_value: 50.0,
            ..Default::default()
        };
        assert_eq!(config.normalize_value(25.0), 0.5);
        assert_eq!(config.normalize_value(-5.0), 0.0);
        assert_eq!(config.normalize_value(80.0), 1.0);

        let identity = RenderConfig::default();
        assert_eq!(identity.normalize_value(0.37), 0.37);
    }

    #[test]
    fn test_patch_from_yaml_camel_case() {
        let yaml = "influenceRadius: 300\nfalloffSteepness: 2.5\n";
        let patch = RenderConfigPatch::from_yaml(yaml).unwrap();
        assert_eq!(patch.influence_radius, Some(300.0));
        assert_eq!(patch.falloff_steepness, Some(2.5));
        assert_eq!(patch.min_value, None);
    }
}
