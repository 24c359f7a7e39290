//! Radial influence blending of sample points.
//!
//! Each active sample spreads a smooth blob of radius `influenceRadius`
//! around itself. Where blobs overlap, values are averaged with weights that
//! favor whichever sample is closest, then boosted so blob edges keep their
//! color.

use std::f64::consts::PI;

use field_common::{GeoPoint, RenderConfig, SamplePoint};
use projection::haversine_distance;

/// Boost applied to the weighted average. Results above 1.0 are expected
/// and are clamped by the color lookup.
pub const INTENSITY_BOOST: f64 = 1.15;

/// Cosine falloff from 1 at the sample to 0 at `radius_km`.
///
/// The normalized distance is raised to `steepness` before shaping, so
/// larger exponents hold the blob near 1 longer and drop off harder at the
/// edge.
pub fn falloff(distance_km: f64, radius_km: f64, steepness: f64) -> f64 {
    if distance_km >= radius_km {
        return 0.0;
    }
    let nd = (distance_km / radius_km).powf(steepness);
    0.5 + 0.5 * (nd * PI).cos()
}

/// Running sums for the influence-weighted average.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlendAccumulator {
    pub total_influence: f64,
    pub total_weight: f64,
}

impl BlendAccumulator {
    /// Add one sample with normalized `value` and its `falloff` at the query.
    pub fn add(&mut self, value: f64, falloff: f64) {
        let influence = value * falloff;
        let weight = falloff * falloff;
        self.total_influence += influence * weight;
        self.total_weight += weight;
    }

    /// Boosted weighted average, or 0 when nothing contributed.
    pub fn raw_value(&self) -> f64 {
        if self.total_weight > 0.0 {
            self.total_influence / self.total_weight * INTENSITY_BOOST
        } else {
            0.0
        }
    }
}

/// Blended intensity at `location` over all samples.
///
/// Sample values are normalized through the config's min/max bounds first;
/// samples that normalize to 0 are skipped entirely. Samples with a
/// non-finite value or position contribute nothing.
pub fn blend_intensity(location: GeoPoint, points: &[SamplePoint], config: &RenderConfig) -> f64 {
    let mut acc = BlendAccumulator::default();

    for point in points {
        let value = config.normalize_value(point.value);
        if value.is_nan() || value <= 0.0 {
            continue;
        }

        let distance = haversine_distance(location, point.position());
        if distance.is_nan() || distance >= config.influence_radius {
            continue;
        }

        acc.add(
            value,
            falloff(distance, config.influence_radius, config.falloff_steepness),
        );
    }

    acc.raw_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falloff_endpoints() {
        assert_eq!(falloff(0.0, 100.0, 1.0), 1.0);
        assert!((falloff(50.0, 100.0, 1.0) - 0.5).abs() < 1e-12);
        assert_eq!(falloff(100.0, 100.0, 1.0), 0.0);
        assert_eq!(falloff(150.0, 100.0, 3.0), 0.0);
    }

    #[test]
    fn test_falloff_steepness_sharpens() {
        let soft = falloff(50.0, 100.0, 1.0);
        let sharp = falloff(50.0, 100.0, 4.0);
        assert!(sharp > soft, "sharp {} should exceed soft {}", sharp, soft);

        // Near the edge the sharper curve still reaches zero
        assert!(falloff(99.9, 100.0, 4.0) < 0.01);
    }

    #[test]
    fn test_falloff_is_monotonic() {
        let mut prev = 1.0;
        for step in 1..100 {
            let f = falloff(step as f64, 100.0, 2.0);
            assert!(f <= prev);
            prev = f;
        }
    }

    #[test]
    fn test_accumulator_empty() {
        assert_eq!(BlendAccumulator::default().raw_value(), 0.0);
    }

    #[test]
    fn test_accumulator_single_sample() {
        let mut acc = BlendAccumulator::default();
        acc.add(0.5, 1.0);
        assert!((acc.raw_value() - 0.5 * INTENSITY_BOOST).abs() < 1e-12);
    }

    #[test]
    fn test_accumulator_nearer_dominates() {
        // Equal falloffs average evenly, unequal ones lean toward the stronger
        let mut even = BlendAccumulator::default();
        even.add(1.0, 0.5);
        even.add(0.0001, 0.5);

        let mut biased = BlendAccumulator::default();
        biased.add(1.0, 0.9);
        biased.add(0.0001, 0.1);

        assert!(biased.raw_value() > even.raw_value());
    }
}
