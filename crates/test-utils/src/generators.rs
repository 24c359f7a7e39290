//! Deterministic sample point generators.
//!
//! These create reproducible clustered point sets for tests and benchmarks.
//! The same seed always yields the same points.

use field_common::SamplePoint;

/// Small linear congruential generator so generated sets are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Creates `count` samples clustered around `clusters` centers.
///
/// Centers are spread between ±60° latitude; each sample sits within a few
/// degrees of its center with a value that decays away from it.
///
/// # Example
///
/// ```
/// use test_utils::clustered_points;
///
/// let points = clustered_points(100, 4, 7);
/// assert_eq!(points.len(), 100);
/// assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.value)));
/// ```
pub fn clustered_points(count: usize, clusters: usize, seed: u64) -> Vec<SamplePoint> {
    let mut rng = Lcg(seed);
    let clusters = clusters.max(1);

    let centers: Vec<(f64, f64)> = (0..clusters)
        .map(|_| (rng.next_f64() * 360.0 - 180.0, rng.next_f64() * 120.0 - 60.0))
        .collect();

    (0..count)
        .map(|i| {
            let (lng, lat) = centers[i % clusters];
            let dx = (rng.next_f64() - 0.5) * 6.0;
            let dy = (rng.next_f64() - 0.5) * 6.0;
            let spread = (dx * dx + dy * dy).sqrt() / 4.25;
            let value = ((1.0 - spread) * (0.5 + 0.5 * rng.next_f64())).clamp(0.0, 1.0);
            let lng = (lng + dx + 180.0).rem_euclid(360.0) - 180.0;
            SamplePoint::new(lng, lat + dy, value)
        })
        .collect()
}

/// Creates `count` full-intensity samples along the equator, one degree apart.
pub fn equator_line(count: usize) -> Vec<SamplePoint> {
    (0..count)
        .map(|i| SamplePoint::new(i as f64 - 180.0, 0.0, 1.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clustered_points_deterministic() {
        let a = clustered_points(50, 3, 42);
        let b = clustered_points(50, 3, 42);
        assert_eq!(a, b);
        assert_ne!(a, clustered_points(50, 3, 43));
    }

    #[test]
    fn test_clustered_points_bounds() {
        for p in clustered_points(250, 5, 1) {
            assert!(p.longitude >= -180.0 && p.longitude < 180.0);
            assert!(p.latitude.abs() < 64.0);
            assert!((0.0..=1.0).contains(&p.value));
        }
    }
}
