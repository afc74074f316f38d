// src/engines/scoring/penalty.rs
use crate::types::{FeatureId, FeatureVector, FEATURE_COUNT};

/// Per-feature alpha/beta/gamma parameters of the bias model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasParameters {
    alpha: [f64; FEATURE_COUNT],
    beta: [f64; FEATURE_COUNT],
    gamma: [f64; FEATURE_COUNT],
}

impl BiasParameters {
    pub fn new(
        alpha: [f64; FEATURE_COUNT],
        beta: [f64; FEATURE_COUNT],
        gamma: [f64; FEATURE_COUNT],
    ) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn alpha(&self, id: FeatureId) -> f64 {
        self.alpha[id.index()]
    }

    pub fn beta(&self, id: FeatureId) -> f64 {
        self.beta[id.index()]
    }

    pub fn gamma(&self, id: FeatureId) -> f64 {
        self.gamma[id.index()]
    }

    /// Weighted distance of `value` outside `[alpha, beta]`; 0 inside.
    pub fn penalty(&self, id: FeatureId, value: f64) -> f64 {
        let below = self.alpha(id) - value;
        let above = value - self.beta(id);
        self.gamma(id) * below.max(above).max(0.0)
    }

    /// Penalty of every feature, in feature order
    pub fn penalties(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for (id, value) in features.iter() {
            out[id.index()] = self.penalty(id, value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> BiasParameters {
        BiasParameters::new([2.0; FEATURE_COUNT], [5.0; FEATURE_COUNT], [3.0; FEATURE_COUNT])
    }

    #[test]
    fn test_penalty_zero_inside_range() {
        let id = FeatureId::new(1).unwrap();
        assert_eq!(params().penalty(id, 2.0), 0.0);
        assert_eq!(params().penalty(id, 3.5), 0.0);
        assert_eq!(params().penalty(id, 5.0), 0.0);
    }

    #[test]
    fn test_penalty_scales_distance_outside_range() {
        let id = FeatureId::new(4).unwrap();
        assert_eq!(params().penalty(id, 0.0), 6.0);
        assert_eq!(params().penalty(id, 9.0), 12.0);
    }
}
