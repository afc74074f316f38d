// src/engines/scoring/constraint.rs
use crate::error::{Result, RngbiasError};
use crate::types::{FeatureId, FeatureVector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintBound {
    pub feature: FeatureId,
    pub lower: f64,
    pub upper: f64,
}

impl ConstraintBound {
    /// Inclusive on both ends. NaN never satisfies a bound.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSpec {
    entries: Vec<ConstraintBound>,
}

impl ConstraintSpec {
    pub fn new(entries: Vec<ConstraintBound>) -> Self {
        Self { entries }
    }

    /// Zip parallel index and bound lists. Lengths are truncated to the
    /// shortest list; callers check them beforehand.
    pub fn from_parts(features: &[usize], lower: &[f64], upper: &[f64]) -> Result<Self> {
        let entries = features
            .iter()
            .zip(lower.iter().zip(upper))
            .enumerate()
            .map(|(i, (&index, (&lower, &upper)))| {
                let feature = FeatureId::new(index).ok_or_else(|| {
                    RngbiasError::Configuration(format!(
                        "constraint {} references feature {}, expected 1..=15",
                        i, index
                    ))
                })?;
                if lower.is_nan() || upper.is_nan() || lower > upper {
                    return Err(RngbiasError::Configuration(format!(
                        "constraint {} on {} has invalid bounds [{}, {}]",
                        i, feature, lower, upper
                    )));
                }
                Ok(ConstraintBound { feature, lower, upper })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ConstraintBound] {
        &self.entries
    }
}

/// Flags features outside their configured bounds, one unit per violated
/// entry.
pub struct ConstraintEvaluator;

impl ConstraintEvaluator {
    pub fn evaluate(features: &FeatureVector, spec: &ConstraintSpec) -> Vec<u32> {
        spec.entries()
            .iter()
            .map(|bound| {
                let value = features.get(bound.feature);
                if bound.contains(value) {
                    0
                } else {
                    log::debug!(
                        "{} = {} outside [{}, {}]",
                        bound.feature, value, bound.lower, bound.upper
                    );
                    1
                }
            })
            .collect()
    }
}
