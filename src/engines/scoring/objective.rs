// src/engines/scoring/objective.rs
use super::penalty::BiasParameters;
use crate::error::{Result, RngbiasError};
use crate::types::{FeatureId, FeatureVector};

/// Ordered objective groups, each a list of features to sum. Indices may
/// repeat within and across groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveSpec {
    groups: Vec<Vec<FeatureId>>,
}

impl ObjectiveSpec {
    pub fn new(groups: Vec<Vec<FeatureId>>) -> Self {
        Self { groups }
    }

    pub fn from_indices(groups: &[Vec<usize>]) -> Result<Self> {
        let groups = groups
            .iter()
            .enumerate()
            .map(|(g, group)| {
                group
                    .iter()
                    .map(|&index| {
                        FeatureId::new(index).ok_or_else(|| {
                            RngbiasError::Configuration(format!(
                                "objective group {} references feature {}, expected 1..=15",
                                g, index
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[Vec<FeatureId>] {
        &self.groups
    }
}

/// Sums bias-weighted features into one scalar per objective group.
pub struct ObjectiveAggregator;

impl ObjectiveAggregator {
    pub fn aggregate(
        features: &FeatureVector,
        spec: &ObjectiveSpec,
        bias: &BiasParameters,
    ) -> Vec<f64> {
        let penalties = bias.penalties(features);

        spec.groups()
            .iter()
            .map(|group| {
                group
                    .iter()
                    .fold(0.0, |acc, id| acc + penalties[id.index()])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FEATURE_COUNT;

    fn ids(numbers: &[usize]) -> Vec<FeatureId> {
        numbers.iter().map(|&n| FeatureId::new(n).unwrap()).collect()
    }

    #[test]
    fn test_groups_sum_weighted_penalties_in_order() {
        let mut values = [0.0; FEATURE_COUNT];
        values[0] = 10.0; // penalty 1 * (10 - 4)
        values[1] = 1.0; // penalty 2 * (2 - 1)
        let features = FeatureVector::new(values);

        let mut alpha = [0.0; FEATURE_COUNT];
        alpha[1] = 2.0;
        let mut gamma = [1.0; FEATURE_COUNT];
        gamma[1] = 2.0;
        let bias = BiasParameters::new(alpha, [4.0; FEATURE_COUNT], gamma);

        let spec = ObjectiveSpec::new(vec![ids(&[1, 2]), ids(&[2]), ids(&[1, 1]), vec![]]);
        let objectives = ObjectiveAggregator::aggregate(&features, &spec, &bias);

        assert_eq!(objectives, vec![8.0, 2.0, 12.0, 0.0]);
    }

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        assert!(ObjectiveSpec::from_indices(&[vec![1, 15]]).is_ok());
        let err = ObjectiveSpec::from_indices(&[vec![1], vec![16]]).unwrap_err();
        assert!(matches!(err, RngbiasError::Configuration(_)));
        assert!(ObjectiveSpec::from_indices(&[vec![0]]).is_err());
    }
}
