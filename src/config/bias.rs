use super::traits::{section_error, ConfigSection};
use crate::engines::scoring::BiasParameters;
use crate::error::RngbiasError;
use crate::types::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// Per-feature cognitive bias parameters. `alpha..=beta` is the range a
/// person expects from a random sequence, `gamma` weighs the distance
/// outside of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasConfig {
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub alpha: Vec<f64>,
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub beta: Vec<f64>,
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub gamma: Vec<f64>,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            alpha: vec![2.0, 2.0, 2.0, 2.0, 2.0, 27.0, 5.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            beta: vec![5.0, 5.0, 5.0, 5.0, 5.0, 30.0, 8.0, 1.0, 0.0, 3.0, 0.0, 1.0, 2.0, 0.0, 0.0],
            gamma: vec![3.0, 3.0, 3.0, 3.0, 3.0, 1.0, 1.0, 3.0, 10.0, 4.0, 4.0, 4.0, 4.0, 4.0, 4.0],
        }
    }
}

impl BiasConfig {
    pub fn to_parameters(&self) -> Result<BiasParameters, RngbiasError> {
        let alpha = Self::fixed("alpha", &self.alpha)?;
        let beta = Self::fixed("beta", &self.beta)?;
        let gamma = Self::fixed("gamma", &self.gamma)?;
        Ok(BiasParameters::new(alpha, beta, gamma))
    }

    fn fixed(name: &str, values: &[f64]) -> Result<[f64; FEATURE_COUNT], RngbiasError> {
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(section_error::<Self>(format!(
                "{}[{}] is not a finite number",
                name, pos
            )));
        }
        values.try_into().map_err(|_| {
            section_error::<Self>(format!(
                "{} must have {} entries, got {}",
                name,
                FEATURE_COUNT,
                values.len()
            ))
        })
    }
}

impl ConfigSection for BiasConfig {
    fn section_name() -> &'static str {
        "bias"
    }

    fn validate(&self) -> Result<(), RngbiasError> {
        self.to_parameters().map(|_| ())
    }
}
