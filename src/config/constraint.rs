use super::traits::{section_error, ConfigSection};
use crate::engines::scoring::ConstraintSpec;
use crate::error::RngbiasError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    /// Constrained feature indices (1-based)
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub features: Vec<usize>,
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub lower_bounds: Vec<f64>,
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub upper_bounds: Vec<f64>,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        // F1-F5 are chi-square statistics with five degrees of freedom, the
        // rest are window counts over a 50-symbol sequence.
        Self {
            features: (1..=12).collect(),
            lower_bounds: vec![0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            upper_bounds: vec![
                20.515, 20.515, 20.515, 20.515, 20.515, 39.0, 20.0, 8.0, 4.0, 12.0, 9.0, 9.0,
            ],
        }
    }
}

impl ConstraintConfig {
    pub fn to_spec(&self) -> Result<ConstraintSpec, RngbiasError> {
        if self.lower_bounds.len() != self.features.len()
            || self.upper_bounds.len() != self.features.len()
        {
            return Err(section_error::<Self>(format!(
                "{} features but {} lower and {} upper bounds",
                self.features.len(),
                self.lower_bounds.len(),
                self.upper_bounds.len()
            )));
        }
        ConstraintSpec::from_parts(&self.features, &self.lower_bounds, &self.upper_bounds)
    }
}

impl ConfigSection for ConstraintConfig {
    fn section_name() -> &'static str {
        "constraint"
    }

    fn validate(&self) -> Result<(), RngbiasError> {
        self.to_spec().map(|_| ())
    }
}
