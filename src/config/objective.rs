use super::traits::ConfigSection;
use crate::engines::scoring::ObjectiveSpec;
use crate::error::RngbiasError;
use crate::types::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveConfig {
    /// Feature indices (1-based) summed into each objective
    #[serde(deserialize_with = "super::json_list::deserialize")]
    pub groups: Vec<Vec<usize>>,
}

impl Default for ObjectiveConfig {
    fn default() -> Self {
        Self {
            groups: vec![(1..=FEATURE_COUNT).collect()],
        }
    }
}

impl ObjectiveConfig {
    pub fn to_spec(&self) -> Result<ObjectiveSpec, RngbiasError> {
        ObjectiveSpec::from_indices(&self.groups)
    }
}

impl ConfigSection for ObjectiveConfig {
    fn section_name() -> &'static str {
        "objective"
    }

    fn validate(&self) -> Result<(), RngbiasError> {
        self.to_spec().map(|_| ())
    }
}
