use super::traits::{section_error, ConfigSection};
use crate::data::InputFormat;
use crate::error::RngbiasError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Expected sequence length
    pub variables: usize,
    pub format: InputFormat,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            variables: 50,
            format: InputFormat::Auto,
        }
    }
}

impl ConfigSection for SequenceConfig {
    fn section_name() -> &'static str {
        "sequence"
    }

    fn validate(&self) -> Result<(), RngbiasError> {
        if self.variables == 0 {
            return Err(section_error::<Self>("variables must be at least 1"));
        }
        Ok(())
    }
}
