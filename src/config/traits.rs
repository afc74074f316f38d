use crate::error::RngbiasError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), RngbiasError>;
}

/// Build a configuration error prefixed with the section it came from.
pub(crate) fn section_error<S: ConfigSection>(message: impl AsRef<str>) -> RngbiasError {
    RngbiasError::Configuration(format!("[{}] {}", S::section_name(), message.as_ref()))
}
