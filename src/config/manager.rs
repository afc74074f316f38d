use super::{
    bias::BiasConfig, constraint::ConstraintConfig, objective::ObjectiveConfig,
    sequence::SequenceConfig, traits::ConfigSection,
};
use crate::engines::scoring::ScoringConfig;
use crate::error::RngbiasError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix of environment variables read by the loader, e.g.
/// `RNGBIAS_SEQUENCE__VARIABLES=30` or `RNGBIAS_BIAS__GAMMA='[...]'`.
pub const ENV_PREFIX: &str = "RNGBIAS";

/// Config file looked up when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sequence: SequenceConfig,
    pub objective: ObjectiveConfig,
    pub constraint: ConstraintConfig,
    pub bias: BiasConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RngbiasError> {
        self.sequence.validate()?;
        self.objective.validate()?;
        self.constraint.validate()?;
        self.bias.validate()?;
        Ok(())
    }

    /// Turn the raw settings into the immutable value the scoring pipeline
    /// runs on. Any inconsistency is reported as a configuration error.
    pub fn resolve(&self) -> Result<ScoringConfig, RngbiasError> {
        self.sequence.validate()?;
        Ok(ScoringConfig {
            variables: self.sequence.variables,
            objectives: self.objective.to_spec()?,
            constraints: self.constraint.to_spec()?,
            bias: self.bias.to_parameters()?,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, RngbiasError> {
        toml::to_string_pretty(self)
            .map_err(|e| RngbiasError::Configuration(format!("Failed to serialize: {}", e)))
    }
}

/// Layers configuration sources, lowest priority first: built-in defaults,
/// a TOML/JSON file, `RNGBIAS_*` environment variables, explicit overrides.
pub struct ConfigManager {
    file: Option<PathBuf>,
    file_required: bool,
    env_prefix: Option<String>,
    overrides: Vec<(String, config::Value)>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            file_required: false,
            env_prefix: Some(ENV_PREFIX.to_string()),
            overrides: Vec::new(),
        }
    }

    /// Read settings from `path`, which then has to exist.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self.file_required = true;
        self
    }

    pub fn without_file(mut self) -> Self {
        self.file = None;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Override a dotted key such as `objective.groups`. List settings take
    /// JSON text.
    pub fn set_override<V: Into<config::Value>>(mut self, key: &str, value: V) -> Self {
        self.overrides.push((key.to_string(), value.into()));
        self
    }

    pub fn set_override_option<V: Into<config::Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set_override(key, value),
            None => self,
        }
    }

    pub fn load(&self) -> Result<AppConfig, RngbiasError> {
        let mut builder = config::Config::builder();

        if let Some(path) = &self.file {
            log::debug!("Reading config file {} (required: {})", path.display(), self.file_required);
            builder = builder.add_source(config::File::from(path.as_path()).required(self.file_required));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        for (key, value) in &self.overrides {
            builder = builder
                .set_override(key.as_str(), value.clone())
                .map_err(|e| RngbiasError::Configuration(format!("Invalid override {}: {}", key, e)))?;
        }

        let config: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| RngbiasError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        log::debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), RngbiasError> {
        let toml_str = config.to_toml_string()?;

        std::fs::write(path, toml_str)
            .map_err(|e| RngbiasError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves() {
        let scoring = AppConfig::default().resolve().unwrap();
        assert_eq!(scoring.variables, 50);
        assert_eq!(scoring.objectives.groups().len(), 1);
        assert_eq!(scoring.objectives.groups()[0].len(), 15);
        assert_eq!(scoring.constraints.entries().len(), 12);
    }

    #[test]
    fn test_overrides_accept_json_lists() {
        let config = ConfigManager::new()
            .without_file()
            .without_env()
            .set_override("objective.groups", "[[1, 2], [6]]")
            .set_override("sequence.variables", 20i64)
            .load()
            .unwrap();

        assert_eq!(config.objective.groups, vec![vec![1, 2], vec![6]]);
        assert_eq!(config.sequence.variables, 20);
        assert_eq!(config.bias, BiasConfig::default());
    }

    #[test]
    fn test_out_of_range_index_is_configuration_error() {
        let err = ConfigManager::new()
            .without_file()
            .without_env()
            .set_override("objective.groups", "[[1, 16]]")
            .load()
            .unwrap_err();

        assert!(matches!(err, RngbiasError::Configuration(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
