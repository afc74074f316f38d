pub mod traits;
pub mod json_list;
pub mod sequence;
pub mod objective;
pub mod constraint;
pub mod bias;
pub mod manager;

pub use manager::{AppConfig, ConfigManager, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use sequence::SequenceConfig;
pub use objective::ObjectiveConfig;
pub use constraint::ConstraintConfig;
pub use bias::BiasConfig;
