use thiserror::Error;

#[derive(Error, Debug)]
pub enum RngbiasError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl RngbiasError {
    /// Whether the pipeline may turn this error into a result record
    /// instead of aborting the invocation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Computation(_))
    }
}

pub type Result<T> = std::result::Result<T, RngbiasError>;
