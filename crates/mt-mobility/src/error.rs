use mt_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MobilityError {
    #[error("invalid mobility configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
