use mt_contact::ContactError;
use mt_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("trace configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Mobility(#[from] MobilityError),

    #[error(transparent)]
    Contact(#[from] ContactError),
}

pub type SimResult<T> = Result<T, SimError>;
