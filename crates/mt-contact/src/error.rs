//! Error types for mt-contact.

use mt_core::{ConfigError, Tick};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("invalid contact configuration: {0}")]
    Config(#[from] ConfigError),

    /// Weighted partner selection ran over a pool whose weights cannot be
    /// normalized.  The engine that raised it is unusable afterwards.
    #[error("partner selection at {tick} over {candidates} candidates has total weight {total_weight}")]
    SamplingDomain {
        tick:         Tick,
        candidates:   usize,
        total_weight: f64,
    },
}

pub type ContactResult<T> = Result<T, ContactError>;
