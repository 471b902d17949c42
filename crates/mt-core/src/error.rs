//! Construction-time configuration errors.
//!
//! Every engine validates its parameters when it is built and reports the
//! first violation as a `ConfigError`.  Once built, an engine never fails
//! because of its configuration.  Sub-crates wrap `ConfigError` in their own
//! error enums via `From`.

use thiserror::Error;

/// A construction parameter outside its mathematical domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population must contain at least one agent")]
    EmptyPopulation,

    #[error("population of {0} agents exceeds the supported maximum")]
    PopulationTooLarge(usize),

    #[error("at least {required} agents are required, got {got}")]
    TooFewAgents { required: usize, got: usize },

    #[error("group {group} has no members")]
    EmptyGroup { group: usize },

    #[error("{param} must be positive and finite, got {value}")]
    NonPositive { param: &'static str, value: f64 },

    #[error("{param} must be non-negative and finite, got {value}")]
    Negative { param: &'static str, value: f64 },

    #[error("{param} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        param: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },

    #[error("{param} range is empty: min {min} > max {max}")]
    InvalidRange {
        param: &'static str,
        min:   f64,
        max:   f64,
    },

    #[error("{param} exponent must not be -1 (power law cannot be normalized)")]
    SingularExponent { param: &'static str },

    #[error("velocity {velocity} exceeds flight distance {distance}; each tick must stay within one leg")]
    VelocityExceedsDistance { velocity: f64, distance: f64 },

    #[error("cannot draw {requested} distinct edges from {available} node pairs")]
    TooManyEdges { requested: usize, available: usize },

    #[error("{what} length {got} does not match population {expected}")]
    LengthMismatch {
        what:     &'static str,
        expected: usize,
        got:      usize,
    },
}

/// Shorthand result type for construction-time validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
