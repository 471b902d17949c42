//! Parameter checks shared by every engine constructor.
//!
//! Each helper returns the first violated constraint as a [`ConfigError`]
//! naming the parameter, so constructors read as a flat list of `?` calls.

use crate::ids::MAX_AGENTS;
use crate::{ConfigError, ConfigResult};

/// `n` agents, `1 <= n <= MAX_AGENTS`.
pub fn population(n: usize) -> ConfigResult<()> {
    if n == 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    if n > MAX_AGENTS {
        return Err(ConfigError::PopulationTooLarge(n));
    }
    Ok(())
}

/// Finite and strictly positive.
pub fn positive(param: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { param, value })
    }
}

/// Finite and `>= 0`.
pub fn non_negative(param: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { param, value })
    }
}

/// Within the closed interval `[0, 1]`.
pub fn unit_interval(param: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { param, value, min: 0.0, max: 1.0 })
    }
}

/// A probability.  Alias of [`unit_interval`] for readability at call sites.
#[inline]
pub fn probability(param: &'static str, value: f64) -> ConfigResult<()> {
    unit_interval(param, value)
}

/// A non-negative `[min, max]` range with `min <= max`.
pub fn range(param: &'static str, min: f64, max: f64) -> ConfigResult<()> {
    non_negative(param, min)?;
    non_negative(param, max)?;
    if min > max {
        return Err(ConfigError::InvalidRange { param, min, max });
    }
    Ok(())
}

/// A truncated power law `x^exponent` on `[min, max]`.
pub fn power_law(param: &'static str, exponent: f64, min: f64, max: f64) -> ConfigResult<()> {
    if !exponent.is_finite() {
        return Err(ConfigError::OutOfRange {
            param,
            value: exponent,
            min: f64::MIN,
            max: f64::MAX,
        });
    }
    if exponent == -1.0 {
        return Err(ConfigError::SingularExponent { param });
    }
    positive(param, min)?;
    positive(param, max)?;
    if min > max {
        return Err(ConfigError::InvalidRange { param, min, max });
    }
    Ok(())
}

/// A per-agent vector must have one entry per agent.
pub fn per_agent(what: &'static str, expected: usize, got: usize) -> ConfigResult<()> {
    if expected == got {
        Ok(())
    } else {
        Err(ConfigError::LengthMismatch { what, expected, got })
    }
}
