//! Pluggable sampling strategies for the stochastic-walk engine.
//!
//! A walk is configured by three samplers:
//!
//! | Role                  | Trait                    | Input               |
//! |-----------------------|--------------------------|---------------------|
//! | flight length         | [`SampleDistribution`]   | agents starting a leg |
//! | velocity              | [`VelocityDistribution`] | their new flight lengths |
//! | wait time (optional)  | [`SampleDistribution`]   | agents starting a pause |
//!
//! Both traits map an input slice to an output `Vec` of the same length.
//! They hold no mutable state; all randomness comes from the engine's
//! [`SimRng`], so swapping one sampler for another never changes how the
//! engine itself consumes random numbers.
//!
//! Flight samplers must return strictly positive lengths.

use mt_core::{AgentId, ConfigResult, SimRng, validate};
use rand::distributions::OpenClosed01;

/// Draws one sample per agent.
pub trait SampleDistribution {
    fn sample(&self, agents: &[AgentId], rng: &mut SimRng) -> Vec<f64>;
}

/// Draws one velocity per freshly sampled flight length.
pub trait VelocityDistribution {
    fn sample(&self, flights: &[f64], rng: &mut SimRng) -> Vec<f64>;
}

// ── Constant ──────────────────────────────────────────────────────────────────

/// Always returns the same value.  Consumes no randomness.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constant(pub f64);

impl SampleDistribution for Constant {
    fn sample(&self, agents: &[AgentId], _rng: &mut SimRng) -> Vec<f64> {
        vec![self.0; agents.len()]
    }
}

impl VelocityDistribution for Constant {
    fn sample(&self, flights: &[f64], _rng: &mut SimRng) -> Vec<f64> {
        vec![self.0; flights.len()]
    }
}

// ── Uniform ───────────────────────────────────────────────────────────────────

/// Uniform on `[min, max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Uniform {
    pub min: f64,
    pub max: f64,
}

impl Uniform {
    pub fn new(param: &'static str, min: f64, max: f64) -> ConfigResult<Self> {
        validate::range(param, min, max)?;
        Ok(Self { min, max })
    }

    fn draw(&self, n: usize, rng: &mut SimRng) -> Vec<f64> {
        (0..n).map(|_| rng.uniform(self.min, self.max)).collect()
    }
}

impl SampleDistribution for Uniform {
    fn sample(&self, agents: &[AgentId], rng: &mut SimRng) -> Vec<f64> {
        self.draw(agents.len(), rng)
    }
}

/// Velocities independent of the flight length.
impl VelocityDistribution for Uniform {
    fn sample(&self, flights: &[f64], rng: &mut SimRng) -> Vec<f64> {
        self.draw(flights.len(), rng)
    }
}

// ── UniformLength ─────────────────────────────────────────────────────────────

/// Uniform on `(0, max]`, so a leg is never empty.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformLength {
    pub max: f64,
}

impl UniformLength {
    pub fn new(param: &'static str, max: f64) -> ConfigResult<Self> {
        validate::positive(param, max)?;
        Ok(Self { max })
    }
}

impl SampleDistribution for UniformLength {
    fn sample(&self, agents: &[AgentId], rng: &mut SimRng) -> Vec<f64> {
        agents
            .iter()
            .map(|_| {
                let u: f64 = rng.sample(&OpenClosed01);
                self.max * u
            })
            .collect()
    }
}

// ── TruncatedPowerLaw ─────────────────────────────────────────────────────────

/// `p(x) ∝ x^exponent` on `[min, max]`, sampled by inverse transform.
///
/// Lévy-walk flights and pauses use negative exponents (e.g. `-2.6`) with
/// `min = 1`, which gives many short legs and rare long ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TruncatedPowerLaw {
    pub exponent: f64,
    pub min:      f64,
    pub max:      f64,
}

impl TruncatedPowerLaw {
    pub fn new(param: &'static str, exponent: f64, min: f64, max: f64) -> ConfigResult<Self> {
        validate::power_law(param, exponent, min, max)?;
        Ok(Self { exponent, min, max })
    }
}

impl SampleDistribution for TruncatedPowerLaw {
    fn sample(&self, agents: &[AgentId], rng: &mut SimRng) -> Vec<f64> {
        agents
            .iter()
            .map(|_| rng.truncated_power_law(self.exponent, self.min, self.max))
            .collect()
    }
}

// ── SqrtScaled ────────────────────────────────────────────────────────────────

/// `velocity = sqrt(flight) / divisor`: longer flights are flown faster.
/// Deterministic given the flights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SqrtScaled {
    pub divisor: f64,
}

impl Default for SqrtScaled {
    fn default() -> Self {
        Self { divisor: 10.0 }
    }
}

impl VelocityDistribution for SqrtScaled {
    fn sample(&self, flights: &[f64], _rng: &mut SimRng) -> Vec<f64> {
        flights.iter().map(|fl| fl.sqrt() / self.divisor).collect()
    }
}

// ── PerAgentUniform ───────────────────────────────────────────────────────────

/// Uniform on an individual `[min_i, max_i)` range per agent.
///
/// Gives each agent its own characteristic travel scale (heterogeneous
/// Lévy walk).
#[derive(Clone, Debug, PartialEq)]
pub struct PerAgentUniform {
    min: Vec<f64>,
    max: Vec<f64>,
}

impl PerAgentUniform {
    /// `min` and `max` must have equal length (one entry per agent) and
    /// describe non-empty, non-negative ranges.
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> ConfigResult<Self> {
        validate::per_agent("per-agent flight range", min.len(), max.len())?;
        for (&lo, &hi) in min.iter().zip(&max) {
            validate::range("per-agent flight range", lo, hi)?;
        }
        Ok(Self { min, max })
    }

    pub fn len(&self) -> usize {
        self.min.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    /// The `[min, max)` range of `agent`.
    pub fn range(&self, agent: AgentId) -> (f64, f64) {
        (self.min[agent.index()], self.max[agent.index()])
    }
}

impl SampleDistribution for PerAgentUniform {
    fn sample(&self, agents: &[AgentId], rng: &mut SimRng) -> Vec<f64> {
        agents
            .iter()
            .map(|a| rng.uniform(self.min[a.index()], self.max[a.index()]))
            .collect()
    }
}
