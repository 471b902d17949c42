//! Named mobility models built on [`StochasticWalk`].
//!
//! | Model                               | Flight                    | Velocity          | Wait              |
//! |-------------------------------------|---------------------------|-------------------|-------------------|
//! | [`random_walk`]                     | constant `distance`       | constant `velocity` | none            |
//! | [`truncated_levy_walk`]             | power law on `[1, max]`   | `√flight / 10`    | power law or none |
//! | [`heterogeneous_truncated_levy_walk`] | per-agent uniform range | `√flight / 10`    | power law         |
//! | [`random_direction`]                | uniform `[0, max side)`   | uniform range     | uniform or none   |
//!
//! Parameter structs carry the customary defaults, so
//! `truncated_levy_walk(n, bounds, &LevyWalkParams::default(), rng)` is the
//! classic configuration.

use log::debug;
use mt_core::{AgentId, Bounds, ConfigError, SimRng, validate};

use crate::distribution::{
    Constant, PerAgentUniform, SampleDistribution, SqrtScaled, TruncatedPowerLaw, Uniform, UniformLength,
};
use crate::walk::StochasticWalk;
use crate::MobilityResult;

/// Power-law exponent of the per-agent flight caps in the heterogeneous walk.
pub const FLIGHT_CAP_EXPONENT: f64 = -1.8;

/// Smallest per-agent flight cap in the heterogeneous walk.
pub const MIN_FLIGHT_CAP: f64 = 10.0;

/// An agent's shortest flight is this fraction of its cap.
pub const FLIGHT_FLOOR_RATIO: f64 = 0.1;

// ── Parameter structs ─────────────────────────────────────────────────────────

/// A `[min, max]` velocity range in distance units per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VelocityRange {
    pub min: f64,
    pub max: f64,
}

impl Default for VelocityRange {
    fn default() -> Self {
        Self { min: 0.1, max: 1.0 }
    }
}

impl VelocityRange {
    pub fn to_uniform(self) -> MobilityResult<Uniform> {
        Ok(Uniform::new("velocity", self.min, self.max)?)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RandomWalkParams {
    pub velocity: f64,
    pub distance: f64,
}

impl Default for RandomWalkParams {
    fn default() -> Self {
        Self { velocity: 1.0, distance: 1.0 }
    }
}

/// Truncated Lévy walk.  The wait distribution is used only when both
/// `wait_exponent` and `wait_max` are set; a `wait_max` of `0` also disables
/// pauses, any other value must be positive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct LevyWalkParams {
    pub flight_exponent: f64,
    pub flight_max:      f64,
    pub wait_exponent:   Option<f64>,
    pub wait_max:        Option<f64>,
}

impl Default for LevyWalkParams {
    fn default() -> Self {
        Self {
            flight_exponent: -2.6,
            flight_max:      50.0,
            wait_exponent:   Some(-1.8),
            wait_max:        Some(100.0),
        }
    }
}

impl LevyWalkParams {
    fn wait_distribution(&self) -> MobilityResult<Option<TruncatedPowerLaw>> {
        match (self.wait_exponent, wait_max(self.wait_max)?) {
            (Some(exp), Some(max)) => Ok(Some(TruncatedPowerLaw::new("wait", exp, 1.0, max)?)),
            _ => Ok(None),
        }
    }
}

/// Random direction.  `wait_max` of `None` or `0` disables pauses.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RandomDirectionParams {
    pub velocity: VelocityRange,
    pub wait_max: Option<f64>,
}

/// `Some(max)` for a positive maximum wait, `None` when pausing is off.
pub(crate) fn wait_max(value: Option<f64>) -> MobilityResult<Option<f64>> {
    match value {
        Some(w) if w != 0.0 => {
            validate::positive("wait_max", w)?;
            Ok(Some(w))
        }
        _ => Ok(None),
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

/// Fixed-length legs at a fixed velocity.
///
/// Fails if `velocity > distance`: one tick may not cover more than one leg.
pub fn random_walk(
    agent_count: usize,
    bounds:      Bounds,
    params:      &RandomWalkParams,
    rng:         SimRng,
) -> MobilityResult<StochasticWalk> {
    validate::positive("velocity", params.velocity)?;
    validate::positive("distance", params.distance)?;
    if params.velocity > params.distance {
        return Err(ConfigError::VelocityExceedsDistance {
            velocity: params.velocity,
            distance: params.distance,
        }
        .into());
    }
    debug!("random walk: velocity {}, distance {}", params.velocity, params.distance);
    Ok(StochasticWalk::new(
        agent_count,
        bounds,
        Box::new(Constant(params.distance)),
        Box::new(Constant(params.velocity)),
        None,
        rng,
    )?
    .named("random_walk"))
}

/// Power-law flights and (optionally) power-law pauses; velocity grows with
/// the square root of the flight length.
pub fn truncated_levy_walk(
    agent_count: usize,
    bounds:      Bounds,
    params:      &LevyWalkParams,
    rng:         SimRng,
) -> MobilityResult<StochasticWalk> {
    let flight = TruncatedPowerLaw::new("flight", params.flight_exponent, 1.0, params.flight_max)?;
    let wait = params
        .wait_distribution()?
        .map(|w| Box::new(w) as Box<dyn SampleDistribution>);
    debug!("truncated Lévy walk: {params:?}");
    Ok(StochasticWalk::new(
        agent_count,
        bounds,
        Box::new(flight),
        Box::new(SqrtScaled::default()),
        wait,
        rng,
    )?
    .named("truncated_levy_walk"))
}

/// Lévy walk where each agent has its own travel scale.
///
/// Each agent draws a flight cap from a power law (exponent
/// [`FLIGHT_CAP_EXPONENT`]) on `[MIN_FLIGHT_CAP, flight_max]`; its flights
/// are then uniform on `[cap · FLIGHT_FLOOR_RATIO, cap)`.  Pauses always
/// follow the power-law wait distribution, so `wait_exponent` and `wait_max`
/// are required.  `flight_exponent` is not used by this model.
pub fn heterogeneous_truncated_levy_walk(
    agent_count: usize,
    bounds:      Bounds,
    params:      &LevyWalkParams,
    mut rng:     SimRng,
) -> MobilityResult<StochasticWalk> {
    validate::population(agent_count)?;
    validate::power_law("flight cap", FLIGHT_CAP_EXPONENT, MIN_FLIGHT_CAP, params.flight_max)?;
    let wait = params.wait_distribution()?.ok_or(ConfigError::NonPositive {
        param: "wait_max",
        value: params.wait_max.unwrap_or(0.0),
    })?;

    let caps: Vec<f64> = (0..agent_count)
        .map(|_| rng.truncated_power_law(FLIGHT_CAP_EXPONENT, MIN_FLIGHT_CAP, params.flight_max))
        .collect();
    let floors = caps.iter().map(|c| c * FLIGHT_FLOOR_RATIO).collect();
    let flight = PerAgentUniform::new(floors, caps)?;
    debug!(
        "heterogeneous Lévy walk: {agent_count} agents, agent 0 flights in {:?}",
        flight.range(AgentId(0))
    );

    Ok(StochasticWalk::new(
        agent_count,
        bounds,
        Box::new(flight),
        Box::new(SqrtScaled::default()),
        Some(Box::new(wait)),
        rng,
    )?
    .named("heterogeneous_truncated_levy_walk"))
}

/// Straight legs of uniform length in `(0, max_dimension]` at a uniform
/// velocity, with optional uniform pauses.
pub fn random_direction(
    agent_count: usize,
    bounds:      Bounds,
    params:      &RandomDirectionParams,
    rng:         SimRng,
) -> MobilityResult<StochasticWalk> {
    let flight = UniformLength::new("flight", bounds.max_dimension())?;
    let velocity = params.velocity.to_uniform()?;
    let wait = wait_max(params.wait_max)?
        .map(|w| Uniform::new("wait_max", 0.0, w))
        .transpose()?
        .map(|w| Box::new(w) as Box<dyn SampleDistribution>);
    debug!("random direction: {params:?}");
    Ok(StochasticWalk::new(agent_count, bounds, Box::new(flight), Box::new(velocity), wait, rng)?
        .named("random_direction"))
}
