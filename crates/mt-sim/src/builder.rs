//! Builds an engine from a [`ModelConfig`].

use log::debug;
use mt_contact::{
    ContactModel, ContinuousEdgeMarkovian, DynamicGnm, DynamicGnp, EdgeMarkovian, HumanContact,
    HyperbolicKernel, ProximityContacts, RandomContact,
};
use mt_core::{Bounds, SimRng};
use mt_mobility::{
    GaussMarkov, MovementModel, RandomWaypoint, ReferencePointGroup,
    heterogeneous_truncated_levy_walk, random_direction, random_walk, truncated_levy_walk,
};

use crate::{ModelConfig, SimError, SimResult};

/// Seed offset of the engine stream derived from the run seed.
const ENGINE_STREAM: u64 = 1;

/// A built engine, ready to advance.
pub enum TraceSource {
    Movement(Box<dyn MovementModel>),
    Contact(Box<dyn ContactModel>),
    /// A movement model whose positions are also turned into contacts.
    Proximity(ProximityContacts<Box<dyn MovementModel>>),
}

impl TraceSource {
    pub fn name(&self) -> &'static str {
        match self {
            TraceSource::Movement(m) => m.name(),
            TraceSource::Contact(c) => c.name(),
            TraceSource::Proximity(p) => p.model().name(),
        }
    }

    /// Whether each tick yields a contact list.
    pub fn reports_contacts(&self) -> bool {
        !matches!(self, TraceSource::Movement(_))
    }

    pub fn agent_count(&self) -> usize {
        match self {
            TraceSource::Movement(m) => m.agent_count(),
            TraceSource::Contact(c) => c.agent_count(),
            TraceSource::Proximity(p) => p.agent_count(),
        }
    }
}

/// Build the engine described by `model`.
///
/// `contact_range` wraps a movement model in the proximity bridge; it is an
/// error on a contact model.  The engine's random stream is derived from
/// `seed` (OS entropy when `None`).
pub fn build_source(
    model:         &ModelConfig,
    contact_range: Option<f64>,
    seed:          Option<u64>,
) -> SimResult<TraceSource> {
    let rng = SimRng::from_seed_opt(seed).child(ENGINE_STREAM);

    if model.is_movement() {
        let movement = build_movement(model, rng)?;
        debug!("built movement model {} with {} agents", movement.name(), movement.agent_count());
        return Ok(match contact_range {
            Some(range) => TraceSource::Proximity(ProximityContacts::new(movement, range)?),
            None => TraceSource::Movement(movement),
        });
    }

    if contact_range.is_some() {
        return Err(SimError::Config(
            "contact_range applies only to movement models".to_string(),
        ));
    }
    let contact = build_contact(model, rng)?;
    debug!("built contact model {} with {} agents", contact.name(), contact.agent_count());
    Ok(TraceSource::Contact(contact))
}

/// Deserialized bounds bypass `Bounds::new`; re-validate them.
fn checked(bounds: &Bounds) -> SimResult<Bounds> {
    Bounds::new(bounds.max_x, bounds.max_y).map_err(|e| SimError::Mobility(e.into()))
}

fn build_movement(model: &ModelConfig, rng: SimRng) -> SimResult<Box<dyn MovementModel>> {
    let built: Box<dyn MovementModel> = match model {
        ModelConfig::RandomWalk { agents, bounds, params } => {
            Box::new(random_walk(*agents, checked(bounds)?, params, rng)?)
        }
        ModelConfig::TruncatedLevyWalk { agents, bounds, params } => {
            Box::new(truncated_levy_walk(*agents, checked(bounds)?, params, rng)?)
        }
        ModelConfig::HeterogeneousTruncatedLevyWalk { agents, bounds, params } => {
            Box::new(heterogeneous_truncated_levy_walk(*agents, checked(bounds)?, params, rng)?)
        }
        ModelConfig::RandomDirection { agents, bounds, params } => {
            Box::new(random_direction(*agents, checked(bounds)?, params, rng)?)
        }
        ModelConfig::RandomWaypoint { agents, bounds, params } => {
            Box::new(RandomWaypoint::new(*agents, checked(bounds)?, params, rng)?)
        }
        ModelConfig::GaussMarkov { agents, bounds, params } => {
            Box::new(GaussMarkov::new(*agents, checked(bounds)?, params, rng)?)
        }
        ModelConfig::ReferencePointGroup { bounds, params } => {
            Box::new(ReferencePointGroup::new(checked(bounds)?, params, rng)?)
        }
        other => {
            return Err(SimError::Config(format!("{other:?} is not a movement model")));
        }
    };
    Ok(built)
}

fn build_contact(model: &ModelConfig, rng: SimRng) -> SimResult<Box<dyn ContactModel>> {
    let built: Box<dyn ContactModel> = match model {
        ModelConfig::Gnp { agents, p } => Box::new(DynamicGnp::new(*agents, *p, rng)?),
        ModelConfig::Gnm { agents, edges } => Box::new(DynamicGnm::new(*agents, *edges, rng)?),
        ModelConfig::EdgeMarkovian { agents, p, q, g } => {
            Box::new(EdgeMarkovian::new(*agents, *p, *q, *g, rng)?)
        }
        ModelConfig::ContinuousEdgeMarkovian { agents, mean } => {
            Box::new(ContinuousEdgeMarkovian::exponential(*agents, *mean, rng)?)
        }
        ModelConfig::BroadEdgeMarkovian { agents, alpha } => {
            Box::new(ContinuousEdgeMarkovian::broad(*agents, *alpha, rng)?)
        }
        ModelConfig::RandomContact { agents } => Box::new(RandomContact::new(*agents, rng)?),
        ModelConfig::ModelB { agents, b0, b1, mu, kernel_scale } => {
            let kernel = HyperbolicKernel::new(kernel_scale.unwrap_or((*agents).max(1) as f64))?;
            Box::new(HumanContact::model_b(*agents, *b0, *b1, *mu, kernel, kernel, rng)?)
        }
        ModelConfig::HeterogeneousModelB { activity, mu, kernel_scale } => {
            let kernel = HyperbolicKernel::new(kernel_scale.unwrap_or(activity.len().max(1) as f64))?;
            Box::new(HumanContact::heterogeneous(activity.clone(), *mu, kernel, kernel, rng)?)
        }
        other => {
            return Err(SimError::Config(format!("{other:?} is not a contact model")));
        }
    };
    Ok(built)
}
