//! Human-contact process (`modelB` and its heterogeneous variant).
//!
//! Agents are either *inactive* (alone) or members of a conversation group
//! (a clique).  One agent is picked uniformly each tick:
//!
//! | State    | With probability `η_i·f(t, τ_i)`                                       |
//! |----------|-------------------------------------------------------------------------|
//! | inactive | pair up with an inactive partner (needs ≥2 inactive agents)             |
//! | active   | w.p. `μ` leave the group, else recruit an inactive agent (needs ≥2)     |
//!
//! `τ_i` is the tick of `i`'s last state change and `η_i` depends on the
//! [`Activation`] variant.  Partners are drawn from the inactive pool with
//! weight `w_k·Π(t, τ_k)` through `rand`'s `WeightedIndex`; weights are
//! recomputed over the current pool on every draw.
//! Recruits join the whole group, not just the recruiter.
//!
//! After the tick every pair of group members is reported.  With decaying
//! kernels, agents that have been in one state for a long time become less
//! likely to leave it, which produces the bursty, clustered contacts of real
//! face-to-face data.

mod clique;
mod kernel;

use std::collections::BTreeMap;

use log::{debug, trace};
use mt_core::{AgentId, SimRng, Tick, validate};
use rand::distributions::WeightedIndex;

use crate::contact::{Contact, ContactModel};
use crate::{ContactError, ContactResult};

pub use clique::CliqueArena;
pub use kernel::{HyperbolicKernel, MemoryKernel};

// ── Activation ────────────────────────────────────────────────────────────────

/// How readily each agent changes state, and how attractive it is as a
/// partner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Activation {
    /// `modelB`: every agent changes state with `b0` while inactive and `b1`
    /// while active; partners are weighted by recency only.
    Homogeneous { b0: f64, b1: f64 },
    /// Each agent has its own activity in `[0, 1]`, used both as its rate of
    /// change and as its weight when drawn as a partner.
    Heterogeneous { activity: Vec<f64> },
}

impl Activation {
    /// Heterogeneous activation with `activity[i] = f(i)`.
    pub fn heterogeneous_from_fn(agent_count: usize, f: impl Fn(AgentId) -> f64) -> Self {
        Activation::Heterogeneous {
            activity: (0..agent_count).map(|i| f(AgentId::from_index(i))).collect(),
        }
    }

    fn validate(&self, agent_count: usize) -> ContactResult<()> {
        match self {
            Activation::Homogeneous { b0, b1 } => {
                validate::probability("b0", *b0)?;
                validate::probability("b1", *b1)?;
            }
            Activation::Heterogeneous { activity } => {
                validate::per_agent("activity", agent_count, activity.len())?;
                for &a in activity {
                    validate::probability("activity", a)?;
                }
            }
        }
        Ok(())
    }

    /// `η_i`: base rate of a state change for `agent`.
    #[inline]
    fn rate(&self, agent: AgentId, active: bool) -> f64 {
        match self {
            Activation::Homogeneous { b0, b1 } => {
                if active { *b1 } else { *b0 }
            }
            Activation::Heterogeneous { activity } => activity[agent.index()],
        }
    }

    /// `w_k`: weight of `agent` as a candidate partner.
    #[inline]
    fn attractiveness(&self, agent: AgentId) -> f64 {
        match self {
            Activation::Homogeneous { .. } => 1.0,
            Activation::Heterogeneous { activity } => activity[agent.index()],
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The human-contact engine, generic over the activation kernel `F` and the
/// partner-recency kernel `P`.
pub struct HumanContact<F, P> {
    activation: Activation,
    leave:      f64,
    f:          F,
    pi:         P,
    arena:      CliqueArena,
    rng:        SimRng,
    tick:       Tick,
    /// Partner weights over the inactive pool, rebuilt on every draw.
    weights:    Vec<f64>,
    /// Set once a draw fails; replayed on every later call.
    failure:    Option<ContactError>,
}

impl<F: MemoryKernel, P: MemoryKernel> HumanContact<F, P> {
    /// `leave` is `μ`, the probability that a state change of an active agent
    /// is a departure rather than a recruitment.
    pub fn new(
        agent_count: usize,
        activation:  Activation,
        leave:       f64,
        f:           F,
        pi:          P,
        rng:         SimRng,
    ) -> ContactResult<Self> {
        validate::population(agent_count)?;
        activation.validate(agent_count)?;
        validate::probability("mu", leave)?;
        debug!("human contact: {agent_count} agents, mu {leave}, {activation:?}");
        Ok(Self {
            activation,
            leave,
            f,
            pi,
            arena: CliqueArena::new(agent_count),
            rng,
            tick: Tick::ZERO,
            weights: Vec::with_capacity(agent_count),
            failure: None,
        })
    }

    /// `modelB` with change rates `b0` (inactive) and `b1` (active).
    pub fn model_b(
        agent_count: usize,
        b0:          f64,
        b1:          f64,
        leave:       f64,
        f:           F,
        pi:          P,
        rng:         SimRng,
    ) -> ContactResult<Self> {
        Self::new(agent_count, Activation::Homogeneous { b0, b1 }, leave, f, pi, rng)
    }

    /// Heterogeneous variant with one activity per agent.
    pub fn heterogeneous(
        activity: Vec<f64>,
        leave:    f64,
        f:        F,
        pi:       P,
        rng:      SimRng,
    ) -> ContactResult<Self> {
        let n = activity.len();
        Self::new(n, Activation::Heterogeneous { activity }, leave, f, pi, rng)
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn arena(&self) -> &CliqueArena {
        &self.arena
    }

    pub fn inactive_count(&self) -> usize {
        self.arena.inactive_count()
    }

    /// Current group members of `agent` and the tick each contact began.
    pub fn partners(&self, agent: AgentId) -> &BTreeMap<AgentId, Tick> {
        self.arena.partners(agent)
    }

    pub fn is_active(&self, agent: AgentId) -> bool {
        self.arena.is_active(agent)
    }

    fn step(&mut self) -> ContactResult<()> {
        self.tick = self.tick.next();
        let now = self.tick;
        let i = AgentId::from_index(self.rng.index(self.arena.len()));
        let active = self.arena.is_active(i);
        let p = self.activation.rate(i, active) * self.f.weight(now, self.arena.last_change(i));
        if self.rng.random::<f64>() >= p {
            return Ok(());
        }

        if !active {
            if self.arena.inactive_count() >= 2 {
                let j = self.choose_partner(i)?;
                self.arena.pair_up(i, j, now);
                trace!("human contact {now}: {i} paired with {j}");
            }
        } else if self.rng.random::<f64>() < self.leave {
            let freed = self.arena.leave(i, now);
            trace!("human contact {now}: {i} left, {freed} agents now inactive");
        } else if self.arena.inactive_count() >= 2 {
            let j = self.choose_partner(i)?;
            self.arena.recruit(i, j, now);
            trace!("human contact {now}: {i} recruited {j}");
        }
        Ok(())
    }

    /// Weighted recency draw from the inactive pool, excluding `exclude`.
    fn choose_partner(&mut self, exclude: AgentId) -> ContactResult<AgentId> {
        let now = self.tick;
        self.weights.clear();
        for &k in self.arena.inactive() {
            let w = if k == exclude {
                0.0
            } else {
                self.activation.attractiveness(k) * self.pi.weight(now, self.arena.last_change(k))
            };
            self.weights.push(w);
        }
        let total: f64 = self.weights.iter().sum();
        let domain_error = || ContactError::SamplingDomain {
            tick:         now,
            candidates:   self.weights.len(),
            total_weight: total,
        };
        // `WeightedIndex` cannot build a uniform range over an infinite total.
        if !total.is_finite() {
            return Err(domain_error());
        }
        let index: WeightedIndex<f64> = WeightedIndex::new(&self.weights).map_err(|err| {
            debug!("human contact {now}: partner draw rejected: {err}");
            domain_error()
        })?;
        Ok(self.arena.inactive()[self.rng.sample(&index)])
    }
}

impl<F: MemoryKernel, P: MemoryKernel> ContactModel for HumanContact<F, P> {
    fn name(&self) -> &'static str {
        match self.activation {
            Activation::Homogeneous { .. } => "model_b",
            Activation::Heterogeneous { .. } => "heterogeneous_model_b",
        }
    }

    fn agent_count(&self) -> usize {
        self.arena.len()
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if let Err(err) = self.step() {
            self.failure = Some(err.clone());
            return Err(err);
        }
        Ok(self.arena.contacts())
    }
}
