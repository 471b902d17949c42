//! Continuous-time edge-Markovian graph.
//!
//! Every pair owns a countdown to its next contact.  Each tick all countdowns
//! drop by one; a pair whose countdown reaches zero or below is reported and
//! immediately redrawn from the inter-contact distribution:
//!
//! - **exponential** with mean `λ` (memoryless contacts);
//! - **broad** Pareto with scale 1 and density `∝ τ^-α`, `α > 1`, giving the
//!   heavy-tailed inter-contact times seen in human proximity data.

use log::{debug, trace};
use mt_core::{ConfigError, SimRng, Tick, validate};
use rand_distr::{Exp, Pareto};

use crate::contact::{Contact, ContactModel, pair_count, pairs};
use crate::ContactResult;

/// Inter-contact time law.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterContact {
    /// Exponential with the given mean (in ticks).
    Exponential { mean: f64 },
    /// Pareto with scale 1 and tail exponent `alpha` (`p(τ) ∝ τ^-alpha`).
    PowerLaw { alpha: f64 },
}

enum Sampler {
    Exponential(Exp<f64>),
    PowerLaw(Pareto<f64>),
}

impl Sampler {
    fn build(law: InterContact) -> ContactResult<Self> {
        match law {
            InterContact::Exponential { mean } => {
                validate::positive("mean inter-contact time", mean)?;
                Exp::new(1.0 / mean).map(Sampler::Exponential).map_err(|_| {
                    ConfigError::NonPositive { param: "mean inter-contact time", value: mean }.into()
                })
            }
            InterContact::PowerLaw { alpha } => {
                if !(alpha.is_finite() && alpha > 1.0) {
                    return Err(ConfigError::OutOfRange {
                        param: "alpha",
                        value: alpha,
                        min: 1.0,
                        max: f64::INFINITY,
                    }
                    .into());
                }
                Pareto::new(1.0, alpha - 1.0).map(Sampler::PowerLaw).map_err(|_| {
                    ConfigError::NonPositive { param: "alpha - 1", value: alpha - 1.0 }.into()
                })
            }
        }
    }

    #[inline]
    fn draw(&self, rng: &mut SimRng) -> f64 {
        match self {
            Sampler::Exponential(d) => rng.sample(d),
            Sampler::PowerLaw(d) => rng.sample(d),
        }
    }
}

pub struct ContinuousEdgeMarkovian {
    agent_count: usize,
    law:         InterContact,
    sampler:     Sampler,
    /// Ticks until the next contact, one slot per pair in upper-triangle order.
    countdown:   Vec<f64>,
    rng:         SimRng,
    tick:        Tick,
}

impl ContinuousEdgeMarkovian {
    pub fn new(agent_count: usize, law: InterContact, mut rng: SimRng) -> ContactResult<Self> {
        validate::population(agent_count)?;
        let sampler = Sampler::build(law)?;
        let countdown = (0..pair_count(agent_count)).map(|_| sampler.draw(&mut rng)).collect();
        debug!("continuous edge-Markovian: {agent_count} agents, {law:?}");
        Ok(Self { agent_count, law, sampler, countdown, rng, tick: Tick::ZERO })
    }

    /// Exponential inter-contact times with mean `mean`.
    pub fn exponential(agent_count: usize, mean: f64, rng: SimRng) -> ContactResult<Self> {
        Self::new(agent_count, InterContact::Exponential { mean }, rng)
    }

    /// Broad (Pareto) inter-contact times with tail exponent `alpha > 1`.
    pub fn broad(agent_count: usize, alpha: f64, rng: SimRng) -> ContactResult<Self> {
        Self::new(agent_count, InterContact::PowerLaw { alpha }, rng)
    }

    pub fn law(&self) -> InterContact {
        self.law
    }

    /// Remaining time per pair, upper-triangle order.
    pub fn countdowns(&self) -> &[f64] {
        &self.countdown
    }
}

impl ContactModel for ContinuousEdgeMarkovian {
    fn name(&self) -> &'static str {
        match self.law {
            InterContact::Exponential { .. } => "continuous_edge_markovian",
            InterContact::PowerLaw { .. } => "broad_edge_markovian",
        }
    }

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        let mut contacts = Vec::new();
        for (pair, remaining) in pairs(self.agent_count).zip(self.countdown.iter_mut()) {
            *remaining -= 1.0;
            if *remaining <= 0.0 {
                contacts.push(pair);
                *remaining = self.sampler.draw(&mut self.rng);
            }
        }
        self.tick = self.tick.next();
        trace!("{} {}: {} contacts", self.name(), self.tick, contacts.len());
        Ok(contacts)
    }
}
