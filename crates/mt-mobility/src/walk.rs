//! The generic stochastic-walk engine.
//!
//! Random walk, (heterogeneous) truncated Lévy walk and random direction
//! are all this engine with different samplers; see [`crate::presets`].
//!
//! # Tick
//!
//! ```text
//! ① move       position += velocity · (cosθ, sinθ)
//! ② reflect    mirror each axis once into [0, max]; flip that heading component
//! ③ flights    flight_remaining -= velocity; moving agents at ≤ 0 have arrived
//! ④ pauses     (wait sampler only) arrived agents stop and draw a wait;
//!              every paused agent counts down; arrived := pauses that ran out
//! ⑤ new legs   arrived agents draw heading, flight, then velocity(flight)
//! ```
//!
//! A velocity larger than the new flight just means the agent arrives again
//! on the next tick.

use log::{debug, trace};
use mt_core::{AgentId, Bounds, Point, SimRng, Tick, validate};

use crate::distribution::{SampleDistribution, VelocityDistribution};
use crate::model::MovementModel;
use crate::state::{Legs, WalkState};
use crate::MobilityResult;

/// Flight-based walk with pluggable flight, velocity and wait samplers.
///
/// Create directly with [`StochasticWalk::new`] or through one of the preset
/// constructors in [`crate::presets`].
pub struct StochasticWalk {
    name:     &'static str,
    bounds:   Bounds,
    state:    WalkState,
    flight:   Box<dyn SampleDistribution>,
    velocity: Box<dyn VelocityDistribution>,
    wait:     Option<Box<dyn SampleDistribution>>,
    rng:      SimRng,
    tick:     Tick,
    /// Scratch buffer reused every tick.
    arrived:  Vec<AgentId>,
}

impl StochasticWalk {
    /// Place `agent_count` agents uniformly in `bounds` and start each on a
    /// fresh leg.
    ///
    /// Pass `wait: None` for a walk that never pauses.
    pub fn new(
        agent_count: usize,
        bounds:      Bounds,
        flight:      Box<dyn SampleDistribution>,
        velocity:    Box<dyn VelocityDistribution>,
        wait:        Option<Box<dyn SampleDistribution>>,
        mut rng:     SimRng,
    ) -> MobilityResult<Self> {
        validate::population(agent_count)?;

        let positions = (0..agent_count).map(|_| bounds.uniform_point(&mut rng)).collect();
        let legs = Legs::new(agent_count, flight.as_ref(), velocity.as_ref(), &mut rng);

        debug!(
            "stochastic walk: {agent_count} agents in {}x{}, pausing {}",
            bounds.max_x,
            bounds.max_y,
            wait.is_some()
        );

        Ok(Self {
            name: "stochastic_walk",
            bounds,
            state: WalkState { positions, legs },
            flight,
            velocity,
            wait,
            rng,
            tick: Tick::ZERO,
            arrived: Vec::with_capacity(agent_count),
        })
    }

    /// Relabel the engine for logs (presets call this).
    pub(crate) fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Read-only view of the per-agent state.
    pub fn state(&self) -> &WalkState {
        &self.state
    }

    /// `true` if a wait-time sampler is configured.
    pub fn pauses(&self) -> bool {
        self.wait.is_some()
    }

    fn step(&mut self) {
        let WalkState { positions, legs } = &mut self.state;

        // ① + ②
        for (i, p) in positions.iter_mut().enumerate() {
            let (dx, dy) = legs.step(i);
            p.x += dx;
            p.y += dy;
            let r = self.bounds.reflect(p);
            if r.x {
                legs.flip_x(i);
            }
            if r.y {
                legs.flip_y(i);
            }
        }

        // ③
        legs.complete_flights(&mut self.arrived);
        let finished = self.arrived.len();

        // ④
        let mut paused = 0;
        if let Some(wait) = &self.wait {
            paused = legs.pause(&mut self.arrived, wait.as_ref(), &mut self.rng);
        }

        // ⑤
        legs.resample(&self.arrived, self.flight.as_ref(), self.velocity.as_ref(), &mut self.rng);

        self.tick = self.tick.next();
        trace!(
            "{} {}: {finished} flights finished, {paused} paused, {} new legs",
            self.name,
            self.tick,
            self.arrived.len()
        );
    }
}

impl MovementModel for StochasticWalk {
    fn name(&self) -> &'static str {
        self.name
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn positions(&self) -> &[Point] {
        &self.state.positions
    }

    fn advance(&mut self) -> &[Point] {
        self.step();
        &self.state.positions
    }
}
