//! Random waypoint: every agent heads straight for a random target point.
//!
//! Heading is not stored; it is recomputed from the position and the
//! waypoint each tick.  An agent that ends a tick within one step
//! (`distance <= velocity`) of its waypoint has arrived and draws a new
//! waypoint and velocity, optionally after a uniform pause.

use log::{debug, trace};
use mt_core::{AgentId, Bounds, Point, SimRng, Tick, validate};

use crate::model::MovementModel;
use crate::presets::{VelocityRange, wait_max};
use crate::MobilityResult;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct RandomWaypointParams {
    pub velocity: VelocityRange,
    /// Maximum pause at each waypoint.  `None` or `0` disables pauses.
    pub wait_max: Option<f64>,
}

pub struct RandomWaypoint {
    bounds:         Bounds,
    velocity_range: VelocityRange,
    wait_max:       Option<f64>,
    positions:      Vec<Point>,
    waypoints:      Vec<Point>,
    velocity:       Vec<f64>,
    wait_remaining: Vec<f64>,
    rng:            SimRng,
    tick:           Tick,
    arrived:        Vec<AgentId>,
}

impl RandomWaypoint {
    pub fn new(
        agent_count: usize,
        bounds:      Bounds,
        params:      &RandomWaypointParams,
        mut rng:     SimRng,
    ) -> MobilityResult<Self> {
        validate::population(agent_count)?;
        validate::range("velocity", params.velocity.min, params.velocity.max)?;
        let wait_max = wait_max(params.wait_max)?;

        let positions = (0..agent_count).map(|_| bounds.uniform_point(&mut rng)).collect();
        let waypoints = (0..agent_count).map(|_| bounds.uniform_point(&mut rng)).collect();
        let velocity = (0..agent_count)
            .map(|_| rng.uniform(params.velocity.min, params.velocity.max))
            .collect();

        debug!("random waypoint: {agent_count} agents, {params:?}");

        Ok(Self {
            bounds,
            velocity_range: params.velocity,
            wait_max,
            positions,
            waypoints,
            velocity,
            wait_remaining: vec![0.0; agent_count],
            rng,
            tick: Tick::ZERO,
            arrived: Vec::with_capacity(agent_count),
        })
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocity
    }

    pub fn wait_remaining(&self) -> &[f64] {
        &self.wait_remaining
    }

    fn step(&mut self) {
        self.arrived.clear();

        for i in 0..self.positions.len() {
            let v = self.velocity[i];
            if v <= 0.0 {
                continue;
            }
            let p = &mut self.positions[i];
            let target = self.waypoints[i];
            let d = p.distance(target);
            // Land on the waypoint instead of overshooting it: the waypoint
            // is inside the area, so the agent never needs reflecting.
            if v >= d {
                *p = target;
            } else {
                let (s, c) = p.heading_to(target).sin_cos();
                p.x += v * c;
                p.y += v * s;
            }
            if d - v <= v {
                self.arrived.push(AgentId::from_index(i));
            }
        }

        if let Some(wt_max) = self.wait_max {
            for a in &self.arrived {
                self.velocity[a.index()] = 0.0;
                self.wait_remaining[a.index()] = self.rng.uniform(0.0, wt_max);
            }
            self.arrived.clear();
            for i in 0..self.positions.len() {
                if self.velocity[i] == 0.0 {
                    self.wait_remaining[i] -= 1.0;
                    if self.wait_remaining[i] < 0.0 {
                        self.arrived.push(AgentId::from_index(i));
                    }
                }
            }
        }

        let VelocityRange { min, max } = self.velocity_range;
        for a in &self.arrived {
            self.waypoints[a.index()] = self.bounds.uniform_point(&mut self.rng);
            self.velocity[a.index()] = self.rng.uniform(min, max);
        }

        self.tick = self.tick.next();
        trace!("random waypoint {}: {} new waypoints", self.tick, self.arrived.len());
    }
}

impl MovementModel for RandomWaypoint {
    fn name(&self) -> &'static str {
        "random_waypoint"
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn positions(&self) -> &[Point] {
        &self.positions
    }

    fn advance(&mut self) -> &[Point] {
        self.step();
        &self.positions
    }
}
