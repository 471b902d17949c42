//! Gauss–Markov mobility: speed and direction follow a first-order
//! autoregressive process.
//!
//! ```text
//! v' = α·v + (1-α)·v̄   + σ·√(1-α²)·N(0,1)
//! θ' = α·θ + (1-α)·θ̄_i + σ·√(1-α²)·N(0,1)
//! ```
//!
//! `α = 1` is straight-line motion at constant speed; `α = 0` redraws speed
//! and direction from scratch each tick.  Each agent's mean direction `θ̄_i`
//! starts at its initial heading and is mirrored together with the heading
//! when the agent bounces, so the process does not steer it straight back
//! into the wall.  The speed itself is not clamped; a negative value moves
//! the agent backwards along its heading.

use log::debug;
use mt_core::{Bounds, Point, SimRng, Tick, validate};

use crate::model::MovementModel;
use crate::MobilityResult;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GaussMarkovParams {
    pub velocity_mean: f64,
    pub alpha:         f64,
    pub variance:      f64,
}

impl Default for GaussMarkovParams {
    fn default() -> Self {
        Self { velocity_mean: 1.0, alpha: 1.0, variance: 1.0 }
    }
}

pub struct GaussMarkov {
    bounds:        Bounds,
    velocity_mean: f64,
    alpha:         f64,
    /// `1 - α`
    mean_weight:   f64,
    /// `σ·√(1-α²)`
    noise_scale:   f64,
    positions:     Vec<Point>,
    velocity:      Vec<f64>,
    heading:       Vec<f64>,
    heading_mean:  Vec<f64>,
    rng:           SimRng,
    tick:          Tick,
}

impl GaussMarkov {
    pub fn new(
        agent_count: usize,
        bounds:      Bounds,
        params:      &GaussMarkovParams,
        mut rng:     SimRng,
    ) -> MobilityResult<Self> {
        validate::population(agent_count)?;
        validate::non_negative("velocity_mean", params.velocity_mean)?;
        validate::unit_interval("alpha", params.alpha)?;
        validate::non_negative("variance", params.variance)?;

        let positions = (0..agent_count).map(|_| bounds.uniform_point(&mut rng)).collect();
        let heading: Vec<f64> = (0..agent_count).map(|_| rng.angle()).collect();

        debug!("Gauss-Markov: {agent_count} agents, {params:?}");

        Ok(Self {
            bounds,
            velocity_mean: params.velocity_mean,
            alpha:         params.alpha,
            mean_weight:   1.0 - params.alpha,
            noise_scale:   (1.0 - params.alpha * params.alpha).sqrt() * params.variance,
            positions,
            velocity:      vec![params.velocity_mean; agent_count],
            heading_mean:  heading.clone(),
            heading,
            rng,
            tick:          Tick::ZERO,
        })
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocity
    }

    pub fn headings(&self) -> &[f64] {
        &self.heading
    }

    fn step(&mut self) {
        use std::f64::consts::PI;

        for (i, p) in self.positions.iter_mut().enumerate() {
            let (s, c) = self.heading[i].sin_cos();
            p.x += self.velocity[i] * c;
            p.y += self.velocity[i] * s;

            let r = self.bounds.reflect(p);
            if r.x {
                self.heading[i] = PI - self.heading[i];
                self.heading_mean[i] = PI - self.heading_mean[i];
            }
            if r.y {
                self.heading[i] = -self.heading[i];
                self.heading_mean[i] = -self.heading_mean[i];
            }
        }

        for v in &mut self.velocity {
            *v = self.alpha * *v
                + self.mean_weight * self.velocity_mean
                + self.noise_scale * self.rng.standard_normal();
        }
        for (theta, mean) in self.heading.iter_mut().zip(&self.heading_mean) {
            *theta = self.alpha * *theta
                + self.mean_weight * mean
                + self.noise_scale * self.rng.standard_normal();
        }

        self.tick = self.tick.next();
    }
}

impl MovementModel for GaussMarkov {
    fn name(&self) -> &'static str {
        "gauss_markov"
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
