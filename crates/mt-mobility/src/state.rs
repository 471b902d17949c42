//! Per-agent flight state in Structure-of-Arrays layout.
//!
//! [`Legs`] holds everything about an agent's current leg except where it
//! is: heading, velocity, remaining flight and remaining pause.  It is shared
//! by the individual walk ([`WalkState`]) and by the group model, where the
//! same arrays describe group reference points one level up.
//!
//! An agent is either **moving** (`velocity > 0`) or **paused**
//! (`velocity == 0`, `wait_remaining` counting down).  A paused agent resumes
//! once `wait_remaining` drops below zero.

use mt_core::{AgentId, Point, SimRng};

use crate::distribution::{SampleDistribution, VelocityDistribution};

/// Heading, velocity and leg counters for `n` walkers.  Every `Vec` has the
/// same length; the `AgentId` is the index.
#[derive(Clone, Debug, Default)]
pub struct Legs {
    pub cos_heading:      Vec<f64>,
    pub sin_heading:      Vec<f64>,
    pub velocity:         Vec<f64>,
    pub flight_remaining: Vec<f64>,
    pub wait_remaining:   Vec<f64>,
}

impl Legs {
    /// Start every walker on a fresh leg.
    ///
    /// Draw order: all flights, then all velocities, then all headings.
    pub fn new(
        n:        usize,
        flight:   &dyn SampleDistribution,
        velocity: &dyn VelocityDistribution,
        rng:      &mut SimRng,
    ) -> Self {
        let everyone: Vec<AgentId> = (0..n).map(AgentId::from_index).collect();
        let flight_remaining = flight.sample(&everyone, rng);
        let velocity = velocity.sample(&flight_remaining, rng);
        let (cos_heading, sin_heading): (Vec<f64>, Vec<f64>) = (0..n)
            .map(|_| {
                let (s, c) = rng.angle().sin_cos();
                (c, s)
            })
            .unzip();
        Self {
            cos_heading,
            sin_heading,
            velocity,
            flight_remaining,
            wait_remaining: vec![0.0; n],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.velocity.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.velocity.is_empty()
    }

    #[inline]
    pub fn is_paused(&self, i: usize) -> bool {
        self.velocity[i] == 0.0
    }

    /// Displacement of walker `i` for one tick.
    #[inline]
    pub fn step(&self, i: usize) -> (f64, f64) {
        let v = self.velocity[i];
        (v * self.cos_heading[i], v * self.sin_heading[i])
    }

    #[inline]
    pub fn flip_x(&mut self, i: usize) {
        self.cos_heading[i] = -self.cos_heading[i];
    }

    #[inline]
    pub fn flip_y(&mut self, i: usize) {
        self.sin_heading[i] = -self.sin_heading[i];
    }

    /// Charge one tick of travel against every leg and collect the moving
    /// walkers whose flight is used up.
    pub fn complete_flights(&mut self, arrived: &mut Vec<AgentId>) {
        arrived.clear();
        for i in 0..self.len() {
            self.flight_remaining[i] -= self.velocity[i];
            if self.velocity[i] > 0.0 && self.flight_remaining[i] <= 0.0 {
                arrived.push(AgentId::from_index(i));
            }
        }
    }

    /// Freeze the walkers in `arrived`, count down every pause, and replace
    /// `arrived` with the walkers whose pause has run out.
    ///
    /// Returns the number of walkers that started a pause this tick.
    pub fn pause(
        &mut self,
        arrived: &mut Vec<AgentId>,
        wait:    &dyn SampleDistribution,
        rng:     &mut SimRng,
    ) -> usize {
        let started = arrived.len();
        let waits = wait.sample(arrived, rng);
        for (a, wt) in arrived.iter().zip(waits) {
            self.velocity[a.index()] = 0.0;
            self.wait_remaining[a.index()] = wt;
        }

        arrived.clear();
        for i in 0..self.len() {
            if self.velocity[i] == 0.0 {
                self.wait_remaining[i] -= 1.0;
                if self.wait_remaining[i] < 0.0 {
                    arrived.push(AgentId::from_index(i));
                }
            }
        }
        started
    }

    /// Start a new leg for every walker in `arrived`: uniform heading, then
    /// flight lengths, then velocities derived from those flights.
    pub fn resample(
        &mut self,
        arrived:  &[AgentId],
        flight:   &dyn SampleDistribution,
        velocity: &dyn VelocityDistribution,
        rng:      &mut SimRng,
    ) {
        if arrived.is_empty() {
            return;
        }
        for a in arrived {
            let (s, c) = rng.angle().sin_cos();
            self.cos_heading[a.index()] = c;
            self.sin_heading[a.index()] = s;
        }
        let flights = flight.sample(arrived, rng);
        debug_assert!(flights.iter().all(|&f| f > 0.0), "flight sampler returned an empty leg");
        let velocities = velocity.sample(&flights, rng);
        for ((a, fl), v) in arrived.iter().zip(flights).zip(velocities) {
            self.flight_remaining[a.index()] = fl;
            self.velocity[a.index()] = v;
        }
    }
}

/// Positions plus legs: the full state of a flight-based walk.
#[derive(Clone, Debug, Default)]
pub struct WalkState {
    pub positions: Vec<Point>,
    pub legs:      Legs,
}

impl WalkState {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
