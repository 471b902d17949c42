//! Reference-point group mobility.
//!
//! Agents are partitioned into fixed groups.  Two walks run in parallel:
//!
//! - **group level** — each group owns a reference heading/velocity/flight
//!   evolving as a random-direction walk (flights uniform in `(0, L]` with
//!   `L` the longer side of the area, velocities uniform in the configured range);
//! - **member level** — each agent wanders on its own unit-length legs with
//!   a uniform velocity.
//!
//! Each tick a member moves by its personal step, then by its group's step,
//! then `aggregation` units toward the group centroid.  `aggregation = 0`
//! leaves members free to spread; `aggregation = 1` keeps them tight.
//!
//! # Reflection
//!
//! When any member of a group bounces off an axis, the group's heading
//! component on that axis flips, and so does the personal heading component
//! of every member of that group — bounced or not — so the group turns as a
//! whole.

use log::{debug, trace};
use mt_core::{AgentId, Bounds, ConfigError, GroupId, Point, SimRng, Tick, validate};

use crate::distribution::{Constant, Uniform, UniformLength};
use crate::model::MovementModel;
use crate::presets::VelocityRange;
use crate::state::Legs;
use crate::MobilityResult;

/// Length of a member's personal leg.
const MEMBER_FLIGHT: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct GroupParams {
    /// Number of members in each group.  Agents are numbered group by group.
    pub group_sizes: Vec<usize>,
    pub velocity:    VelocityRange,
    pub aggregation: f64,
}

impl Default for GroupParams {
    fn default() -> Self {
        Self {
            group_sizes: vec![4; 10],
            velocity:    VelocityRange::default(),
            aggregation: 0.1,
        }
    }
}

pub struct ReferencePointGroup {
    bounds:          Bounds,
    aggregation:     f64,
    /// `group_of[agent]`
    group_of:        Vec<GroupId>,
    /// Contiguous member range of each group.
    members:         Vec<std::ops::Range<usize>>,
    positions:       Vec<Point>,
    member_legs:     Legs,
    group_legs:      Legs,
    member_flight:   Constant,
    group_flight:    UniformLength,
    velocity:        Uniform,
    rng:             SimRng,
    tick:            Tick,
    arrived:         Vec<AgentId>,
    bounced_x:       Vec<bool>,
    bounced_y:       Vec<bool>,
}

impl ReferencePointGroup {
    pub fn new(bounds: Bounds, params: &GroupParams, mut rng: SimRng) -> MobilityResult<Self> {
        if params.group_sizes.is_empty() {
            return Err(ConfigError::EmptyPopulation.into());
        }
        if let Some(group) = params.group_sizes.iter().position(|&n| n == 0) {
            return Err(ConfigError::EmptyGroup { group }.into());
        }
        let agent_count: usize = params.group_sizes.iter().sum();
        validate::population(agent_count)?;
        validate::unit_interval("aggregation", params.aggregation)?;
        let velocity = params.velocity.to_uniform()?;
        let group_flight = UniformLength::new("flight", bounds.max_dimension())?;
        let member_flight = Constant(MEMBER_FLIGHT);

        let mut group_of = Vec::with_capacity(agent_count);
        let mut members = Vec::with_capacity(params.group_sizes.len());
        let mut start = 0;
        for (g, &n) in params.group_sizes.iter().enumerate() {
            members.push(start..start + n);
            group_of.extend(std::iter::repeat_n(GroupId::from_index(g), n));
            start += n;
        }

        let positions = (0..agent_count).map(|_| bounds.uniform_point(&mut rng)).collect();
        let member_legs = Legs::new(agent_count, &member_flight, &velocity, &mut rng);
        let group_legs = Legs::new(members.len(), &group_flight, &velocity, &mut rng);

        debug!(
            "reference point group: {} groups, {agent_count} agents, aggregation {}",
            members.len(),
            params.aggregation
        );

        Ok(Self {
            bounds,
            aggregation: params.aggregation,
            group_of,
            bounced_x: vec![false; members.len()],
            bounced_y: vec![false; members.len()],
            members,
            positions,
            member_legs,
            group_legs,
            member_flight,
            group_flight,
            velocity,
            rng,
            tick: Tick::ZERO,
            arrived: Vec::with_capacity(agent_count),
        })
    }

    pub fn group_count(&self) -> usize {
        self.members.len()
    }

    pub fn group_of(&self, agent: AgentId) -> GroupId {
        self.group_of[agent.index()]
    }

    /// Agents belonging to `group`.
    pub fn members(&self, group: GroupId) -> impl Iterator<Item = AgentId> + '_ {
        self.members[group.index()].clone().map(AgentId::from_index)
    }

    /// Mean position of the members of `group`.
    pub fn centroid(&self, group: GroupId) -> Point {
        centroid(&self.positions[self.members[group.index()].clone()])
    }

    pub fn member_legs(&self) -> &Legs {
        &self.member_legs
    }

    pub fn group_legs(&self) -> &Legs {
        &self.group_legs
    }

    fn step(&mut self) {
        // Personal wander.
        for (i, p) in self.positions.iter_mut().enumerate() {
            let (dx, dy) = self.member_legs.step(i);
            p.x += dx;
            p.y += dy;
        }

        // Group drift plus attraction toward the centroid.
        for (g, range) in self.members.iter().enumerate() {
            let center = centroid(&self.positions[range.clone()]);
            let (gx, gy) = self.group_legs.step(g);
            for p in &mut self.positions[range.clone()] {
                let d = p.distance(center);
                let (ax, ay) = if d > 0.0 {
                    (
                        self.aggregation * (center.x - p.x) / d,
                        self.aggregation * (center.y - p.y) / d,
                    )
                } else {
                    (0.0, 0.0)
                };
                p.x += gx + ax;
                p.y += gy + ay;
            }
        }

        // Reflection: members bounce individually, headings flip per group.
        self.bounced_x.fill(false);
        self.bounced_y.fill(false);
        for (i, p) in self.positions.iter_mut().enumerate() {
            let r = self.bounds.reflect(p);
            let g = self.group_of[i].index();
            self.bounced_x[g] |= r.x;
            self.bounced_y[g] |= r.y;
        }
        for (g, range) in self.members.iter().enumerate() {
            if self.bounced_x[g] {
                self.group_legs.flip_x(g);
                range.clone().for_each(|i| self.member_legs.flip_x(i));
            }
            if self.bounced_y[g] {
                self.group_legs.flip_y(g);
                range.clone().for_each(|i| self.member_legs.flip_y(i));
            }
        }

        // New personal legs.
        self.member_legs.complete_flights(&mut self.arrived);
        self.member_legs
            .resample(&self.arrived, &self.member_flight, &self.velocity, &mut self.rng);

        // New group legs.
        self.group_legs.complete_flights(&mut self.arrived);
        let turned = self.arrived.len();
        self.group_legs
            .resample(&self.arrived, &self.group_flight, &self.velocity, &mut self.rng);

        self.tick = self.tick.next();
        trace!("reference point group {}: {turned} groups turned", self.tick);
    }
}

fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

impl MovementModel for ReferencePointGroup {
    fn name(&self) -> &'static str {
        "reference_point_group"
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
