//! Proximity bridge: turns a position stream into a contact stream.
//!
//! [`ProximityContacts`] wraps any [`MovementModel`].  Each tick it advances
//! the model and reports every pair of agents closer than `range`.
//!
//! Range queries go through an R-tree (via `rstar`) bulk-loaded from the
//! tick's positions, which keeps dense-but-sparse-contact populations well
//! below the O(N²) pairwise scan.  [`pairwise_contacts`] is that scan, kept
//! as the reference the indexed path must agree with.
//!
//! With the `parallel` feature the per-agent queries run on Rayon's pool.
//! Output is sorted either way.

use log::{debug, trace, warn};
use mt_core::{AgentId, Point, Tick, validate};
use mt_mobility::MovementModel;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::contact::{Contact, ContactModel};
use crate::ContactResult;

// ── R-tree entry ──────────────────────────────────────────────────────────────

struct AgentEntry {
    point: [f64; 2],
    agent: AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for AgentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Pairs strictly closer than `range`, via an R-tree.
pub fn indexed_contacts(positions: &[Point], range: f64) -> Vec<Contact> {
    let range_2 = range * range;
    let tree = RTree::bulk_load(
        positions
            .iter()
            .enumerate()
            .map(|(i, p)| AgentEntry { point: [p.x, p.y], agent: AgentId::from_index(i) })
            .collect(),
    );

    let neighbours = |(i, p): (usize, &Point)| -> Vec<Contact> {
        let low = AgentId::from_index(i);
        tree.locate_within_distance([p.x, p.y], range_2)
            .filter(|e| e.agent > low && e.distance_2(&[p.x, p.y]) < range_2)
            .filter_map(|e| Contact::new(low, e.agent))
            .collect()
    };

    #[cfg(feature = "parallel")]
    let mut contacts: Vec<Contact> = {
        use rayon::prelude::*;
        positions.par_iter().enumerate().flat_map_iter(neighbours).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let mut contacts: Vec<Contact> = positions.iter().enumerate().flat_map(neighbours).collect();

    contacts.sort_unstable();
    contacts
}

/// Pairs strictly closer than `range`, by checking all `N(N-1)/2` pairs.
pub fn pairwise_contacts(positions: &[Point], range: f64) -> Vec<Contact> {
    let range_2 = range * range;
    let mut contacts = Vec::new();
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            if a.distance_2(*b) < range_2 {
                contacts.push(Contact::ordered(i, j));
            }
        }
    }
    contacts
}

// ── Bridge ────────────────────────────────────────────────────────────────────

pub struct ProximityContacts<M> {
    model: M,
    range: f64,
}

impl<M: MovementModel> ProximityContacts<M> {
    pub fn new(model: M, range: f64) -> ContactResult<Self> {
        validate::positive("contact range", range)?;
        let diagonal = model.bounds().diagonal();
        if range > diagonal {
            warn!(
                "contact range {range} exceeds the {} area diagonal {diagonal:.2}; every pair is always in contact",
                model.name()
            );
        }
        debug!("proximity contacts over {}: {} agents, range {range}", model.name(), model.agent_count());
        Ok(Self { model, range })
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Positions produced by the most recent tick.
    pub fn positions(&self) -> &[Point] {
        self.model.positions()
    }

    pub fn into_inner(self) -> M {
        self.model
    }
}

impl<M: MovementModel> ContactModel for ProximityContacts<M> {
    fn name(&self) -> &'static str {
        "proximity"
    }

    fn agent_count(&self) -> usize {
        self.model.agent_count()
    }

    fn tick(&self) -> Tick {
        self.model.tick()
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        let positions = self.model.advance();
        let contacts = indexed_contacts(positions, self.range);
        trace!("proximity {}: {} contacts", self.model.tick(), contacts.len());
        Ok(contacts)
    }
}
