//! Memoryless and edge-Markovian random-graph generators.
//!
//! | Engine           | Per tick                                                   |
//! |------------------|------------------------------------------------------------|
//! | `DynamicGnp`     | every pair present independently with probability `p`     |
//! | `DynamicGnm`     | exactly `m` distinct pairs, uniform without replacement    |
//! | `EdgeMarkovian`  | absent pairs appear w.p. `p`, present pairs vanish w.p. `q` |
//! | `RandomContact`  | exactly one uniform pair                                   |
//!
//! Pair state is kept in one slot per unordered pair, in the row-major
//! upper-triangle order of [`pairs`](crate::contact::pairs), so emitting the
//! live slots in order yields an already-sorted list.

use log::{debug, trace};
use mt_core::{AgentId, ConfigError, SimRng, Tick, validate};
use rustc_hash::FxHashSet;

use crate::contact::{Contact, ContactModel, pair_count, pairs};
use crate::ContactResult;

// ── G(n, p) ───────────────────────────────────────────────────────────────────

/// Erdős–Rényi `G(n, p)` redrawn from scratch every tick.
pub struct DynamicGnp {
    agent_count: usize,
    p:           f64,
    rng:         SimRng,
    tick:        Tick,
}

impl DynamicGnp {
    pub fn new(agent_count: usize, p: f64, rng: SimRng) -> ContactResult<Self> {
        validate::population(agent_count)?;
        validate::probability("p", p)?;
        debug!("G(n,p): {agent_count} agents, p {p}");
        Ok(Self { agent_count, p, rng, tick: Tick::ZERO })
    }
}

impl ContactModel for DynamicGnp {
    fn name(&self) -> &'static str {
        "gnp"
    }

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        let (p, rng) = (self.p, &mut self.rng);
        let contacts: Vec<Contact> = pairs(self.agent_count).filter(|_| rng.gen_bool(p)).collect();
        self.tick = self.tick.next();
        trace!("G(n,p) {}: {} edges", self.tick, contacts.len());
        Ok(contacts)
    }
}

// ── G(n, m) ───────────────────────────────────────────────────────────────────

/// Erdős–Rényi `G(n, m)` redrawn from scratch every tick.
///
/// Pairs are drawn by rejection: uniform endpoints, discarding self-pairs
/// and pairs already drawn this tick.
pub struct DynamicGnm {
    agent_count: usize,
    edge_count:  usize,
    rng:         SimRng,
    tick:        Tick,
    drawn:       FxHashSet<Contact>,
}

impl DynamicGnm {
    pub fn new(agent_count: usize, edge_count: usize, rng: SimRng) -> ContactResult<Self> {
        validate::population(agent_count)?;
        let available = pair_count(agent_count);
        if edge_count > available {
            return Err(ConfigError::TooManyEdges { requested: edge_count, available }.into());
        }
        debug!("G(n,m): {agent_count} agents, m {edge_count}");
        Ok(Self {
            agent_count,
            edge_count,
            rng,
            tick: Tick::ZERO,
            drawn: FxHashSet::default(),
        })
    }
}

impl ContactModel for DynamicGnm {
    fn name(&self) -> &'static str {
        "gnm"
    }

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        self.drawn.clear();
        let mut rejected = 0usize;
        while self.drawn.len() < self.edge_count {
            let a = self.rng.index(self.agent_count);
            let b = self.rng.index(self.agent_count);
            match Contact::new(AgentId::from_index(a), AgentId::from_index(b)) {
                Some(c) if self.drawn.insert(c) => {}
                _ => rejected += 1,
            }
        }
        let mut contacts: Vec<Contact> = self.drawn.iter().copied().collect();
        contacts.sort_unstable();
        self.tick = self.tick.next();
        trace!("G(n,m) {}: {} edges, {rejected} rejected draws", self.tick, contacts.len());
        Ok(contacts)
    }
}

// ── Edge-Markovian ────────────────────────────────────────────────────────────

/// Discrete-time edge-Markovian evolving graph.
///
/// Each tick every absent pair appears with probability `p` (birth) and every
/// present pair disappears with probability `q` (death), independently.  The
/// initial graph is `G(n, g)`.  The update runs before the graph is emitted,
/// so the first returned list already reflects one transition.
pub struct EdgeMarkovian {
    agent_count: usize,
    birth:       f64,
    death:       f64,
    /// One slot per unordered pair, upper-triangle order.
    present:     Vec<bool>,
    rng:         SimRng,
    tick:        Tick,
}

impl EdgeMarkovian {
    pub fn new(
        agent_count: usize,
        birth:       f64,
        death:       f64,
        initial:     f64,
        mut rng:     SimRng,
    ) -> ContactResult<Self> {
        validate::population(agent_count)?;
        validate::probability("birth probability", birth)?;
        validate::probability("death probability", death)?;
        validate::probability("initial density", initial)?;

        let present = (0..pair_count(agent_count)).map(|_| rng.gen_bool(initial)).collect();
        debug!("edge-Markovian: {agent_count} agents, p {birth}, q {death}, g {initial}");
        Ok(Self { agent_count, birth, death, present, rng, tick: Tick::ZERO })
    }

    /// Number of pairs currently present.
    pub fn edge_count(&self) -> usize {
        self.present.iter().filter(|&&e| e).count()
    }
}

impl ContactModel for EdgeMarkovian {
    fn name(&self) -> &'static str {
        "edge_markovian"
    }

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        let (mut born, mut died) = (0usize, 0usize);
        for edge in &mut self.present {
            if *edge {
                if self.rng.gen_bool(self.death) {
                    *edge = false;
                    died += 1;
                }
            } else if self.rng.gen_bool(self.birth) {
                *edge = true;
                born += 1;
            }
        }
        let contacts: Vec<Contact> = pairs(self.agent_count)
            .zip(&self.present)
            .filter_map(|(c, &live)| live.then_some(c))
            .collect();
        self.tick = self.tick.next();
        trace!("edge-Markovian {}: +{born} -{died}, {} edges", self.tick, contacts.len());
        Ok(contacts)
    }
}

// ── Random contact ────────────────────────────────────────────────────────────

/// One uniformly random pair per tick.
pub struct RandomContact {
    agent_count: usize,
    rng:         SimRng,
    tick:        Tick,
}

impl RandomContact {
    pub fn new(agent_count: usize, rng: SimRng) -> ContactResult<Self> {
        validate::population(agent_count)?;
        if agent_count < 2 {
            return Err(ConfigError::TooFewAgents { required: 2, got: agent_count }.into());
        }
        debug!("random contact: {agent_count} agents");
        Ok(Self { agent_count, rng, tick: Tick::ZERO })
    }
}

impl ContactModel for RandomContact {
    fn name(&self) -> &'static str {
        "random_contact"
    }

    fn agent_count(&self) -> usize {
        self.agent_count
    }

    fn tick(&self) -> Tick {
        self.tick
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        let contact = loop {
            let a = self.rng.index(self.agent_count);
            let b = self.rng.index(self.agent_count);
            if let Some(c) = Contact::new(AgentId::from_index(a), AgentId::from_index(b)) {
                break c;
            }
        };
        self.tick = self.tick.next();
        Ok(vec![contact])
    }
}
