//! Clique arena for the human-contact process.
//!
//! Each active agent lists every other member of its conversation group
//! together with the tick that pair's contact began.  Groups are therefore
//! cliques of mutually-listing agents, and an agent with no partners is
//! inactive.
//!
//! # Inactive pool
//!
//! Inactive agents are kept in a dense `Vec` with a reverse index
//! (`pool_slot[agent]`), so membership tests, insertion and removal are all
//! O(1).  Removal swaps the last entry into the vacated slot; the pool order
//! is therefore a deterministic function of the event history.

use std::collections::BTreeMap;

use mt_core::{AgentId, Tick};

use crate::contact::Contact;

#[derive(Clone, Debug, Default)]
pub struct CliqueArena {
    /// `partners[i]`: every other member of `i`'s group → tick the pair met.
    partners:    Vec<BTreeMap<AgentId, Tick>>,
    /// Tick of each agent's most recent activation or deactivation.
    last_change: Vec<Tick>,
    /// Dense list of inactive agents.
    inactive:    Vec<AgentId>,
    /// Position of each agent in `inactive`, `None` while active.
    pool_slot:   Vec<Option<usize>>,
}

impl CliqueArena {
    /// `agent_count` agents, all inactive, all last changed at tick zero.
    pub fn new(agent_count: usize) -> Self {
        Self {
            partners:    vec![BTreeMap::new(); agent_count],
            last_change: vec![Tick::ZERO; agent_count],
            inactive:    (0..agent_count).map(AgentId::from_index).collect(),
            pool_slot:   (0..agent_count).map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    #[inline]
    pub fn is_active(&self, agent: AgentId) -> bool {
        self.pool_slot[agent.index()].is_none()
    }

    #[inline]
    pub fn partners(&self, agent: AgentId) -> &BTreeMap<AgentId, Tick> {
        &self.partners[agent.index()]
    }

    #[inline]
    pub fn last_change(&self, agent: AgentId) -> Tick {
        self.last_change[agent.index()]
    }

    /// Inactive agents in pool order.
    #[inline]
    pub fn inactive(&self) -> &[AgentId] {
        &self.inactive
    }

    #[inline]
    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Two inactive agents form a new 2-clique.
    pub fn pair_up(&mut self, a: AgentId, b: AgentId, now: Tick) {
        debug_assert!(a != b && !self.is_active(a) && !self.is_active(b));
        self.partners[a.index()].insert(b, now);
        self.partners[b.index()].insert(a, now);
        self.activate(a, now);
        self.activate(b, now);
    }

    /// Inactive `recruit` joins the whole group of active `host`.
    pub fn recruit(&mut self, host: AgentId, recruit: AgentId, now: Tick) {
        debug_assert!(self.is_active(host) && !self.is_active(recruit));
        let members: Vec<AgentId> = self.partners[host.index()]
            .keys()
            .copied()
            .chain(std::iter::once(host))
            .collect();
        for m in members {
            self.partners[m.index()].insert(recruit, now);
            self.partners[recruit.index()].insert(m, now);
        }
        self.activate(recruit, now);
        self.last_change[host.index()] = now;
    }

    /// Active `agent` leaves its group.  Returns the number of agents that
    /// became inactive (1, or 2 when a 2-clique dissolves).
    pub fn leave(&mut self, agent: AgentId, now: Tick) -> usize {
        debug_assert!(self.is_active(agent));
        let former = std::mem::take(&mut self.partners[agent.index()]);
        let mut deactivated = 1;
        for &m in former.keys() {
            let rest = &mut self.partners[m.index()];
            rest.remove(&agent);
            if rest.is_empty() {
                self.deactivate(m, now);
                deactivated += 1;
            }
        }
        self.deactivate(agent, now);
        deactivated
    }

    fn activate(&mut self, agent: AgentId, now: Tick) {
        if let Some(slot) = self.pool_slot[agent.index()].take() {
            self.inactive.swap_remove(slot);
            if let Some(&moved) = self.inactive.get(slot) {
                self.pool_slot[moved.index()] = Some(slot);
            }
        }
        self.last_change[agent.index()] = now;
    }

    fn deactivate(&mut self, agent: AgentId, now: Tick) {
        if self.pool_slot[agent.index()].is_none() {
            self.pool_slot[agent.index()] = Some(self.inactive.len());
            self.inactive.push(agent);
        }
        self.last_change[agent.index()] = now;
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// Every pair of group members, sorted.
    pub fn contacts(&self) -> Vec<Contact> {
        let mut out = Vec::new();
        for (i, partners) in self.partners.iter().enumerate() {
            let low = AgentId::from_index(i);
            out.extend(partners.range(low..).filter_map(|(&high, _)| Contact::new(low, high)));
        }
        out
    }

    /// Checks the arena's structural invariants:
    ///
    /// - the partner relation is symmetric with matching start ticks;
    /// - every group is a clique (each member lists all the others);
    /// - an agent is in the inactive pool exactly when it has no partners,
    ///   and the reverse index agrees with the pool.
    pub fn check(&self) -> Result<(), String> {
        for (i, partners) in self.partners.iter().enumerate() {
            let a = AgentId::from_index(i);
            if partners.contains_key(&a) {
                return Err(format!("{a} lists itself"));
            }
            for (&b, &since) in partners {
                match self.partners[b.index()].get(&a) {
                    Some(&back) if back == since => {}
                    Some(_) => return Err(format!("{a} and {b} disagree on when they met")),
                    None => return Err(format!("{a} lists {b} but not vice versa")),
                }
                let group_b = self.partners[b.index()].len();
                if group_b != partners.len() {
                    return Err(format!("{a} and {b} are in groups of different size"));
                }
                if let Some(c) = partners.keys().find(|&&c| c != b && !self.partners[b.index()].contains_key(&c)) {
                    return Err(format!("{b} is missing group member {c} of {a}"));
                }
            }
            let pooled = self.pool_slot[i];
            match (partners.is_empty(), pooled) {
                (true, Some(slot)) if self.inactive.get(slot) == Some(&a) => {}
                (true, _) => return Err(format!("inactive {a} is not pooled correctly")),
                (false, Some(_)) => return Err(format!("active {a} is in the inactive pool")),
                (false, None) => {}
            }
        }
        let pooled = self.pool_slot.iter().filter(|s| s.is_some()).count();
        if pooled != self.inactive.len() {
            return Err(format!("pool holds {} agents, index marks {pooled}", self.inactive.len()));
        }
        Ok(())
    }
}
