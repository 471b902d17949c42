//! The contact pair and the per-tick iteration contract shared by every
//! contact engine.

use std::fmt;

use mt_core::{AgentId, Tick};

use crate::ContactResult;

// ── Contact ───────────────────────────────────────────────────────────────────

/// An undirected contact between two distinct agents, stored with
/// `low < high`.
///
/// The derived ordering is lexicographic on `(low, high)`, so a sorted
/// `Vec<Contact>` is the canonical form of one tick's contact list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact {
    low:  AgentId,
    high: AgentId,
}

impl Contact {
    /// Canonical pair for `a` and `b`, or `None` when `a == b`.
    #[inline]
    pub fn new(a: AgentId, b: AgentId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Contact { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Contact { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Build from indices already known to satisfy `low < high`.
    #[inline]
    pub(crate) fn ordered(low: usize, high: usize) -> Self {
        debug_assert!(low < high);
        Contact { low: AgentId::from_index(low), high: AgentId::from_index(high) }
    }

    #[inline]
    pub fn low(self) -> AgentId {
        self.low
    }

    #[inline]
    pub fn high(self) -> AgentId {
        self.high
    }

    #[inline]
    pub fn as_pair(self) -> (AgentId, AgentId) {
        (self.low, self.high)
    }

    /// Whether `agent` is one of the two endpoints.
    #[inline]
    pub fn involves(self, agent: AgentId) -> bool {
        self.low == agent || self.high == agent
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low.0, self.high.0)
    }
}

// ── Pair indexing ─────────────────────────────────────────────────────────────

/// Number of unordered pairs over `n` agents.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Every unordered pair over `n` agents in row-major upper-triangle order:
/// `(0,1), (0,2), …, (0,n-1), (1,2), …`.
///
/// Edge engines store one slot per pair in this order.
pub fn pairs(n: usize) -> impl Iterator<Item = Contact> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| Contact::ordered(i, j)))
}

// ── ContactModel ──────────────────────────────────────────────────────────────

/// A restartable, effectively infinite producer of per-tick contact lists.
///
/// Each call to [`advance`](ContactModel::advance) runs exactly one tick and
/// returns every pair in contact during it.  Lists are sorted and contain
/// no duplicates.  Engines are never rewound; restart by constructing a new
/// one.
pub trait ContactModel {
    fn name(&self) -> &'static str;

    fn agent_count(&self) -> usize;

    /// Number of completed ticks.
    fn tick(&self) -> Tick;

    /// Run one tick.
    ///
    /// Only engines with data-dependent sampling can fail; an error leaves the
    /// engine unusable and every later call returns the same error.
    fn advance(&mut self) -> ContactResult<Vec<Contact>>;
}

impl<M: ContactModel + ?Sized> ContactModel for Box<M> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn agent_count(&self) -> usize {
        (**self).agent_count()
    }

    fn tick(&self) -> Tick {
        (**self).tick()
    }

    fn advance(&mut self) -> ContactResult<Vec<Contact>> {
        (**self).advance()
    }
}
