//! The iteration contract shared by every movement engine.

use mt_core::{Bounds, Point, Tick};

/// An infinite, single-consumer producer of agent positions.
///
/// Each call to [`advance`](Self::advance) runs exactly one tick and returns
/// the `N` positions after it.  Engines cannot be rewound; to restart, build
/// a new one.  After every tick all positions satisfy
/// `0 <= x <= max_x` and `0 <= y <= max_y`.
pub trait MovementModel {
    /// Short model name for logs.
    fn name(&self) -> &'static str;

    /// The simulation area.
    fn bounds(&self) -> Bounds;

    /// Ticks advanced so far (`Tick::ZERO` right after construction).
    fn tick(&self) -> Tick;

    /// Current positions, indexed by `AgentId`.
    fn positions(&self) -> &[Point];

    /// Run one tick and return the new positions.
    fn advance(&mut self) -> &[Point];

    fn agent_count(&self) -> usize {
        self.positions().len()
    }

    /// Turn the engine into an iterator of owned position snapshots.
    fn snapshots(self) -> Snapshots<Self>
    where
        Self: Sized,
    {
        Snapshots(self)
    }
}

impl<M: MovementModel + ?Sized> MovementModel for Box<M> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    fn tick(&self) -> Tick {
        (**self).tick()
    }

    fn positions(&self) -> &[Point] {
        (**self).positions()
    }

    fn advance(&mut self) -> &[Point] {
        (**self).advance()
    }
}

/// Never-ending iterator over a model's positions, one `Vec` per tick.
pub struct Snapshots<M>(M);

impl<M> Snapshots<M> {
    /// Recover the wrapped engine.
    pub fn into_inner(self) -> M {
        self.0
    }
}

impl<M: MovementModel> Iterator for Snapshots<M> {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Vec<Point>> {
        Some(self.0.advance().to_vec())
    }
}
