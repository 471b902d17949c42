//! Trace observer trait for consuming per-tick output.

use mt_contact::Contact;
use mt_core::{Point, Tick};

/// Callbacks invoked by [`TraceRunner`][crate::TraceRunner] after every tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A movement model calls
/// `on_positions`; a contact model calls `on_contacts`; a movement model
/// with a contact range calls both, positions first.
///
/// # Example: contact counter
///
/// ```rust
/// use mt_contact::Contact;
/// use mt_core::Tick;
/// use mt_sim::TraceObserver;
///
/// #[derive(Default)]
/// struct Counter { total: usize }
///
/// impl TraceObserver for Counter {
///     fn on_contacts(&mut self, _tick: Tick, contacts: &[Contact]) {
///         self.total += contacts.len();
///     }
/// }
/// ```
pub trait TraceObserver {
    /// Positions after tick `tick`, indexed by `AgentId`.
    fn on_positions(&mut self, _tick: Tick, _positions: &[Point]) {}

    /// Sorted contact list of tick `tick`.
    fn on_contacts(&mut self, _tick: Tick, _contacts: &[Contact]) {}

    /// Called once after the final tick of a [`run`][crate::TraceRunner::run].
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`TraceObserver`] that does nothing.
pub struct NoopObserver;

impl TraceObserver for NoopObserver {}
