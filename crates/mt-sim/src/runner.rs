//! Tick loop driving one engine and reporting to an observer.

use log::info;
use mt_contact::ContactModel;
use mt_core::Tick;
use mt_mobility::MovementModel;

use crate::builder::{TraceSource, build_source};
use crate::{SimError, SimResult, TraceConfig, TraceObserver};

/// Totals over the ticks run so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks:    u64,
    /// Sum of contact-list lengths.  Zero for pure movement runs.
    pub contacts: u64,
}

/// Runs a [`TraceConfig`].
///
/// # Example
///
/// ```rust
/// use mt_sim::{NoopObserver, TraceConfig, TraceRunner};
///
/// let config = TraceConfig { ticks: 50, seed: Some(1), ..TraceConfig::default() };
/// let mut runner = TraceRunner::new(config).unwrap();
/// let summary = runner.run(&mut NoopObserver).unwrap();
/// assert_eq!(summary.ticks, 50);
/// ```
pub struct TraceRunner {
    config:  TraceConfig,
    source:  TraceSource,
    summary: RunSummary,
}

impl TraceRunner {
    /// Validate run-level settings and build the engine.
    pub fn new(config: TraceConfig) -> SimResult<Self> {
        if config.ticks == 0 {
            return Err(SimError::Config("ticks must be positive".to_string()));
        }
        let source = build_source(&config.model, config.contact_range, config.seed)?;
        info!(
            "trace: {} with {} agents for {} ticks (seed {})",
            source.name(),
            source.agent_count(),
            config.ticks,
            config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
        );
        Ok(Self { config, source, summary: RunSummary::default() })
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn source(&self) -> &TraceSource {
        &self.source
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Ticks completed by the engine.
    pub fn tick(&self) -> Tick {
        match &self.source {
            TraceSource::Movement(m) => m.tick(),
            TraceSource::Contact(c) => c.tick(),
            TraceSource::Proximity(p) => p.tick(),
        }
    }

    /// Run the configured number of ticks, then call `on_run_end`.
    pub fn run<O: TraceObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        self.run_ticks(self.config.ticks, observer)?;
        let end = self.tick();
        observer.on_run_end(end);
        info!(
            "trace finished at {end}: {} ticks, {} contacts",
            self.summary.ticks, self.summary.contacts
        );
        Ok(self.summary)
    }

    /// Run exactly `n` more ticks, ignoring `config.ticks`.
    ///
    /// Useful for tests and incremental stepping.  `on_run_end` is not called.
    pub fn run_ticks<O: TraceObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let emitted = self.step(observer)?;
            self.summary.ticks += 1;
            self.summary.contacts += emitted as u64;

            let now = self.tick();
            let interval = self.config.log_interval;
            if interval > 0 && now.0.is_multiple_of(interval) {
                if self.source.reports_contacts() {
                    info!(
                        "{} {now}: {emitted} contacts ({} total)",
                        self.source.name(),
                        self.summary.contacts
                    );
                } else {
                    info!("{} {now}: {} agents moved", self.source.name(), self.source.agent_count());
                }
            }
        }
        Ok(())
    }

    /// Advance the engine one tick.  Returns the number of contacts emitted.
    fn step<O: TraceObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        match &mut self.source {
            TraceSource::Movement(m) => {
                m.advance();
                observer.on_positions(m.tick(), m.positions());
                Ok(0)
            }
            TraceSource::Contact(c) => {
                let contacts = c.advance()?;
                observer.on_contacts(c.tick(), &contacts);
                Ok(contacts.len())
            }
            TraceSource::Proximity(p) => {
                let contacts = p.advance()?;
                let now = p.tick();
                observer.on_positions(now, p.positions());
                observer.on_contacts(now, &contacts);
                Ok(contacts.len())
            }
        }
    }
}
