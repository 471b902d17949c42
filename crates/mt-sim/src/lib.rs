//! `mt-sim` — configuration-driven trace runs for the mobtrace generators.
//!
//! # Run loop
//!
//! ```text
//! TraceRunner::new(config):
//!   validate run settings, build the engine from config.model
//!   (movement + contact_range → proximity bridge)
//! run(observer), for tick in 1..=config.ticks:
//!   ① advance the engine one tick
//!   ② on_positions / on_contacts
//!   ③ every log_interval ticks → info! progress line
//! then on_run_end
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Rayon-parallel proximity queries (via `mt-contact`).     |
//!
//! # Quick-start
//!
//! ```rust
//! use mt_sim::{NoopObserver, TraceConfig, TraceRunner};
//!
//! let config: TraceConfig = TraceConfig {
//!     ticks: 10,
//!     seed: Some(42),
//!     contact_range: Some(5.0),
//!     ..TraceConfig::default()
//! };
//! let mut runner = TraceRunner::new(config).unwrap();
//! runner.run(&mut NoopObserver).unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod runner;


pub use builder::{TraceSource, build_source};
pub use config::{ModelConfig, TraceConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TraceObserver};
pub use runner::{RunSummary, TraceRunner};
