//! Serializable run configuration.
//!
//! A [`TraceConfig`] names one engine ([`ModelConfig`]) plus run-level
//! settings.  Configs are plain data: nothing is validated until
//! [`TraceRunner::new`](crate::TraceRunner::new) builds the engine.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "ticks": 1000,
//!   "seed": 42,
//!   "contact_range": 5.0,
//!   "model": {
//!     "model": "truncated_levy_walk",
//!     "agents": 100,
//!     "bounds": { "max_x": 100.0, "max_y": 100.0 },
//!     "params": { "flight_max": 30.0 }
//!   }
//! }
//! ```
//!
//! Omitted fields take the defaults listed on each type; omitted `params`
//! take the classic parameter values of that model.

use mt_core::Bounds;
use mt_mobility::{
    GaussMarkovParams, GroupParams, LevyWalkParams, RandomDirectionParams, RandomWalkParams,
    RandomWaypointParams,
};
use serde::{Deserialize, Serialize};

// ── TraceConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Ticks to run.  Must be positive.  Default: 1000.
    pub ticks: u64,

    /// Run seed.  `None` seeds from OS entropy (not reproducible).
    pub seed: Option<u64>,

    /// Log progress every N ticks; 0 disables progress logs.  Default: 100.
    pub log_interval: u64,

    /// For movement models: also report pairs closer than this distance.
    pub contact_range: Option<f64>,

    pub model: ModelConfig,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            ticks:         1_000,
            seed:          None,
            log_interval:  100,
            contact_range: None,
            model:         ModelConfig::default(),
        }
    }
}

// ── ModelConfig ───────────────────────────────────────────────────────────────

/// One variant per engine, tagged by `"model"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelConfig {
    RandomWalk {
        agents: usize,
        bounds: Bounds,
        #[serde(default)]
        params: RandomWalkParams,
    },
    TruncatedLevyWalk {
        agents: usize,
        bounds: Bounds,
        #[serde(default)]
        params: LevyWalkParams,
    },
    HeterogeneousTruncatedLevyWalk {
        agents: usize,
        bounds: Bounds,
        #[serde(default)]
        params: LevyWalkParams,
    },
    RandomDirection {
        agents: usize,
        bounds: Bounds,
        #[serde(default)]
        params: RandomDirectionParams,
    },
    RandomWaypoint {
        agents: usize,
        bounds: Bounds,
        #[serde(default)]
        params: RandomWaypointParams,
    },
    GaussMarkov {
        agents: usize,
        bounds: Bounds,
        #[serde(default)]
        params: GaussMarkovParams,
    },
    /// Population is the sum of `params.group_sizes`.
    ReferencePointGroup {
        bounds: Bounds,
        #[serde(default)]
        params: GroupParams,
    },
    Gnp {
        agents: usize,
        p:      f64,
    },
    Gnm {
        agents: usize,
        edges:  usize,
    },
    EdgeMarkovian {
        agents: usize,
        /// Birth probability of an absent edge.
        p:      f64,
        /// Death probability of a present edge.
        q:      f64,
        /// Density of the initial graph.
        #[serde(default)]
        g:      f64,
    },
    ContinuousEdgeMarkovian {
        agents: usize,
        /// Mean inter-contact time in ticks.
        mean:   f64,
    },
    BroadEdgeMarkovian {
        agents: usize,
        alpha:  f64,
    },
    RandomContact {
        agents: usize,
    },
    /// Hyperbolic kernels with scale `kernel_scale` (default: `agents`) serve
    /// as both activation and recency kernel.
    ModelB {
        agents:       usize,
        b0:           f64,
        b1:           f64,
        mu:           f64,
        #[serde(default)]
        kernel_scale: Option<f64>,
    },
    /// Population is the length of `activity`.
    HeterogeneousModelB {
        activity:     Vec<f64>,
        mu:           f64,
        #[serde(default)]
        kernel_scale: Option<f64>,
    },
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig::TruncatedLevyWalk {
            agents: 100,
            bounds: Bounds { max_x: 100.0, max_y: 100.0 },
            params: LevyWalkParams::default(),
        }
    }
}

impl ModelConfig {
    /// Whether the model produces positions (and can be bridged to contacts).
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            ModelConfig::RandomWalk { .. }
                | ModelConfig::TruncatedLevyWalk { .. }
                | ModelConfig::HeterogeneousTruncatedLevyWalk { .. }
                | ModelConfig::RandomDirection { .. }
                | ModelConfig::RandomWaypoint { .. }
                | ModelConfig::GaussMarkov { .. }
                | ModelConfig::ReferencePointGroup { .. }
        )
    }
}
