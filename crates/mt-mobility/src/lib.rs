//! `mt-mobility` — synthetic agent trajectories.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                        |
//! |-------------------|-----------------------------------------------------------------|
//! | [`model`]         | `MovementModel` — the per-tick iteration contract               |
//! | [`distribution`]  | Flight / velocity / wait samplers                               |
//! | [`state`]         | `Legs`, `WalkState` — per-agent SoA flight state                |
//! | [`walk`]          | `StochasticWalk` — the generic flight-based engine              |
//! | [`presets`]       | Random walk, truncated Lévy walks, random direction             |
//! | [`waypoint`]      | `RandomWaypoint`                                                |
//! | [`gauss_markov`]  | `GaussMarkov`                                                   |
//! | [`group`]         | `ReferencePointGroup`                                           |
//! | [`error`]         | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Usage
//!
//! ```rust
//! use mt_core::{Bounds, SimRng};
//! use mt_mobility::{LevyWalkParams, MovementModel, truncated_levy_walk};
//!
//! let bounds = Bounds::new(100.0, 100.0).unwrap();
//! let mut walk = truncated_levy_walk(50, bounds, &LevyWalkParams::default(), SimRng::new(7)).unwrap();
//! for _ in 0..100 {
//!     let positions = walk.advance();
//!     assert!(positions.iter().all(|p| bounds.contains(*p)));
//! }
//! ```

pub mod distribution;
pub mod error;
pub mod gauss_markov;
pub mod group;
pub mod model;
pub mod presets;
pub mod state;
pub mod walk;
pub mod waypoint;


pub use distribution::{
    Constant, PerAgentUniform, SampleDistribution, SqrtScaled, TruncatedPowerLaw, Uniform,
    UniformLength, VelocityDistribution,
};
pub use error::{MobilityError, MobilityResult};
pub use gauss_markov::{GaussMarkov, GaussMarkovParams};
pub use group::{GroupParams, ReferencePointGroup};
pub use model::{MovementModel, Snapshots};
pub use presets::{
    LevyWalkParams, RandomDirectionParams, RandomWalkParams, VelocityRange,
    heterogeneous_truncated_levy_walk, random_direction, random_walk, truncated_levy_walk,
};
pub use state::{Legs, WalkState};
pub use walk::StochasticWalk;
pub use waypoint::{RandomWaypoint, RandomWaypointParams};
