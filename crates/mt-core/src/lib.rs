//! `mt-core` — foundational types for the `mobtrace` trace generators.
//!
//! This crate is a dependency of every other `mt-*` crate.  It intentionally
//! has no `mt-*` dependencies and minimal external ones (`rand`, `rand_distr`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `GroupId`                                  |
//! | [`geo`]         | `Point`, `Bounds`, `Reflection`                       |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (one per engine instance)                    |
//! | [`validate`]    | Construction-time parameter checks                    |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod validate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use geo::{Bounds, Point, Reflection};
pub use ids::{AgentId, GroupId};
pub use rng::SimRng;
pub use time::Tick;
