//! `mt-contact` — per-tick contact lists ("who is in contact with whom").
//!
//! # Crate layout
//!
//! | Module          | Contents                                                           |
//! |-----------------|--------------------------------------------------------------------|
//! | [`contact`]     | `Contact` canonical pair, `ContactModel` iteration contract         |
//! | [`graph`]       | `DynamicGnp`, `DynamicGnm`, `EdgeMarkovian`, `RandomContact`        |
//! | [`continuous`]  | `ContinuousEdgeMarkovian` (exponential and broad inter-contacts)    |
//! | [`human`]       | `HumanContact` (modelB / heterogeneous), kernels, clique arena      |
//! | [`proximity`]   | `ProximityContacts` — contacts from a movement model's positions    |
//! | [`error`]       | `ContactError`, `ContactResult<T>`                                  |
//!
//! Every engine yields a sorted, duplicate-free `Vec<Contact>` per tick.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Rayon-parallel range queries in `ProximityContacts`.    |
//! | `serde`    | Serialize/Deserialize on `Contact` and parameter types. |
//!
//! # Usage
//!
//! ```rust
//! use mt_core::SimRng;
//! use mt_contact::{ContactModel, HumanContact, HyperbolicKernel};
//!
//! let kernel = HyperbolicKernel::new(100.0).unwrap();
//! let mut model =
//!     HumanContact::model_b(100, 0.51, 0.86, 0.95, kernel, kernel, SimRng::new(1)).unwrap();
//! for _ in 0..1_000 {
//!     let contacts = model.advance().unwrap();
//!     assert!(contacts.iter().all(|c| c.low() < c.high()));
//! }
//! ```

pub mod contact;
pub mod continuous;
pub mod error;
pub mod graph;
pub mod human;
pub mod proximity;

#[cfg(test)]
mod tests;

pub use contact::{Contact, ContactModel, pair_count, pairs};
pub use continuous::{ContinuousEdgeMarkovian, InterContact};
pub use error::{ContactError, ContactResult};
pub use graph::{DynamicGnm, DynamicGnp, EdgeMarkovian, RandomContact};
pub use human::{Activation, CliqueArena, HumanContact, HyperbolicKernel, MemoryKernel};
pub use proximity::{ProximityContacts, indexed_contacts, pairwise_contacts};
