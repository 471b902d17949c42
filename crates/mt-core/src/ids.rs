//! Strongly typed, zero-cost identifier wrappers.
//!
//! Engines store per-agent state in parallel `Vec`s, so an id is just the
//! index into those arrays.  The inner integer is `pub`, but callers should
//! prefer `.index()` / `from_index()` for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Wrap a `Vec` index.
            ///
            /// Populations are validated against the id range at engine
            /// construction, so the narrowing cast cannot truncate.
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as $inner)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent (mobile node) in an engine's state arrays.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a group in the reference-point group model.
    pub struct GroupId(u32);
}

/// Largest population any engine accepts.
pub const MAX_AGENTS: usize = u32::MAX as usize;
