//! Memory kernels: how an agent's readiness to change state decays with the
//! time since its last change.

use mt_core::{Tick, validate};

use crate::ContactResult;

/// A weight depending on the current tick and the tick of an agent's last
/// state change.
///
/// Used both as the activation kernel `f` and the partner-recency kernel
/// `Π`.  Any `Fn(Tick, Tick) -> f64` is a kernel.
pub trait MemoryKernel {
    fn weight(&self, now: Tick, since: Tick) -> f64;
}

impl<F: Fn(Tick, Tick) -> f64> MemoryKernel for F {
    #[inline]
    fn weight(&self, now: Tick, since: Tick) -> f64 {
        self(now, since)
    }
}

/// `1 / (1 + (now - since) / scale)`.
///
/// Equal to 1 for an agent that just changed state, halving after `scale`
/// ticks.  The classic parameterization uses the population size as scale.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyperbolicKernel {
    scale: f64,
}

impl HyperbolicKernel {
    pub fn new(scale: f64) -> ContactResult<Self> {
        validate::positive("kernel scale", scale)?;
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl MemoryKernel for HyperbolicKernel {
    #[inline]
    fn weight(&self, now: Tick, since: Tick) -> f64 {
        1.0 / (1.0 + now.since(since) as f64 / self.scale)
    }
}
