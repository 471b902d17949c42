//! Engine-owned random source.
//!
//! # Determinism strategy
//!
//! Every engine instance owns exactly one `SimRng`.  Nothing is shared
//! between instances and there is no process-wide generator, so:
//!
//! - two engines built with the same parameters and the same seed produce
//!   identical event sequences;
//! - two engines running side by side never perturb each other's streams.
//!
//! Code that builds engines from one run-level seed derives each engine's
//! stream with [`SimRng::child`], which keeps the whole run reproducible from
//! that seed.
//!
//! When no seed is configured the generator is seeded from OS entropy.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-engine deterministic RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is given, `from_entropy()` otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    /// For `f64` this is `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform index in `0..n`.  `n` must be non-zero.
    #[inline]
    pub fn index(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    /// `min + (max - min)·u` with `u ∈ [0, 1)`.
    ///
    /// Unlike `gen_range` this accepts `min == max` (returns `min`).
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.random::<f64>()
    }

    /// Uniform angle in `[0, 2π)`.
    #[inline]
    pub fn angle(&mut self) -> f64 {
        self.uniform(0.0, std::f64::consts::TAU)
    }

    /// A standard normal variate.
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }

    /// Inverse-transform draw from the power law `p(x) ∝ x^exponent`
    /// truncated to `[min, max]`.
    ///
    /// `exponent` must not be `-1` and `0 < min <= max`; callers validate at
    /// construction (see [`crate::validate::power_law`]).
    #[inline]
    pub fn truncated_power_law(&mut self, exponent: f64, min: f64, max: f64) -> f64 {
        let a = exponent + 1.0;
        let lo = min.powf(a);
        let hi = max.powf(a);
        ((hi - lo) * self.random::<f64>() + lo).powf(1.0 / a)
    }

    /// Draw from any `rand` distribution.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, distr: &D) -> T {
        self.0.sample(distr)
    }
}
