//! Injected randomness for record synthesis.
//!
//! The rule engine and constraint resolver are pure; every random choice
//! the generator makes goes through the [`Sampler`] trait so tests can
//! substitute a seeded or scripted source. The engine never owns a global
//! random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of random choices for the record generator.
pub trait Sampler {
    /// Returns an integer uniformly drawn from the inclusive range
    /// `[min, max]`.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Returns true with the given probability.
    ///
    /// Probabilities at or below 0 always return false; at or above 1
    /// always return true.
    fn chance(&mut self, probability: f64) -> bool;

    /// Picks a uniformly random element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        debug_assert!(!items.is_empty());
        let index = self.int_in_range(0, items.len() as i64 - 1) as usize;
        &items[index]
    }
}

/// A [`Sampler`] backed by a `rand` RNG.
///
/// # Example
///
/// ```
/// use checkroll_engine::generator::{RngSampler, Sampler};
///
/// let mut sampler = RngSampler::seeded(7);
/// let value = sampler.int_in_range(1, 2);
/// assert!(value == 1 || value == 2);
/// ```
#[derive(Debug, Clone)]
pub struct RngSampler<R: Rng> {
    rng: R,
}

impl RngSampler<StdRng> {
    /// Creates a sampler seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic sampler from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSampler<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            self.rng.gen_bool(probability)
        }
    }
}
