//! Multiplier sampler - the randomness source for every test parameter
//!
//! Each metric category draws one triple of deviation multipliers per trial,
//! one from each branch of a three-branch mixture: a pessimistic branch
//! centered at 0.95, a nominal branch at 1.00, and an optimistic branch at
//! 1.05. Branch spread is itself randomized: the standard deviation is a
//! fresh uniform fraction of the branch mean on every draw, so no two trials
//! share a distribution shape.
//!
//! All three branches are drawn on every call even though the engine selects
//! only one per metric; the configuration index decides which after the fact.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Branch means, in selection order (low, mid, high)
pub const BRANCH_MEANS: [f64; 3] = [0.95, 1.00, 1.05];

/// Per-branch bounds of the uniform fraction that sets sigma = U(lo, hi) * mean
pub const BRANCH_STD_FRACTIONS: [(f64, f64); 3] = [(0.05, 0.10), (0.075, 0.15), (0.10, 0.20)];

/// Floor applied to every sampled multiplier
///
/// The normal tails are not bounded away from zero; without a floor a burn
/// multiplier could go non-positive and leave range undefined.
pub const MULTIPLIER_FLOOR: f64 = 0.01;

/// One sampled deviation-multiplier triple, ordered low/mid/high
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierTriple {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl MultiplierTriple {
    /// Uniform triple, useful for fixed-multiplier scenarios
    pub fn splat(value: f64) -> Self {
        Self {
            low: value,
            mid: value,
            high: value,
        }
    }

    /// Multiplier at a selection index (0 = low, 1 = mid, 2 = high)
    pub fn select(&self, index: usize) -> f64 {
        [self.low, self.mid, self.high][index]
    }

    /// Triple with branch order flipped
    ///
    /// Burn rate scales inversely with engine size: a small engine selects the
    /// high-burn branch and a large engine the low one, so the engine indexes
    /// the reversed triple with the same engine-size index it uses everywhere
    /// else.
    pub fn reversed(&self) -> Self {
        Self {
            low: self.high,
            mid: self.mid,
            high: self.low,
        }
    }
}

/// Source of multiplier triples
///
/// A seam between the engine and the randomness source so tests can substitute
/// fixed or scripted multipliers.
pub trait Sample {
    fn sample_triple(&mut self) -> MultiplierTriple;
}

/// Production sampler drawing from the three-branch normal mixture
#[derive(Debug, Clone)]
pub struct MixtureSampler<R: Rng> {
    rng: R,
}

impl MixtureSampler<StdRng> {
    /// Deterministic sampler; same seed reproduces the same trial series
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// OS-entropy sampler for normal runs
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MixtureSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn sample_branch(&mut self, branch: usize) -> f64 {
        let mean = BRANCH_MEANS[branch];
        let (lo, hi) = BRANCH_STD_FRACTIONS[branch];
        let sigma = self.rng.random_range(lo..=hi) * mean;

        // Box-Muller transform for normal distribution
        let u1: f64 = self.rng.random();
        let u2: f64 = self.rng.random();
        let z = (-2.0_f64 * u1.ln()).sqrt() * (2.0_f64 * std::f64::consts::PI * u2).cos();

        (mean + sigma * z).max(MULTIPLIER_FLOOR)
    }
}

impl<R: Rng> Sample for MixtureSampler<R> {
    fn sample_triple(&mut self) -> MultiplierTriple {
        MultiplierTriple {
            low: self.sample_branch(0),
            mid: self.sample_branch(1),
            high: self.sample_branch(2),
        }
    }
}
