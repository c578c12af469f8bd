//! Simulation core - multiplier sampling and the trial engine

pub mod engine;
pub mod sampler;
pub mod thresholds;

pub use engine::{AggregateResult, SimulationError, SimulationRun, TrialOutcome};
pub use sampler::{MixtureSampler, MultiplierTriple, Sample, MULTIPLIER_FLOOR};
pub use thresholds::Thresholds;
