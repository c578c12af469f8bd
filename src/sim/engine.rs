//! Simulation engine - trial loop, metric derivation, and aggregation
//!
//! Runs N independent prototype tests under a fixed configuration. Each test
//! samples a fresh multiplier triple per metric category, selects one branch
//! per metric by configuration index, derives the full-scale metrics from the
//! baseline thresholds, and accumulates per-test series. Aggregation averages
//! each series (or passes the single test through raw when N = 1).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, Configuration};
use crate::sim::sampler::Sample;
use crate::sim::thresholds::Thresholds;

/// Hull form factor by hullform index: a fine hull helps speed, a full hull
/// costs it. Applied to speed only.
pub const FORM_FACTOR: [f64; 3] = [1.05, 1.00, 0.95];

/// Simulation failure modes
///
/// The engine performs no I/O, so the taxonomy is just bad input: an
/// incomplete/out-of-domain configuration or a zero test count.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Test count must be at least 1 (got {0})")]
    InvalidTestCount(u32),
}

/// Derived metrics for one prototype test
///
/// `ao` here is the raw threshold x multiplier product; the ceiling clamp to
/// 1.0 is applied across the whole series after the trial loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Full-scale speed, knots
    pub speed: f64,
    /// Mean time between failures, hours
    pub mtbf: f64,
    /// Cargo storage space, cubic feet
    pub cargo: f64,
    /// Vehicle storage space, square feet
    pub vehicle: f64,
    /// Fuel capacity, gallons
    pub fuel: f64,
    /// Fuel burn rate, gallons per nautical mile
    pub burn: f64,
    /// Unrefueled range, nautical miles
    pub range: f64,
    /// Operational availability, unclamped
    pub ao: f64,
    /// Mean of the seven selected multipliers (form factor excluded)
    pub cost_mult: f64,
}

/// Per-test series for a completed simulation run
///
/// Series are in test order and share length `n_tests`. Ao values are already
/// clamped to the 1.0 ceiling. `cost_mult` is the final test's value, kept
/// as-reported by the legacy tool rather than averaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRun {
    pub n_tests: u32,
    pub speeds: Vec<f64>,
    pub mtbfs: Vec<f64>,
    pub cargoes: Vec<f64>,
    pub vehicles: Vec<f64>,
    pub fuels: Vec<f64>,
    pub ranges: Vec<f64>,
    pub aos: Vec<f64>,
    pub cost_mult: f64,
}

/// Aggregate statistics over a run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AggregateResult {
    pub speed: f64,
    pub mtbf: f64,
    pub cargo: f64,
    pub vehicle: f64,
    pub fuel: f64,
    pub range: f64,
    pub ao: f64,
    pub cost_mult: f64,
}

/// Run one prototype test under `config`
///
/// Samples all seven category triples (every branch of each, whether selected
/// or not), picks the branch each metric's governing selection indexes, and
/// derives the full-scale metrics.
pub fn run_trial<S: Sample>(
    config: &Configuration,
    thresholds: &Thresholds,
    sampler: &mut S,
) -> TrialOutcome {
    // Category sampling order matches the legacy tool:
    // speed, mtbf, cargo, vehicle, fuel, burn, ao.
    let speed_triple = sampler.sample_triple();
    let mtbf_triple = sampler.sample_triple();
    let cargo_triple = sampler.sample_triple();
    let vehicle_triple = sampler.sample_triple();
    let fuel_triple = sampler.sample_triple();
    let burn_triple = sampler.sample_triple();
    let ao_triple = sampler.sample_triple();

    let speed_mult = speed_triple.select(config.engine.index());
    let mtbf_mult = mtbf_triple.select(config.er_design.index());
    let cargo_mult = cargo_triple.select(config.hullform.index());
    let vehicle_mult = vehicle_triple.select(config.hullform.index());
    let fuel_mult = fuel_triple.select(config.fuel_storage.index());
    // Burn rate is inverse to engine size: small engines burn hot.
    let burn_mult = burn_triple.reversed().select(config.engine.index());
    let ao_mult = ao_triple.select(config.er_design.index());
    let form_mult = FORM_FACTOR[config.hullform.index()];

    let all_mults = [
        speed_mult,
        mtbf_mult,
        cargo_mult,
        vehicle_mult,
        fuel_mult,
        burn_mult,
        ao_mult,
    ];
    let cost_mult = all_mults.iter().sum::<f64>() / all_mults.len() as f64;

    let fuel_final = thresholds.fuel * fuel_mult;
    let burn_final = thresholds.fuel_burn * burn_mult;

    TrialOutcome {
        speed: thresholds.speed * speed_mult * form_mult,
        mtbf: thresholds.mtbf * mtbf_mult,
        cargo: thresholds.cargo * cargo_mult,
        vehicle: thresholds.vehicle * vehicle_mult,
        fuel: fuel_final,
        burn: burn_final,
        range: fuel_final / burn_final,
        ao: thresholds.ao * ao_mult,
        cost_mult,
    }
}

/// Run `n_tests` independent prototype tests and collect the per-test series
///
/// Tests execute strictly sequentially against the shared sampler, so a
/// seeded sampler reproduces the whole run. Ao values are clamped to 1.0
/// after the loop; availability is a fraction and cannot exceed 100%.
pub fn run<S: Sample>(
    config: &Configuration,
    n_tests: u32,
    sampler: &mut S,
) -> Result<SimulationRun, SimulationError> {
    if n_tests < 1 {
        return Err(SimulationError::InvalidTestCount(n_tests));
    }

    let thresholds = Thresholds::DEFAULT;
    let cap = n_tests as usize;
    let mut run = SimulationRun {
        n_tests,
        speeds: Vec::with_capacity(cap),
        mtbfs: Vec::with_capacity(cap),
        cargoes: Vec::with_capacity(cap),
        vehicles: Vec::with_capacity(cap),
        fuels: Vec::with_capacity(cap),
        ranges: Vec::with_capacity(cap),
        aos: Vec::with_capacity(cap),
        cost_mult: 0.0,
    };

    for _ in 0..n_tests {
        let outcome = run_trial(config, &thresholds, sampler);
        run.speeds.push(outcome.speed);
        run.mtbfs.push(outcome.mtbf);
        run.cargoes.push(outcome.cargo);
        run.vehicles.push(outcome.vehicle);
        run.fuels.push(outcome.fuel);
        run.ranges.push(outcome.range);
        run.aos.push(outcome.ao);
        run.cost_mult = outcome.cost_mult;
    }

    for ao in &mut run.aos {
        if *ao > 1.0 {
            *ao = 1.0;
        }
    }

    Ok(run)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl SimulationRun {
    /// Aggregate statistics: per-metric means for multi-test runs, the raw
    /// values for a single test. The cost multiplier is the last test's
    /// either way.
    pub fn aggregate(&self) -> AggregateResult {
        if self.n_tests == 1 {
            AggregateResult {
                speed: self.speeds[0],
                mtbf: self.mtbfs[0],
                cargo: self.cargoes[0],
                vehicle: self.vehicles[0],
                fuel: self.fuels[0],
                range: self.ranges[0],
                ao: self.aos[0],
                cost_mult: self.cost_mult,
            }
        } else {
            AggregateResult {
                speed: mean(&self.speeds),
                mtbf: mean(&self.mtbfs),
                cargo: mean(&self.cargoes),
                vehicle: mean(&self.vehicles),
                fuel: mean(&self.fuels),
                range: mean(&self.ranges),
                ao: mean(&self.aos),
                cost_mult: self.cost_mult,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineSize, ErDesign, FuelStorage, Hullform, SelectionState};
    use crate::sim::sampler::{MixtureSampler, MultiplierTriple};

    /// Sampler returning the same triple for every category
    struct FixedSampler(MultiplierTriple);

    impl Sample for FixedSampler {
        fn sample_triple(&mut self) -> MultiplierTriple {
            self.0
        }
    }

    /// Sampler returning a per-test constant that steps up each test
    /// (seven triples per test)
    struct SteppedSampler {
        calls: usize,
    }

    impl Sample for SteppedSampler {
        fn sample_triple(&mut self) -> MultiplierTriple {
            let test_index = self.calls / 7;
            self.calls += 1;
            MultiplierTriple::splat(0.9 + 0.05 * test_index as f64)
        }
    }

    fn nominal_config() -> Configuration {
        SelectionState {
            engine: Some(EngineSize::Medium),
            hullform: Some(Hullform::Moderate),
            fuel_storage: Some(FuelStorage::Moderate),
            er_design: Some(ErDesign::SemiMod),
        }
        .build()
        .unwrap()
    }

    fn config(engine: EngineSize, hullform: Hullform) -> Configuration {
        Configuration {
            engine,
            hullform,
            fuel_storage: FuelStorage::Moderate,
            er_design: ErDesign::SemiMod,
        }
    }

    #[test]
    fn unit_multipliers_reproduce_thresholds() {
        let mut sampler = FixedSampler(MultiplierTriple::splat(1.0));
        let run = run(&nominal_config(), 1, &mut sampler).unwrap();
        let agg = run.aggregate();

        assert_eq!(agg.speed, 22.0);
        assert_eq!(agg.mtbf, 300.0);
        assert_eq!(agg.cargo, 28_000.0);
        assert_eq!(agg.vehicle, 20_800.0);
        assert_eq!(agg.fuel, 310_000.0);
        assert!((agg.range - 4_133.33).abs() < 0.01);
        assert_eq!(agg.ao, 0.8);
        assert_eq!(agg.cost_mult, 1.0);
    }

    #[test]
    fn single_test_aggregate_is_raw_trial() {
        let mut sampler = FixedSampler(MultiplierTriple::splat(1.1));
        let run = run(&nominal_config(), 1, &mut sampler).unwrap();
        let agg = run.aggregate();

        assert_eq!(agg.speed, run.speeds[0]);
        assert_eq!(agg.mtbf, run.mtbfs[0]);
        assert_eq!(agg.range, run.ranges[0]);
        assert_eq!(agg.ao, run.aos[0]);
    }

    #[test]
    fn multi_test_aggregate_is_series_mean() {
        let mut sampler = MixtureSampler::seeded(42);
        let run = run(&nominal_config(), 10, &mut sampler).unwrap();
        let agg = run.aggregate();

        assert!((agg.speed - mean(&run.speeds)).abs() < 1e-12);
        assert!((agg.mtbf - mean(&run.mtbfs)).abs() < 1e-9);
        assert!((agg.cargo - mean(&run.cargoes)).abs() < 1e-9);
        assert!((agg.vehicle - mean(&run.vehicles)).abs() < 1e-9);
        assert!((agg.fuel - mean(&run.fuels)).abs() < 1e-9);
        assert!((agg.range - mean(&run.ranges)).abs() < 1e-9);
        assert!((agg.ao - mean(&run.aos)).abs() < 1e-12);
    }

    #[test]
    fn range_is_fuel_over_burn() {
        let mut sampler = MixtureSampler::seeded(7);
        let thresholds = Thresholds::DEFAULT;
        for _ in 0..50 {
            let outcome = run_trial(&nominal_config(), &thresholds, &mut sampler);
            assert_eq!(outcome.range, outcome.fuel / outcome.burn);
            assert!(outcome.burn > 0.0);
        }
    }

    #[test]
    fn ao_clamped_to_ceiling() {
        // ao_mult 1.3 puts raw Ao at 0.8 * 1.3 = 1.04; the series must cap it
        let mut sampler = FixedSampler(MultiplierTriple::splat(1.3));
        let thresholds = Thresholds::DEFAULT;

        let raw = run_trial(&nominal_config(), &thresholds, &mut sampler);
        assert!((raw.ao - 1.04).abs() < 1e-12);

        let clamped = run(&nominal_config(), 1, &mut sampler).unwrap();
        assert_eq!(clamped.aos[0], 1.0);
    }

    #[test]
    fn ao_stays_in_unit_interval() {
        let mut sampler = MixtureSampler::seeded(123);
        let run = run(&nominal_config(), 15, &mut sampler).unwrap();
        for &ao in &run.aos {
            assert!(ao > 0.0 && ao <= 1.0, "ao out of range: {ao}");
        }
    }

    #[test]
    fn burn_multiplier_is_reverse_indexed() {
        let triple = MultiplierTriple {
            low: 0.9,
            mid: 1.0,
            high: 1.1,
        };
        let thresholds = Thresholds::DEFAULT;

        // Small engine selects triple[0] everywhere else but takes the burn
        // category's high branch: 75 * 1.1.
        let mut sampler = FixedSampler(triple);
        let small = run_trial(
            &config(EngineSize::Small, Hullform::Moderate),
            &thresholds,
            &mut sampler,
        );
        assert!((small.burn - 82.5).abs() < 1e-12);
        assert!((small.speed - 22.0 * 0.9).abs() < 1e-12);

        // Large engine: burn from the low branch, 75 * 0.9.
        let large = run_trial(
            &config(EngineSize::Large, Hullform::Moderate),
            &thresholds,
            &mut sampler,
        );
        assert!((large.burn - 67.5).abs() < 1e-12);
        assert!((large.speed - 22.0 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn form_factor_applies_to_speed_only() {
        let thresholds = Thresholds::DEFAULT;
        let mut sampler = FixedSampler(MultiplierTriple::splat(1.0));

        let fine = run_trial(
            &config(EngineSize::Medium, Hullform::Fine),
            &thresholds,
            &mut sampler,
        );
        assert!((fine.speed - 22.0 * 1.05).abs() < 1e-12);
        assert_eq!(fine.cargo, 28_000.0);
        assert_eq!(fine.vehicle, 20_800.0);

        let full = run_trial(
            &config(EngineSize::Medium, Hullform::Full),
            &thresholds,
            &mut sampler,
        );
        assert!((full.speed - 22.0 * 0.95).abs() < 1e-12);
        assert_eq!(full.cargo, 28_000.0);
        assert_eq!(full.vehicle, 20_800.0);
    }

    #[test]
    fn cost_mult_reports_last_test() {
        // Three tests at multipliers 0.90, 0.95, 1.00; the reported cost
        // factor is the final test's, not the average.
        let mut sampler = SteppedSampler { calls: 0 };
        let run = run(&nominal_config(), 3, &mut sampler).unwrap();
        assert!((run.cost_mult - 1.0).abs() < 1e-12);
        assert!((run.aggregate().cost_mult - 1.0).abs() < 1e-12);
    }

    #[test]
    fn form_factor_excluded_from_cost() {
        // Fine hull boosts speed but must not leak into the cost factor.
        let mut sampler = FixedSampler(MultiplierTriple::splat(1.0));
        let thresholds = Thresholds::DEFAULT;
        let outcome = run_trial(
            &config(EngineSize::Medium, Hullform::Fine),
            &thresholds,
            &mut sampler,
        );
        assert_eq!(outcome.cost_mult, 1.0);
    }

    #[test]
    fn zero_tests_rejected() {
        let mut sampler = FixedSampler(MultiplierTriple::splat(1.0));
        let err = run(&nominal_config(), 0, &mut sampler).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidTestCount(0)));
    }

    #[test]
    fn seeded_runs_reproduce() {
        let run_a = run(&nominal_config(), 5, &mut MixtureSampler::seeded(9)).unwrap();
        let run_b = run(&nominal_config(), 5, &mut MixtureSampler::seeded(9)).unwrap();
        assert_eq!(run_a.speeds, run_b.speeds);
        assert_eq!(run_a.ranges, run_b.ranges);
        assert_eq!(run_a.cost_mult, run_b.cost_mult);
    }
}
