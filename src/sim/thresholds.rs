//! Baseline threshold parameters from the capability development document
//!
//! These are the full-scale targets every prototype test deviates around.
//! Process-wide and immutable; units are recorded per field.

use serde::{Deserialize, Serialize};

/// Threshold (target) parameters for the full-scale design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Sustained speed, knots
    pub speed: f64,

    /// Mean time between failures, hours
    pub mtbf: f64,

    /// Cargo storage space, cubic feet
    pub cargo: f64,

    /// Vehicle storage space, square feet
    pub vehicle: f64,

    /// Fuel storage capacity, gallons
    pub fuel: f64,

    /// Unrefueled range, nautical miles
    pub range: f64,

    /// Fuel burn rate, gallons per nautical mile
    pub fuel_burn: f64,

    /// Operational availability, fraction of time mission-capable
    pub ao: f64,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        speed: 22.0,
        mtbf: 300.0,
        cargo: 28_000.0,
        vehicle: 20_800.0,
        fuel: 310_000.0,
        range: 10_000.0,
        fuel_burn: 75.0,
        ao: 0.8,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
