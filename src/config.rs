//! Prototype configuration - the four design selections that shape every test
//!
//! Each selection has exactly three allowed values and the position of the
//! chosen value (0, 1, 2) indexes into the sampled multiplier triples and the
//! hull form-factor table. A `Configuration` can only be constructed with all
//! four fields set; partial selections live in `SelectionState` until complete.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Propulsion engine size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineSize {
    Small,
    Medium,
    Large,
}

/// Hullform block coefficient class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Hullform {
    Fine,
    Moderate,
    Full,
}

/// Fuel storage capacity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FuelStorage {
    Minimum,
    Moderate,
    Maximum,
}

/// Engine-room component replacement design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ErDesign {
    /// Repair-in-place
    Rip,
    SemiMod,
    Modular,
}

macro_rules! selection_impl {
    ($ty:ident, $field:literal, [$($variant:ident => ($idx:expr, $label:literal)),+ $(,)?]) => {
        impl $ty {
            /// All values in selection order (index 0, 1, 2)
            pub const ALL: [$ty; 3] = [$($ty::$variant),+];

            /// Position within the selection order; indexes multiplier triples
            pub fn index(self) -> usize {
                match self {
                    $($ty::$variant => $idx),+
                }
            }

            /// Lowercase label as presented in selection menus
            pub fn label(self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($label => Ok($ty::$variant),)+
                    other => Err(ConfigError::UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

selection_impl!(EngineSize, "engine", [Small => (0, "small"), Medium => (1, "medium"), Large => (2, "large")]);
selection_impl!(Hullform, "hullform", [Fine => (0, "fine"), Moderate => (1, "moderate"), Full => (2, "full")]);
selection_impl!(FuelStorage, "fuel-storage", [Minimum => (0, "minimum"), Moderate => (1, "moderate"), Maximum => (2, "maximum")]);
selection_impl!(ErDesign, "er-design", [Rip => (0, "rip"), SemiMod => (1, "semi-mod"), Modular => (2, "modular")]);

/// A fully specified prototype configuration
///
/// Constructed only through [`SelectionState::build`] or directly from four
/// typed selections, so an incomplete configuration can never reach the
/// simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub engine: EngineSize,
    pub hullform: Hullform,
    pub fuel_storage: FuelStorage,
    pub er_design: ErDesign,
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "engine={} hullform={} fuel-storage={} er-design={}",
            self.engine, self.hullform, self.fuel_storage, self.er_design
        )
    }
}

/// Partial selection state, as accumulated by the interactive wizard or CLI
/// flags before validation
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    pub engine: Option<EngineSize>,
    pub hullform: Option<Hullform>,
    pub fuel_storage: Option<FuelStorage>,
    pub er_design: Option<ErDesign>,
}

impl SelectionState {
    /// Validate that every field has been selected and produce the final
    /// configuration. The first unset field (in selection order) is reported.
    pub fn build(&self) -> Result<Configuration, ConfigError> {
        Ok(Configuration {
            engine: self
                .engine
                .ok_or(ConfigError::MissingSelection { field: "engine" })?,
            hullform: self
                .hullform
                .ok_or(ConfigError::MissingSelection { field: "hullform" })?,
            fuel_storage: self.fuel_storage.ok_or(ConfigError::MissingSelection {
                field: "fuel-storage",
            })?,
            er_design: self.er_design.ok_or(ConfigError::MissingSelection {
                field: "er-design",
            })?,
        })
    }
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Incomplete configuration: no {field} selected. Pass --{field} or use --interactive")]
    MissingSelection { field: &'static str },

    #[error("Unrecognized {field} option '{value}'")]
    UnknownOption { field: &'static str, value: String },
}
