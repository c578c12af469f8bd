//! shipsim: Ship Prototype Testing Simulator
//!
//! Estimates full-scale performance of a ship prototype by Monte Carlo
//! sampling of deviation multipliers around a discrete design configuration,
//! then aggregates and reports the results.

pub mod access;
pub mod cli;
pub mod config;
pub mod sim;
