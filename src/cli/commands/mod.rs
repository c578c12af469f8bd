//! Command implementations

pub mod options;
pub mod run;
