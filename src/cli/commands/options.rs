//! `shipsim options` command - print the selectable configuration domain

use console::style;
use miette::Result;

use crate::config::{EngineSize, ErDesign, FuelStorage, Hullform};

pub fn run() -> Result<()> {
    println!("{}", style("Configuration options").bold());
    print_group("engine", &EngineSize::ALL.map(|v| v.label()));
    print_group("hullform", &Hullform::ALL.map(|v| v.label()));
    print_group("fuel-storage", &FuelStorage::ALL.map(|v| v.label()));
    print_group("er-design", &ErDesign::ALL.map(|v| v.label()));
    Ok(())
}

fn print_group(field: &str, labels: &[&str; 3]) {
    println!("  --{:<13} {}", field, labels.join(" | "));
}
