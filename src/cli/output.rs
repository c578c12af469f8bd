//! Report formatting - styled text table, JSON report, CSV export
//!
//! Numeric precisions follow the legacy report: two decimals for most
//! metrics, one for MTBF and Ao.

use chrono::{DateTime, Utc};
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Configuration;
use crate::sim::{AggregateResult, SimulationRun};

/// Full machine-readable report for `--format json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub config: &'a Configuration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub aggregate: AggregateResult,
    pub run: &'a SimulationRun,
}

pub fn print_json(config: &Configuration, seed: Option<u64>, run: &SimulationRun) -> Result<()> {
    let report = Report {
        generated_at: Utc::now(),
        config,
        seed,
        aggregate: run.aggregate(),
        run,
    };
    let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Units")]
    units: &'static str,
}

pub fn print_report(config: &Configuration, run: &SimulationRun) {
    let agg = run.aggregate();

    println!("{}", style("Testing Results").bold().underlined());
    println!("  {config}");
    if run.n_tests == 1 {
        println!("  {}", style("single test").dim());
    } else {
        println!(
            "  {}",
            style(format!("averages over {} tests", run.n_tests)).dim()
        );
    }

    let rows = vec![
        MetricRow {
            metric: "Speed",
            value: format!("{:.2}", agg.speed),
            units: "knots",
        },
        MetricRow {
            metric: "MTBF",
            value: format!("{:.1}", agg.mtbf),
            units: "hours",
        },
        MetricRow {
            metric: "Cargo space",
            value: format!("{:.2}", agg.cargo),
            units: "cuft",
        },
        MetricRow {
            metric: "Vehicle storage",
            value: format!("{:.2}", agg.vehicle),
            units: "sqft",
        },
        MetricRow {
            metric: "Fuel capacity",
            value: format!("{:.2}", agg.fuel),
            units: "gallons",
        },
        MetricRow {
            metric: "Range",
            value: format!("{:.2}", agg.range),
            units: "nm",
        },
        MetricRow {
            metric: "Ao",
            value: format!("{:.1}", agg.ao),
            units: "fraction",
        },
        MetricRow {
            metric: "Cost factor",
            value: format!("{:.2}", agg.cost_mult),
            units: "x baseline",
        },
    ];

    println!("{}", Table::new(rows).with(Style::rounded()));
}

/// Write the per-test series as CSV, one row per test
pub fn export_csv(path: &Path, run: &SimulationRun) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).into_diagnostic()?;
    writer
        .write_record([
            "test",
            "speed_kn",
            "mtbf_h",
            "cargo_cuft",
            "vehicle_sqft",
            "fuel_gal",
            "range_nm",
            "ao",
        ])
        .into_diagnostic()?;

    for i in 0..run.n_tests as usize {
        writer
            .write_record(&[
                (i + 1).to_string(),
                run.speeds[i].to_string(),
                run.mtbfs[i].to_string(),
                run.cargoes[i].to_string(),
                run.vehicles[i].to_string(),
                run.fuels[i].to_string(),
                run.ranges[i].to_string(),
                run.aos[i].to_string(),
            ])
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
