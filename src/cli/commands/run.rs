//! `shipsim run` command - configure, simulate, report

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{bail, IntoDiagnostic, Result};

use crate::access;
use crate::cli::args::{OutputFormat, RunArgs};
use crate::cli::{output, viz};
use crate::config::{Configuration, EngineSize, ErDesign, FuelStorage, Hullform, SelectionState};
use crate::sim::{engine, MixtureSampler};

pub fn run(args: RunArgs) -> Result<()> {
    let config = resolve_configuration(&args)?;
    let n_tests = resolve_test_count(&args)?;

    let run = match args.seed {
        Some(seed) => engine::run(&config, n_tests, &mut MixtureSampler::seeded(seed)),
        None => engine::run(&config, n_tests, &mut MixtureSampler::from_entropy()),
    }
    .into_diagnostic()?;

    if let Some(path) = &args.export_csv {
        output::export_csv(path, &run)?;
        if args.format == OutputFormat::Text {
            println!(
                "{} {}",
                style("Exported per-test series to").green(),
                path.display()
            );
        }
    }

    match args.format {
        OutputFormat::Json => output::print_json(&config, args.seed, &run)?,
        OutputFormat::Text => {
            output::print_report(&config, &run);
            if run.n_tests > 1 && !args.no_charts {
                for chart in viz::run_charts(&run) {
                    println!("{chart}");
                }
            }
        }
    }

    Ok(())
}

/// Resolve the four design selections from flags, prompting for any that are
/// unset when `--interactive` is given. Prompts follow the legacy selection
/// order: engine, hullform, fuel storage, ER design.
fn resolve_configuration(args: &RunArgs) -> Result<Configuration> {
    let mut state = SelectionState {
        engine: args.engine,
        hullform: args.hullform,
        fuel_storage: args.fuel_storage,
        er_design: args.er_design,
    };

    if args.interactive {
        let theme = ColorfulTheme::default();
        if state.engine.is_none() {
            state.engine = Some(prompt_selection(
                &theme,
                "Select a propulsion engine size",
                &EngineSize::ALL,
            )?);
        }
        if state.hullform.is_none() {
            state.hullform = Some(prompt_selection(
                &theme,
                "Select a hullform block coefficient",
                &Hullform::ALL,
            )?);
        }
        if state.fuel_storage.is_none() {
            state.fuel_storage = Some(prompt_selection(
                &theme,
                "Select a fuel storage capacity",
                &FuelStorage::ALL,
            )?);
        }
        if state.er_design.is_none() {
            state.er_design = Some(prompt_selection(
                &theme,
                "Select a component replacement design for the engine room",
                &ErDesign::ALL,
            )?);
        }
    }

    state.build().into_diagnostic()
}

fn prompt_selection<T: Copy + std::fmt::Display>(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[T; 3],
) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(1)
        .interact()
        .into_diagnostic()?;
    Ok(options[selection])
}

/// Resolve the test count: explicit `--tests` wins, then the access-code
/// allocation, then an interactive prompt. A bare non-interactive run with
/// neither source is an error rather than a silent default.
fn resolve_test_count(args: &RunArgs) -> Result<u32> {
    if let Some(n) = args.tests {
        return Ok(n);
    }

    if let Some(code) = &args.access_code {
        return match access::authorize(code) {
            Some(grant) => Ok(grant.n_tests),
            None => bail!("Access code is not recognized. Please reenter."),
        };
    }

    if args.interactive {
        let n: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Number of tests")
            .default(5)
            .interact_text()
            .into_diagnostic()?;
        return Ok(n);
    }

    bail!("No test count given: pass --tests, --access-code, or --interactive")
}
