//! cargo-delivery — run a mission file against a set of cities and write
//! every city's remaining packages and vehicles.
//!
//! ```text
//! cargo-delivery cities.txt packages.txt vehicles.txt missions.txt result.txt
//! ```
//!
//! Skipped records and mission warnings are logged to stderr; pass `-v` for
//! per-mission progress.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cd_core::Registry;
use cd_input::load_inputs;
use cd_mission::{LoggingObserver, RunSummary, SimBuilder};
use cd_output::{CsvWriter, InventoryWriter, TextWriter, write_registry};

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(&cli)?;
    Ok(())
}

/// Load, simulate, and write the result file.
fn run(cli: &Cli) -> Result<RunSummary> {
    // ── Load ──────────────────────────────────────────────────────────────────
    let inputs = load_inputs(&cli.input_paths()).context("failed to load input files")?;
    info!(
        cities   = inputs.cities.len(),
        packages = inputs.packages.len(),
        vehicles = inputs.vehicles.len(),
        missions = inputs.missions.len(),
        "inputs loaded"
    );

    let mut sim = SimBuilder::new(cli.engine_config())
        .inputs(&inputs)
        .build()
        .context("failed to build city registry")?;

    // ── Run ───────────────────────────────────────────────────────────────────
    let summary = sim.run(&inputs.missions, &mut LoggingObserver);

    // ── Write ─────────────────────────────────────────────────────────────────
    write_result(cli, sim.registry())
        .with_context(|| format!("failed to write {}", cli.result.display()))?;
    info!(path = %cli.result.display(), format = ?cli.format, "result written");

    Ok(summary)
}

fn write_result(cli: &Cli, registry: &Registry) -> Result<()> {
    let mut writer: Box<dyn InventoryWriter> = match cli.format {
        OutputFormat::Text => Box::new(TextWriter::from_path(&cli.result)?),
        OutputFormat::Csv => Box::new(CsvWriter::from_path(&cli.result)?),
        #[cfg(feature = "sqlite")]
        OutputFormat::Sqlite => Box::new(cd_output::SqliteWriter::new(&cli.result)?),
    };
    write_registry(registry, &mut writer)?;
    Ok(())
}
