//! Command-line definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use cd_core::{DrainOrder, EngineConfig, IndexBase};
use cd_input::InputPaths;

/// Format of the result file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One block per city: name, packages, vehicles, separator line.
    #[default]
    Text,
    /// `city,kind,position,id` rows.
    Csv,
    /// SQLite database with an `inventory` table.
    #[cfg(feature = "sqlite")]
    Sqlite,
}

#[derive(Debug, Parser)]
#[command(name = "cargo-delivery")]
#[command(version)]
#[command(about = "Simulate cargo missions between cities and write the final inventories")]
pub struct Cli {
    /// Cities file: one city name per line
    pub cities: PathBuf,

    /// Packages file: `<package id> <city>` per line
    pub packages: PathBuf,

    /// Vehicles file: `<vehicle id> <city> <volume>` per line
    pub vehicles: PathBuf,

    /// Missions file: `<source>-<middle>-<dest>-<a>-<b>-<i,j,...>` per line
    pub missions: PathBuf,

    /// Result file to create
    pub result: PathBuf,

    /// Whether drop-off positions count from 0 or 1 (zero, one)
    #[arg(long, default_value_t = IndexBase::Zero)]
    pub index_base: IndexBase,

    /// Unloading order at the destination (front-to-back, back-to-front)
    #[arg(long, default_value_t = DrainOrder::FrontToBack)]
    pub drain: DrainOrder,

    /// Result file format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn input_paths(&self) -> InputPaths {
        InputPaths {
            cities:   self.cities.clone(),
            packages: self.packages.clone(),
            vehicles: self.vehicles.clone(),
            missions: self.missions.clone(),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_index_base(self.index_base)
            .with_drain_order(self.drain)
    }

    /// Log filter directive for the chosen verbosity.  Warnings are shown
    /// by default.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
