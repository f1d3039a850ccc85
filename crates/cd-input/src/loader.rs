//! Record loaders.
//!
//! Every file has a `load_*_path` function and a `load_*_reader` variant
//! accepting any `Read` source (pass a `std::io::Cursor` in tests).
//!
//! The packages, vehicles and missions files are read with the `csv` crate
//! configured for headerless, unquoted, trimmed records and the file's own
//! delimiter:
//!
//! | File     | Delimiter | Fields |
//! |----------|-----------|--------|
//! | packages | `' '`     | 2      |
//! | vehicles | `' '`     | 3      |
//! | missions | `'-'`     | 6      |
//!
//! The cities file holds one (possibly multi-word) name per line and is read
//! line by line.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use cd_core::{CityName, Mission, PackageId, VehicleId};

use crate::{InputError, InputKind, InputResult, PackageRecord, VehicleRecord};

// ── CSV rows ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PackageRow {
    id:   String,
    city: String,
}

#[derive(Deserialize)]
struct VehicleRow {
    id:     String,
    city:   String,
    volume: f64,
}

#[derive(Deserialize)]
struct MissionRow {
    source:         String,
    middle:         String,
    destination:    String,
    load_at_source: usize,
    load_at_middle: usize,
    drop_positions: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Paths of the four input files.
#[derive(Clone, Debug)]
pub struct InputPaths {
    pub cities:   PathBuf,
    pub packages: PathBuf,
    pub vehicles: PathBuf,
    pub missions: PathBuf,
}

/// Everything a run needs, parsed but not yet applied to a registry.
#[derive(Clone, Debug, Default)]
pub struct InputSet {
    pub cities:   Vec<CityName>,
    pub packages: Vec<PackageRecord>,
    pub vehicles: Vec<VehicleRecord>,
    pub missions: Vec<Mission>,
}

/// Load all four files.  Stops at the first error.
pub fn load_inputs(paths: &InputPaths) -> InputResult<InputSet> {
    Ok(InputSet {
        cities:   load_cities_path(&paths.cities)?,
        packages: load_packages_path(&paths.packages)?,
        vehicles: load_vehicles_path(&paths.vehicles)?,
        missions: load_missions_path(&paths.missions)?,
    })
}

/// Load city names in file order.  Duplicates are returned as-is.
pub fn load_cities_path(path: &Path) -> InputResult<Vec<CityName>> {
    load_cities_reader(open(path, InputKind::Cities)?)
}

/// Like [`load_cities_path`] but accepts any `Read` source.
pub fn load_cities_reader<R: Read>(reader: R) -> InputResult<Vec<CityName>> {
    let mut names = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(CityName::new(name));
        }
    }
    debug!(count = names.len(), "loaded cities");
    Ok(names)
}

/// Load `id city` package records in file order.
pub fn load_packages_path(path: &Path) -> InputResult<Vec<PackageRecord>> {
    load_packages_reader(open(path, InputKind::Packages)?)
}

/// Like [`load_packages_path`] but accepts any `Read` source.
pub fn load_packages_reader<R: Read>(reader: R) -> InputResult<Vec<PackageRecord>> {
    let rows = read_rows::<_, PackageRow>(reader, InputKind::Packages, b' ', 2)?;
    let records: Vec<PackageRecord> = rows
        .into_iter()
        .map(|(_, r)| PackageRecord {
            id:   PackageId::new(r.id),
            city: CityName::new(r.city),
        })
        .collect();
    debug!(count = records.len(), "loaded packages");
    Ok(records)
}

/// Load `id city volume` vehicle records in file order.
pub fn load_vehicles_path(path: &Path) -> InputResult<Vec<VehicleRecord>> {
    load_vehicles_reader(open(path, InputKind::Vehicles)?)
}

/// Like [`load_vehicles_path`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> InputResult<Vec<VehicleRecord>> {
    let rows = read_rows::<_, VehicleRow>(reader, InputKind::Vehicles, b' ', 3)?;
    let records: Vec<VehicleRecord> = rows
        .into_iter()
        .map(|(_, r)| VehicleRecord {
            id:     VehicleId::new(r.id),
            city:   CityName::new(r.city),
            volume: r.volume,
        })
        .collect();
    debug!(count = records.len(), "loaded vehicles");
    Ok(records)
}

/// Load missions in file order.
pub fn load_missions_path(path: &Path) -> InputResult<Vec<Mission>> {
    load_missions_reader(open(path, InputKind::Missions)?)
}

/// Like [`load_missions_path`] but accepts any `Read` source.
pub fn load_missions_reader<R: Read>(reader: R) -> InputResult<Vec<Mission>> {
    let rows = read_rows::<_, MissionRow>(reader, InputKind::Missions, b'-', 6)?;
    let missions = rows
        .into_iter()
        .map(|(line, r)| {
            let drop_positions = parse_positions(&r.drop_positions).map_err(|message| {
                InputError::Parse { kind: InputKind::Missions, line, message }
            })?;
            Ok(Mission {
                source:         CityName::new(r.source),
                middle:         CityName::new(r.middle),
                destination:    CityName::new(r.destination),
                load_at_source: r.load_at_source,
                load_at_middle: r.load_at_middle,
                drop_positions,
            })
        })
        .collect::<InputResult<Vec<_>>>()?;
    debug!(count = missions.len(), "loaded missions");
    Ok(missions)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open(path: &Path, kind: InputKind) -> InputResult<File> {
    File::open(path).map_err(|source| InputError::Open {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Read headerless delimited rows, skipping blank lines and rejecting any
/// line whose field count differs from `fields`.  Returns each row with its
/// 1-based line number.
///
/// Space-delimited lines are trimmed as a whole first, so a leading or
/// trailing blank adds no field.  For other delimiters an empty edge field
/// is data (a missions line may end in an empty drop-off list).
fn read_rows<R: Read, T: DeserializeOwned>(
    reader:    R,
    kind:      InputKind,
    delimiter: u8,
    fields:    usize,
) -> InputResult<Vec<(u64, T)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| csv_failure(kind, e))?;
        let line = record.position().map_or(0, csv::Position::line);

        if record.iter().all(str::is_empty) {
            continue;
        }
        let record = if delimiter == b' ' { trim_edges(&record) } else { record };
        if record.len() != fields {
            return Err(InputError::Parse {
                kind,
                line,
                message: format!("expected {fields} fields, found {}", record.len()),
            });
        }
        let row = record
            .deserialize::<T>(None)
            .map_err(|e| InputError::Parse { kind, line, message: e.to_string() })?;
        rows.push((line, row));
    }
    Ok(rows)
}

/// Drop empty fields at both ends of `record`.
fn trim_edges(record: &csv::StringRecord) -> csv::StringRecord {
    let fields: Vec<&str> = record.iter().collect();
    let start = fields.iter().position(|f| !f.is_empty()).unwrap_or(fields.len());
    let end = fields.iter().rposition(|f| !f.is_empty()).map_or(start, |i| i + 1);
    fields[start..end].iter().copied().collect()
}

fn csv_failure(kind: InputKind, err: csv::Error) -> InputError {
    let line = err.position().map_or(0, csv::Position::line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => InputError::Io(io),
        _ => InputError::Parse { kind, line, message },
    }
}

/// Parse the comma-separated drop-off list.  Empty entries are ignored, so
/// an empty field means "drop nothing".
fn parse_positions(field: &str) -> Result<Vec<usize>, String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("invalid drop-off position {s:?}: expected a non-negative integer"))
        })
        .collect()
}
