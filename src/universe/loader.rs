//! CSV snapshot loader for the metro universe.
//!
//! Reads an entity table exported by the upstream acquisition steps. List
//! columns are "; "-joined strings; boolean columns accept the usual
//! spreadsheet spellings (`True`, `true`, `1`, `yes`).

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{Result, SamplerError};
use crate::models::{MetroArea, Region};

/// One raw CSV row as exported upstream
#[derive(Debug, Deserialize)]
struct RawMetroRecord {
    cbsa_code: String,
    msa_name: String,
    population: u64,
    state_abbr: String,
    #[serde(default)]
    census_region: String,
    #[serde(default)]
    has_rail: String,
    #[serde(default)]
    has_shared_mobility: String,
    #[serde(default)]
    agency_list: String,
    #[serde(default)]
    shared_mobility_list: String,
}

/// Load a universe snapshot from a CSV file.
///
/// # Errors
///
/// Fails when the file cannot be read, a row does not parse, or a row's
/// region cannot be resolved from either the `census_region` column or the
/// state abbreviation.
pub fn load_universe_csv(path: &Path) -> Result<Vec<MetroArea>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let universe = read_universe(&mut reader)?;
    info!("Loaded {} metros from {}", universe.len(), path.display());
    Ok(universe)
}

/// Read a universe snapshot from any CSV reader
fn read_universe<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<MetroArea>> {
    let mut universe = Vec::new();
    for row in reader.deserialize() {
        let raw: RawMetroRecord = row?;
        universe.push(convert(raw)?);
    }
    Ok(universe)
}

fn convert(raw: RawMetroRecord) -> Result<MetroArea> {
    let region = Region::from_name(&raw.census_region)
        .or_else(|| Region::from_state(&raw.state_abbr))
        .ok_or_else(|| {
            SamplerError::UniverseError(format!(
                "metro {} ({}): cannot resolve census region from '{}' / state '{}'",
                raw.cbsa_code, raw.msa_name, raw.census_region, raw.state_abbr
            ))
        })?;

    Ok(MetroArea {
        cbsa_code: raw.cbsa_code,
        name: raw.msa_name,
        population: raw.population,
        state_abbr: raw.state_abbr,
        region,
        has_rail: parse_flag(&raw.has_rail),
        has_shared_mobility: parse_flag(&raw.has_shared_mobility),
        agencies: split_list(&raw.agency_list),
        shared_mobility_systems: split_list(&raw.shared_mobility_list),
    })
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "t" | "1" | "yes" | "y"
    )
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
