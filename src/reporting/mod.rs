//! Reporting surface: the CSV sample table and the text summary report.
//!
//! The CSV column set and order are the project's output contract; keep
//! them stable for downstream consumers.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::algorithm::sampling::types::SampleSelection;
use crate::error::Result;

/// One row of the sample CSV contract
#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    pub cbsa_code: String,
    pub msa_name: String,
    pub population: u64,
    pub state_abbr: String,
    pub census_region: String,
    pub pop_stratum: String,
    pub rail_stratum: String,
    pub sm_stratum: String,
    pub stratum: String,
    pub has_rail: bool,
    pub has_shared_mobility: bool,
    pub n_agencies: usize,
    pub agency_list: String,
    pub n_shared_mobility: usize,
    pub shared_mobility_list: String,
    pub selection_method: String,
    pub sample_weight: f64,
}

/// Project a finalized selection onto the CSV contract rows
#[must_use]
pub fn sample_rows(selection: &SampleSelection<'_>) -> Vec<SampleRow> {
    selection
        .records
        .iter()
        .map(|record| {
            let metro = record.metro;
            SampleRow {
                cbsa_code: metro.cbsa_code.clone(),
                msa_name: metro.name.clone(),
                population: metro.population,
                state_abbr: metro.state_abbr.clone(),
                census_region: metro.region.to_string(),
                pop_stratum: record.stratum.band.to_string(),
                rail_stratum: record.stratum.rail.to_string(),
                sm_stratum: record.stratum.shared_mobility.to_string(),
                stratum: record.stratum.to_string(),
                has_rail: metro.has_rail,
                has_shared_mobility: metro.has_shared_mobility,
                n_agencies: metro.agencies.len(),
                agency_list: metro.agencies.iter().join("; "),
                n_shared_mobility: metro.shared_mobility_systems.len(),
                shared_mobility_list: metro.shared_mobility_systems.iter().join("; "),
                selection_method: record.method.to_string(),
                sample_weight: record.sample_weight,
            }
        })
        .collect()
}

/// Write the sample CSV to `path`
pub fn write_sample_csv(selection: &SampleSelection<'_>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in sample_rows(selection) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Render the sample CSV as a string
pub fn sample_csv_string(selection: &SampleSelection<'_>) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for row in sample_rows(selection) {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render the text summary report
#[must_use]
pub fn summary_report(selection: &SampleSelection<'_>) -> String {
    let rule = "=".repeat(65);
    let mut lines: Vec<String> = vec![
        rule.clone(),
        "  MSA SAMPLE - SUMMARY REPORT".to_string(),
        rule.clone(),
        format!("Universe MSAs:        {}", selection.universe_size),
        format!("Sample size:          {}", selection.len()),
        format!(
            "Population coverage:  {} / {} ({:.1}%)",
            with_separators(selection.sampled_population),
            with_separators(selection.universe_population),
            selection.coverage * 100.0
        ),
    ];

    if let Some(shortfall) = &selection.shortfall {
        lines.push(format!(
            "NOTE: coverage target {:.0}% missed at the size cap ({:.1}% achieved)",
            shortfall.target_coverage * 100.0,
            shortfall.achieved_coverage * 100.0
        ));
    }

    lines.push(String::new());
    push_counts(
        &mut lines,
        "-- Selection method breakdown --",
        selection.records.iter().map(|r| r.method.to_string()),
    );
    push_counts(
        &mut lines,
        "-- Population stratum --",
        selection.records.iter().map(|r| r.stratum.band.to_string()),
    );
    push_counts(
        &mut lines,
        "-- Census region --",
        selection.records.iter().map(|r| r.metro.region.to_string()),
    );
    push_counts(
        &mut lines,
        "-- Rail presence --",
        selection.records.iter().map(|r| r.stratum.rail.to_string()),
    );
    push_counts(
        &mut lines,
        "-- Shared mobility presence --",
        selection
            .records
            .iter()
            .map(|r| r.stratum.shared_mobility.to_string()),
    );

    lines.push("-- Sample weight summary --".to_string());
    if selection.is_empty() {
        lines.push("  (empty sample)".to_string());
    } else {
        let weights: Vec<f64> = selection.records.iter().map(|r| r.sample_weight).collect();
        let sum: f64 = weights.iter().sum();
        let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
        let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        lines.push(format!("  count: {}", weights.len()));
        lines.push(format!("  mean:  {:.4}", sum / weights.len() as f64));
        lines.push(format!("  min:   {min:.4}"));
        lines.push(format!("  max:   {max:.4}"));
    }
    lines.push(String::new());

    lines.push("-- Selected MSAs --".to_string());
    for record in &selection.records {
        lines.push(format!(
            "  {}  {:<55} pop={:>12}  method={}",
            record.metro.cbsa_code,
            record.metro.name,
            with_separators(record.metro.population),
            record.method
        ));
    }
    lines.push(rule);

    lines.join("\n")
}

/// Write the text report to `path`
pub fn save_report(report: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn push_counts(lines: &mut Vec<String>, header: &str, values: impl Iterator<Item = String>) {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    lines.push(header.to_string());
    // Largest groups first, name order on ties.
    for (name, count) in counts
        .iter()
        .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
    {
        lines.push(format!("  {name:<20} {count}"));
    }
    lines.push(String::new());
}

fn with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_group_thousands() {
        assert_eq!(with_separators(0), "0");
        assert_eq!(with_separators(999), "999");
        assert_eq!(with_separators(1_000), "1,000");
        assert_eq!(with_separators(19_498_000), "19,498,000");
    }
}
