//! MSA sampling pipeline - main entry point.
//!
//! Usage:
//!     run_sampling [--universe <snapshot.csv>] [--config <config.json>] [--output <dir>]
//!
//! Without a universe snapshot the built-in metro list is used, so the
//! pipeline always produces output. Results are written to the output
//! directory (default `./output`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};

use metro_sampler::reporting::{save_report, summary_report, write_sample_csv};
use metro_sampler::universe::{builtin_universe, load_universe_csv, quality_issues};
use metro_sampler::utils::logging::{log_step, log_step_complete};
use metro_sampler::{MetroSampler, SamplingConfig};

#[derive(Debug, Default)]
struct CliArgs {
    universe: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .with_context(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--universe" => args.universe = Some(PathBuf::from(value("--universe")?)),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--output" => args.output = Some(PathBuf::from(value("--output")?)),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn load_config(path: &Path) -> Result<SamplingConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SamplingConfig::default(),
    };
    info!("{config}");

    log_step(1, "Loading metro universe");
    let universe = match &args.universe {
        Some(path) => load_universe_csv(path)?,
        None => {
            warn!("No universe snapshot provided - using built-in MSA list");
            builtin_universe()
        }
    };
    let total_population: u64 = universe.iter().map(|m| m.population).sum();
    info!(
        "  {} MSAs loaded, total pop = {}",
        universe.len(),
        total_population
    );

    log_step(2, "Data quality checks");
    let issues = quality_issues(&universe);
    if issues.is_empty() {
        info!("  All checks passed");
    } else {
        for issue in &issues {
            warn!("  DQ: {issue}");
        }
    }

    log_step(3, "Running stratified sample selection");
    let sampler = MetroSampler::new(config);
    let selection = sampler.select_sample(&universe)?;
    log_step_complete("selected", selection.len(), Some(selection.sampling_time));

    log_step(4, "Writing outputs");
    let output_dir = args.output.unwrap_or_else(|| PathBuf::from("output"));
    let csv_path = output_dir.join("msa_sample.csv");
    write_sample_csv(&selection, &csv_path)?;

    let report = summary_report(&selection);
    let report_path = output_dir.join("sample_report.txt");
    save_report(&report, &report_path)?;

    println!("\n{report}\n");

    info!("Done. Outputs in {}", output_dir.display());
    info!("  CSV:    {}", csv_path.display());
    info!("  Report: {}", report_path.display());

    Ok(())
}
