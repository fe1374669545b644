//! A Rust library for selecting a stratified, reproducible sample of US
//! metropolitan statistical areas (MSAs/CBSAs) from a population universe.
//!
//! The sampling engine partitions the universe into strata (population band,
//! rail presence, shared-mobility presence, census region), force-includes
//! the largest metros, proportionally allocates the remaining slots across
//! strata with a largest-remainder allocator, draws within each stratum from
//! a seeded random stream, tops up population coverage when needed, and
//! finalizes inverse-probability sample weights.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod universe;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{SamplingConfig, SamplingConfigBuilder};
pub use error::{Result, SamplerError};
pub use models::{MetroArea, Region};

// Stratification
pub use algorithm::stratify::{
    PopulationBand, RailPresence, SharedMobilityPresence, StratumKey, assign_stratum,
};

// Sampling engine
pub use algorithm::sampling::{
    AllocationTarget, CoverageShortfall, MetroSampler, SampleSelection, SamplingState,
    SelectionMethod, SelectionRecord, allocate_largest_remainder,
};

// Collaborator surfaces
pub use reporting::{SampleRow, sample_csv_string, sample_rows, summary_report};
pub use universe::{builtin_universe, load_universe_csv, quality_issues};
