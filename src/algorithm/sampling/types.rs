//! Type definitions for the sampling engine.

use std::time::Duration;

use crate::algorithm::stratify::StratumKey;
use crate::models::MetroArea;

/// How an entity entered the sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMethod {
    /// Included with certainty as one of the top-N metros by population
    Mandatory,
    /// Drawn at random within its stratum
    StratifiedRandom,
    /// Deterministic top-up added to satisfy the coverage floor
    CoverageBoost,
}

impl SelectionMethod {
    /// Method label as used in the CSV contract
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::StratifiedRandom => "stratified_random",
            Self::CoverageBoost => "coverage_boost",
        }
    }
}

impl std::fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selected entity.
///
/// Created during the sampling phases with a placeholder weight, finalized by
/// the weight calculator, and immutable thereafter.
#[derive(Debug, Clone)]
pub struct SelectionRecord<'a> {
    /// The selected metro, borrowed from the universe table
    pub metro: &'a MetroArea,
    /// Stratum the metro belongs to
    pub stratum: StratumKey,
    /// How the metro entered the sample
    pub method: SelectionMethod,
    /// Inverse-probability sample weight
    pub sample_weight: f64,
}

/// Coverage target missed at the sample-size cap.
///
/// Non-fatal: the pipeline proceeds with best-effort coverage and surfaces
/// this alongside the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageShortfall {
    /// Coverage fraction actually achieved
    pub achieved_coverage: f64,
    /// Coverage fraction that was requested
    pub target_coverage: f64,
    /// Sample size at which the boost loop stopped
    pub sample_size: usize,
}

/// Result of one sampling run
#[derive(Debug, Clone)]
pub struct SampleSelection<'a> {
    /// Finalized records, population descending (CBSA code ascending on ties)
    pub records: Vec<SelectionRecord<'a>>,
    /// Number of metros in the universe
    pub universe_size: usize,
    /// Total population of the universe
    pub universe_population: u64,
    /// Total population of the sampled metros
    pub sampled_population: u64,
    /// Achieved population coverage fraction
    pub coverage: f64,
    /// Present when the coverage target was missed at the size cap
    pub shortfall: Option<CoverageShortfall>,
    /// Time taken for selection
    pub sampling_time: Duration,
}

impl SampleSelection<'_> {
    /// Number of selected metros
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sample is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records selected by the given method
    #[must_use]
    pub fn method_count(&self, method: SelectionMethod) -> usize {
        self.records.iter().filter(|r| r.method == method).count()
    }
}
