//! Population coverage validation and boost.
//!
//! After the random phases, the sample must cover a configured fraction of
//! the universe population. When it falls short, the largest unsampled
//! metros are added deterministically until the target is met or the sample
//! reaches its size cap. Hitting the cap first is reported as a shortfall,
//! never raised as an error.

use log::{info, warn};

use crate::algorithm::sampling::state::SamplingState;
use crate::algorithm::sampling::types::{CoverageShortfall, SelectionMethod, SelectionRecord};
use crate::algorithm::stratify::assign_stratum;
use crate::config::SamplingConfig;
use crate::models::MetroArea;

/// Fraction of the universe population currently sampled.
///
/// An all-zero-population universe has nothing to cover and counts as fully
/// covered.
#[must_use]
pub(crate) fn coverage_fraction(sampled_population: u64, universe_population: u64) -> f64 {
    if universe_population == 0 {
        1.0
    } else {
        sampled_population as f64 / universe_population as f64
    }
}

/// Validate population coverage, boosting the sample when it falls short.
///
/// Returns `Some(shortfall)` when the size cap is reached before the
/// coverage target; the sample itself is left at its best-effort state. The
/// boost loop runs at most `max_sample_size - |sample|` iterations.
pub(crate) fn validate_and_boost<'a>(
    records: &mut Vec<SelectionRecord<'a>>,
    universe: &'a [MetroArea],
    state: &mut SamplingState,
    config: &SamplingConfig,
    universe_population: u64,
) -> Option<CoverageShortfall> {
    let target = config.min_population_coverage;
    let mut coverage = coverage_fraction(state.sampled_population(), universe_population);

    if coverage >= target {
        info!(
            "Coverage {:.1}% meets the {:.0}% target",
            coverage * 100.0,
            target * 100.0
        );
        return None;
    }

    info!(
        "Coverage {:.1}% < target {:.0}% - adding metros",
        coverage * 100.0,
        target * 100.0
    );

    let mut candidates: Vec<&MetroArea> = universe
        .iter()
        .filter(|m| !state.is_selected(&m.cbsa_code))
        .collect();
    candidates.sort_by(|a, b| {
        b.population
            .cmp(&a.population)
            .then_with(|| a.cbsa_code.cmp(&b.cbsa_code))
    });

    for metro in candidates {
        if records.len() >= config.max_sample_size || coverage >= target {
            break;
        }
        if !state.mark_selected(metro) {
            continue;
        }
        records.push(SelectionRecord {
            metro,
            stratum: assign_stratum(metro),
            method: SelectionMethod::CoverageBoost,
            sample_weight: 0.0,
        });
        coverage = coverage_fraction(state.sampled_population(), universe_population);
    }

    if coverage < target {
        warn!(
            "Coverage target missed at the size cap: {:.1}% of {:.0}% with {} metros",
            coverage * 100.0,
            target * 100.0,
            records.len()
        );
        Some(CoverageShortfall {
            achieved_coverage: coverage,
            target_coverage: target,
            sample_size: records.len(),
        })
    } else {
        info!(
            "Coverage boosted to {:.1}% with {} metros",
            coverage * 100.0,
            records.len()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamplingConfig;
    use crate::models::{MetroArea, Region};

    fn universe() -> Vec<MetroArea> {
        vec![
            MetroArea::new("10010", "Alpha, NY", 5_000_000, "NY", Region::Northeast),
            MetroArea::new("10020", "Beta, IL", 3_000_000, "IL", Region::Midwest),
            MetroArea::new("10030", "Gamma, TX", 1_500_000, "TX", Region::South),
            MetroArea::new("10040", "Delta, CA", 400_000, "CA", Region::West),
            MetroArea::new("10050", "Epsilon, WA", 100_000, "WA", Region::West),
        ]
    }

    fn select<'a>(metro: &'a MetroArea, state: &mut SamplingState) -> SelectionRecord<'a> {
        assert!(state.mark_selected(metro));
        SelectionRecord {
            metro,
            stratum: assign_stratum(metro),
            method: SelectionMethod::StratifiedRandom,
            sample_weight: 0.0,
        }
    }

    #[test]
    fn sufficient_coverage_leaves_sample_unchanged() {
        let universe = universe();
        let mut state = SamplingState::new(1);
        let mut records = vec![
            select(&universe[0], &mut state),
            select(&universe[1], &mut state),
        ];

        let config = SamplingConfig::builder()
            .min_population_coverage(0.5)
            .build();
        let shortfall =
            validate_and_boost(&mut records, &universe, &mut state, &config, 10_000_000);

        assert!(shortfall.is_none());
        assert_eq!(records.len(), 2);
        assert_eq!(records.iter().filter(|r| r.method == SelectionMethod::CoverageBoost).count(), 0);
    }

    #[test]
    fn boost_adds_largest_unsampled_metros_first() {
        let universe = universe();
        let mut state = SamplingState::new(1);
        let mut records = vec![select(&universe[4], &mut state)];

        let config = SamplingConfig::builder()
            .min_sample_size(1)
            .max_sample_size(10)
            .min_population_coverage(0.8)
            .build();
        let shortfall =
            validate_and_boost(&mut records, &universe, &mut state, &config, 10_000_000);

        assert!(shortfall.is_none());
        // 100K alone is 1%; adding 5M reaches 51%, adding 3M reaches 81%.
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].metro.cbsa_code, "10010");
        assert_eq!(records[2].metro.cbsa_code, "10020");
        assert!(records[1..].iter().all(|r| r.method == SelectionMethod::CoverageBoost));
    }

    #[test]
    fn size_cap_produces_shortfall() {
        let universe = universe();
        let mut state = SamplingState::new(1);
        let mut records = vec![select(&universe[4], &mut state)];

        let config = SamplingConfig::builder()
            .min_sample_size(1)
            .max_sample_size(2)
            .target_sample_size(2)
            .top_n_mandatory(0)
            .min_population_coverage(0.9)
            .build();
        let shortfall =
            validate_and_boost(&mut records, &universe, &mut state, &config, 10_000_000);

        let shortfall = shortfall.expect("cap reached before the coverage target");
        assert_eq!(shortfall.sample_size, 2);
        assert_eq!(records.len(), 2);
        assert!(shortfall.achieved_coverage < shortfall.target_coverage);
    }

    #[test]
    fn empty_universe_population_counts_as_covered() {
        assert!((coverage_fraction(0, 0) - 1.0).abs() < f64::EPSILON);
    }
}
