//! Core sample selection implementation.
//!
//! This module implements the `MetroSampler` struct which orchestrates the
//! mandatory, stratified-random, coverage, and weighting phases.

use std::collections::BTreeMap;
use std::time::Instant;

use log::info;
use smallvec::SmallVec;

use crate::algorithm::sampling::allocation::{AllocationTarget, allocate_largest_remainder};
use crate::algorithm::sampling::coverage::{coverage_fraction, validate_and_boost};
use crate::algorithm::sampling::state::SamplingState;
use crate::algorithm::sampling::types::{SampleSelection, SelectionMethod, SelectionRecord};
use crate::algorithm::sampling::weights::assign_weights;
use crate::algorithm::stratify::{StratumKey, assign_stratum};
use crate::config::SamplingConfig;
use crate::error::{Result, SamplerError};
use crate::models::MetroArea;

/// Sampler for selecting a representative metro subset
#[derive(Debug)]
pub struct MetroSampler {
    /// Sampling configuration
    config: SamplingConfig,
}

impl MetroSampler {
    /// Create a new sampler with the given configuration
    #[must_use]
    pub const fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// The configuration this sampler runs with
    #[must_use]
    pub const fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Select the sample from the universe table.
    ///
    /// # Arguments
    ///
    /// * `universe` - The full entity table; borrowed read-only
    ///
    /// # Returns
    ///
    /// Result containing the finalized selection, ordered by population
    /// descending.
    ///
    /// # Errors
    ///
    /// Fails on an invalid parameter combination or a universe too small for
    /// the mandatory count or the target size. A missed coverage target is
    /// not an error; it is surfaced as a shortfall on the result.
    pub fn select_sample<'a>(&self, universe: &'a [MetroArea]) -> Result<SampleSelection<'a>> {
        let start_time = Instant::now();

        self.config.validate()?;
        let target = self.config.target_sample_size;
        let mandatory_count = self.config.top_n_mandatory;

        if universe.len() < mandatory_count {
            return Err(SamplerError::UniverseError(format!(
                "universe has {} metros, cannot force-include the top {}",
                universe.len(),
                mandatory_count
            )));
        }
        if target > universe.len() {
            return Err(SamplerError::UniverseError(format!(
                "target sample size {} exceeds the universe of {} metros",
                target,
                universe.len()
            )));
        }

        let universe_population: u64 = universe.iter().map(|m| m.population).sum();

        // Universe-wide stratum sizes; the weight denominators count
        // mandatory members too.
        let mut stratum_sizes: BTreeMap<StratumKey, usize> = BTreeMap::new();
        for metro in universe {
            *stratum_sizes.entry(assign_stratum(metro)).or_default() += 1;
        }

        let mut state = SamplingState::new(self.config.random_seed);
        let mut records: Vec<SelectionRecord<'a>> = Vec::with_capacity(self.config.max_sample_size);

        self.select_mandatory(universe, &mut state, &mut records);
        self.select_stratified(universe, &mut state, &mut records)?;

        let shortfall = validate_and_boost(
            &mut records,
            universe,
            &mut state,
            &self.config,
            universe_population,
        );

        assign_weights(&mut records, &stratum_sizes)?;

        // Final ordering: population descending, CBSA code ascending on ties.
        records.sort_by(|a, b| {
            b.metro
                .population
                .cmp(&a.metro.population)
                .then_with(|| a.metro.cbsa_code.cmp(&b.metro.cbsa_code))
        });

        if records.len() < self.config.min_sample_size {
            log::warn!(
                "Final sample of {} metros is below the configured minimum of {}",
                records.len(),
                self.config.min_sample_size
            );
        }

        let sampled_population = state.sampled_population();
        let coverage = coverage_fraction(sampled_population, universe_population);
        let elapsed = start_time.elapsed();

        info!(
            "Final sample: {} metros covering {:.1}% of metro population in {:.2?}",
            records.len(),
            coverage * 100.0,
            elapsed
        );

        Ok(SampleSelection {
            records,
            universe_size: universe.len(),
            universe_population,
            sampled_population,
            coverage,
            shortfall,
            sampling_time: elapsed,
        })
    }

    /// Mandatory phase: force-include the top-N metros by population,
    /// ties broken by CBSA code ascending.
    fn select_mandatory<'a>(
        &self,
        universe: &'a [MetroArea],
        state: &mut SamplingState,
        records: &mut Vec<SelectionRecord<'a>>,
    ) {
        let mut by_population: Vec<&MetroArea> = universe.iter().collect();
        by_population.sort_by(|a, b| {
            b.population
                .cmp(&a.population)
                .then_with(|| a.cbsa_code.cmp(&b.cbsa_code))
        });

        for metro in by_population.into_iter().take(self.config.top_n_mandatory) {
            if state.mark_selected(metro) {
                records.push(SelectionRecord {
                    metro,
                    stratum: assign_stratum(metro),
                    method: SelectionMethod::Mandatory,
                    sample_weight: 0.0,
                });
            }
        }

        info!(
            "Mandatory phase: force-included the top {} metros by population",
            records.len()
        );
    }

    /// Stratified-random phase: proportional allocation over the remaining
    /// pool, then seeded without-replacement draws within each stratum.
    fn select_stratified<'a>(
        &self,
        universe: &'a [MetroArea],
        state: &mut SamplingState,
        records: &mut Vec<SelectionRecord<'a>>,
    ) -> Result<()> {
        let slots = self.config.target_sample_size.saturating_sub(records.len());

        // Group the unselected metros by stratum. BTreeMap keeps stratum
        // iteration in key order; pools are sorted by CBSA code so the draw
        // sequence depends only on universe contents and seed.
        let mut pools: BTreeMap<StratumKey, Vec<&MetroArea>> = BTreeMap::new();
        for metro in universe {
            if !state.is_selected(&metro.cbsa_code) {
                pools.entry(assign_stratum(metro)).or_default().push(metro);
            }
        }
        for pool in pools.values_mut() {
            pool.sort_by(|a, b| a.cbsa_code.cmp(&b.cbsa_code));
        }

        let targets: Vec<AllocationTarget> = pools
            .values()
            .map(|pool| AllocationTarget {
                weight: pool.iter().map(|m| m.population).sum(),
                capacity: pool.len(),
            })
            .collect();
        let allocation = allocate_largest_remainder(&targets, slots)?;

        let mut drawn_total = 0usize;
        for ((stratum, pool), &count) in pools.iter().zip(allocation.iter()) {
            if count == 0 {
                continue;
            }

            let mut picks: SmallVec<[usize; 16]> =
                rand::seq::index::sample(state.rng_mut(), pool.len(), count)
                    .iter()
                    .collect();
            picks.sort_unstable();

            for index in picks {
                let metro = pool[index];
                if state.mark_selected(metro) {
                    records.push(SelectionRecord {
                        metro,
                        stratum: *stratum,
                        method: SelectionMethod::StratifiedRandom,
                        sample_weight: 0.0,
                    });
                    drawn_total += 1;
                }
            }
        }

        info!(
            "Stratified phase: drew {} metros across {} strata",
            drawn_total,
            allocation.iter().filter(|&&c| c > 0).count()
        );
        Ok(())
    }
}
