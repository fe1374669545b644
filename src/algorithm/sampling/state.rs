//! Process-scoped sampling state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

use crate::models::MetroArea;

/// Mutable state threaded through one sampling run.
//
// Owns the seeded random stream and the duplicate-prevention set. Created
// fresh per run and discarded afterwards; never shared across invocations.
#[derive(Debug)]
pub struct SamplingState {
    rng: StdRng,
    selected: FxHashSet<String>,
    sampled_population: u64,
}

impl SamplingState {
    /// Create state with a freshly seeded random stream
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            selected: FxHashSet::default(),
            sampled_population: 0,
        }
    }

    /// The shared random stream for this run
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Record a metro as selected.
    ///
    /// Returns `false` when the metro was already selected in an earlier
    /// phase; the caller must then skip it.
    pub fn mark_selected(&mut self, metro: &MetroArea) -> bool {
        if self.selected.insert(metro.cbsa_code.clone()) {
            self.sampled_population += metro.population;
            true
        } else {
            false
        }
    }

    /// Whether a CBSA code is already in the sample
    #[must_use]
    pub fn is_selected(&self, cbsa_code: &str) -> bool {
        self.selected.contains(cbsa_code)
    }

    /// Running total population of selected metros
    #[must_use]
    pub const fn sampled_population(&self) -> u64 {
        self.sampled_population
    }

    /// Number of selected metros
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }
}
