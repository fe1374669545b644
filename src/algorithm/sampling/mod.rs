//! Stratified sampling engine.
//!
//! Selection runs as one deterministic pass per pipeline invocation:
//!
//! 1. Force-include the top-N metros by population (mandatory phase).
//! 2. Proportionally allocate the remaining slots across strata and draw
//!    within each stratum from the seeded random stream.
//! 3. Validate population coverage and top up with the largest unsampled
//!    metros when the target is missed.
//! 4. Finalize inverse-probability sample weights.
//!
//! All iteration orders are fixed (sorted stratum keys, sorted pools), so a
//! given universe, configuration, and seed always reproduce the identical
//! sample.

pub mod allocation;
pub mod coverage;
pub mod sampler;
pub mod state;
pub mod types;
pub mod weights;

// Re-export key types
pub use allocation::{AllocationTarget, allocate_largest_remainder};
pub use sampler::MetroSampler;
pub use state::SamplingState;
pub use types::{CoverageShortfall, SampleSelection, SelectionMethod, SelectionRecord};
