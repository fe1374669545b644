//! Configuration for the MSA sampling pipeline.
//!
//! All parameters are plain values; the core never reads the environment or
//! the network. Invalid combinations are rejected by [`SamplingConfig::validate`]
//! before any sampling work starts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplerError};

/// Parameters controlling stratified sample selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of metros the sampler aims to select
    pub target_sample_size: usize,

    /// Floor for the final sample size; falling below it is logged, not fatal
    pub min_sample_size: usize,

    /// Hard ceiling on the final sample size, bounding the coverage boost loop
    pub max_sample_size: usize,

    /// Number of largest metros force-included with certainty
    pub top_n_mandatory: usize,

    /// Minimum fraction of universe population the sample must cover
    pub min_population_coverage: f64,

    /// Seed for the random stream; the same seed reproduces the same sample
    pub random_seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            target_sample_size: 50,
            min_sample_size: 45,
            max_sample_size: 52,
            top_n_mandatory: 10,
            min_population_coverage: 0.5,
            random_seed: 42,
        }
    }
}

impl SamplingConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a sampling configuration
    #[must_use]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::new()
    }

    /// Check the parameter combination before sampling begins.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the mandatory count exceeds the
    /// target, the size bounds are inverted or exclude the target, or the
    /// coverage fraction is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.top_n_mandatory > self.target_sample_size {
            return Err(SamplerError::ConfigurationError(format!(
                "top_n_mandatory ({}) exceeds target_sample_size ({})",
                self.top_n_mandatory, self.target_sample_size
            )));
        }

        if self.min_sample_size > self.max_sample_size {
            return Err(SamplerError::ConfigurationError(format!(
                "min_sample_size ({}) exceeds max_sample_size ({})",
                self.min_sample_size, self.max_sample_size
            )));
        }

        if self.target_sample_size < self.min_sample_size
            || self.target_sample_size > self.max_sample_size
        {
            return Err(SamplerError::ConfigurationError(format!(
                "target_sample_size ({}) outside [{}, {}]",
                self.target_sample_size, self.min_sample_size, self.max_sample_size
            )));
        }

        if !(0.0..=1.0).contains(&self.min_population_coverage) {
            return Err(SamplerError::ConfigurationError(format!(
                "min_population_coverage ({}) must be within [0, 1]",
                self.min_population_coverage
            )));
        }

        Ok(())
    }
}

impl fmt::Display for SamplingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sampling Configuration:")?;
        writeln!(f, "  Target sample size: {}", self.target_sample_size)?;
        writeln!(f, "  Minimum sample size: {}", self.min_sample_size)?;
        writeln!(f, "  Maximum sample size: {}", self.max_sample_size)?;
        writeln!(f, "  Mandatory top-N: {}", self.top_n_mandatory)?;
        writeln!(
            f,
            "  Minimum population coverage: {:.0}%",
            self.min_population_coverage * 100.0
        )?;
        writeln!(f, "  Random seed: {}", self.random_seed)
    }
}

/// Builder for constructing a sampling configuration
#[derive(Debug, Clone)]
pub struct SamplingConfigBuilder {
    config: SamplingConfig,
}

impl Default for SamplingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SamplingConfig::default(),
        }
    }

    /// Set the target sample size
    #[must_use]
    pub const fn target_sample_size(mut self, size: usize) -> Self {
        self.config.target_sample_size = size;
        self
    }

    /// Set the minimum sample size
    #[must_use]
    pub const fn min_sample_size(mut self, size: usize) -> Self {
        self.config.min_sample_size = size;
        self
    }

    /// Set the maximum sample size
    #[must_use]
    pub const fn max_sample_size(mut self, size: usize) -> Self {
        self.config.max_sample_size = size;
        self
    }

    /// Set the number of mandatory top-population inclusions
    #[must_use]
    pub const fn top_n_mandatory(mut self, count: usize) -> Self {
        self.config.top_n_mandatory = count;
        self
    }

    /// Set the minimum population coverage fraction
    #[must_use]
    pub const fn min_population_coverage(mut self, fraction: f64) -> Self {
        self.config.min_population_coverage = fraction;
        self
    }

    /// Set the random seed
    #[must_use]
    pub const fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = seed;
        self
    }

    /// Build the sampling configuration
    #[must_use]
    pub const fn build(self) -> SamplingConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SamplingConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = SamplingConfig::builder()
            .target_sample_size(30)
            .min_sample_size(25)
            .max_sample_size(35)
            .top_n_mandatory(5)
            .min_population_coverage(0.4)
            .random_seed(7)
            .build();

        assert_eq!(config.target_sample_size, 30);
        assert_eq!(config.top_n_mandatory, 5);
        assert_eq!(config.random_seed, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn mandatory_count_above_target_is_rejected() {
        let config = SamplingConfig::builder()
            .target_sample_size(5)
            .min_sample_size(1)
            .max_sample_size(10)
            .top_n_mandatory(6)
            .build();

        assert!(matches!(
            config.validate(),
            Err(crate::SamplerError::ConfigurationError(_))
        ));
    }

    #[test]
    fn inverted_size_bounds_are_rejected() {
        let config = SamplingConfig::builder()
            .min_sample_size(20)
            .max_sample_size(10)
            .build();

        assert!(config.validate().is_err());
    }

    #[test]
    fn target_outside_bounds_is_rejected() {
        let config = SamplingConfig::builder()
            .target_sample_size(60)
            .min_sample_size(10)
            .max_sample_size(52)
            .build();

        assert!(config.validate().is_err());
    }

    #[test]
    fn coverage_fraction_outside_unit_interval_is_rejected() {
        let config = SamplingConfig::builder().min_population_coverage(1.5).build();
        assert!(config.validate().is_err());

        let config = SamplingConfig::builder().min_population_coverage(-0.1).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SamplingConfig::builder().random_seed(99).build();
        let json = serde_json::to_string(&config).unwrap();
        let restored: SamplingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.random_seed, 99);
        assert_eq!(restored.target_sample_size, config.target_sample_size);
    }
}
