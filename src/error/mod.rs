//! Error handling for the metro sampler.

use std::io;

/// Specialized error type for sampling pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// Invalid sampling parameter combination, detected before sampling begins
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Universe too small or malformed to satisfy the requested sample
    #[error("Universe error: {0}")]
    UniverseError(String),

    /// Proportional allocation could not be closed to the requested total
    #[error("Allocation error: {0}")]
    AllocationError(String),

    /// Sample weight could not be computed for a finalized record
    #[error("Weight error: {0}")]
    WeightError(String),

    /// Error reading or writing a CSV table
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type for sampling pipeline operations
pub type Result<T> = std::result::Result<T, SamplerError>;
