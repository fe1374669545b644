//! Utility helpers for the sampling pipeline.

pub mod logging;

pub use logging::{log_step, log_step_complete};
