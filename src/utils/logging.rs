//! Logging utilities
//!
//! This module provides standardized logging functions for pipeline steps.

/// Log the start of a numbered pipeline step with consistent format
pub fn log_step(step: usize, description: &str) {
    log::info!("Step {step}: {description}");
}

/// Log a completed operation with an item count and optional elapsed time
pub fn log_step_complete(operation: &str, items: usize, elapsed: Option<std::time::Duration>) {
    if let Some(duration) = elapsed {
        log::info!("  {operation}: {items} items in {duration:?}");
    } else {
        log::info!("  {operation}: {items} items");
    }
}
