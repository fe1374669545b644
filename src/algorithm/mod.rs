//! Algorithm implementations for the sampling pipeline.
//!
//! This module contains the stratification and sampling engines: stratum
//! assignment, proportional slot allocation, seeded selection, coverage
//! validation, and sample weight calculation.

pub mod sampling;
pub mod stratify;
