//! Domain models for the sampling pipeline.
//!
//! The entity table consumed by the core is read-only: the sampler borrows
//! [`MetroArea`] values and never mutates source attributes.

pub mod metro;
pub mod region;

pub use metro::MetroArea;
pub use region::Region;
