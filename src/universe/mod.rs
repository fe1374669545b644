//! Universe builder collaborator surface.
//!
//! The sampling core consumes a finished entity table; this module supplies
//! the offline sources for one: a CSV snapshot loader, a curated built-in
//! metro list so the pipeline runs with no inputs, and the data-quality
//! checks run before sampling. Live Census/NTD/GBFS acquisition is out of
//! scope and stays with the upstream collaborators.

pub mod builtin;
pub mod loader;
pub mod quality;

pub use builtin::builtin_universe;
pub use loader::load_universe_csv;
pub use quality::quality_issues;
