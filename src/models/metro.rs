//! Metropolitan statistical area entity.

use serde::{Deserialize, Serialize};

use crate::models::region::Region;

/// One metropolitan statistical area in the sampling universe.
///
/// Identifying attributes come pre-resolved from the universe builder:
/// population counts from the census table, presence flags from the transit
/// agency and shared-mobility merges. The sampler treats all of it as
/// read-only input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroArea {
    /// Unique federal CBSA code
    pub cbsa_code: String,

    /// Official MSA name, e.g. "Chicago-Naperville-Elgin, IL-IN-WI"
    pub name: String,

    /// Total population estimate
    pub population: u64,

    /// Primary state two-letter abbreviation
    pub state_abbr: String,

    /// Census region of the primary state
    pub region: Region,

    /// Whether any matched transit agency operates rail service
    #[serde(default)]
    pub has_rail: bool,

    /// Whether any shared-mobility system serves the metro
    #[serde(default)]
    pub has_shared_mobility: bool,

    /// Matched transit agency names
    #[serde(default)]
    pub agencies: Vec<String>,

    /// Matched shared-mobility system names
    #[serde(default)]
    pub shared_mobility_systems: Vec<String>,
}

impl MetroArea {
    /// Create a metro with no transit attributes resolved
    #[must_use]
    pub fn new(
        cbsa_code: impl Into<String>,
        name: impl Into<String>,
        population: u64,
        state_abbr: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            cbsa_code: cbsa_code.into(),
            name: name.into(),
            population,
            state_abbr: state_abbr.into(),
            region,
            has_rail: false,
            has_shared_mobility: false,
            agencies: Vec::new(),
            shared_mobility_systems: Vec::new(),
        }
    }

    /// Set the rail presence flag
    #[must_use]
    pub fn with_rail(mut self, has_rail: bool) -> Self {
        self.has_rail = has_rail;
        self
    }

    /// Set the shared-mobility presence flag
    #[must_use]
    pub fn with_shared_mobility(mut self, has_shared_mobility: bool) -> Self {
        self.has_shared_mobility = has_shared_mobility;
        self
    }

    /// Attach matched transit agency names
    #[must_use]
    pub fn with_agencies(mut self, agencies: Vec<String>) -> Self {
        self.agencies = agencies;
        self
    }

    /// Attach matched shared-mobility system names
    #[must_use]
    pub fn with_shared_mobility_systems(mut self, systems: Vec<String>) -> Self {
        self.shared_mobility_systems = systems;
        self
    }
}
