//! Census region classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four US census regions.
///
/// The variant order is part of the stratum ordering contract: strata are
/// always processed in `StratumKey` order, and `Region` sorts alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Midwest,
    Northeast,
    South,
    West,
}

impl Region {
    /// Region name as used in the CSV contract
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Midwest => "Midwest",
            Self::Northeast => "Northeast",
            Self::South => "South",
            Self::West => "West",
        }
    }

    /// Parse a region from its census name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Midwest" => Some(Self::Midwest),
            "Northeast" => Some(Self::Northeast),
            "South" => Some(Self::South),
            "West" => Some(Self::West),
            _ => None,
        }
    }

    /// Census region for a two-letter state abbreviation.
    ///
    /// Covers the 50 states plus DC; territories are unclassified.
    #[must_use]
    pub fn from_state(abbr: &str) -> Option<Self> {
        match abbr.trim() {
            // New England and Mid-Atlantic
            "CT" | "ME" | "MA" | "NH" | "RI" | "VT" | "NJ" | "NY" | "PA" => Some(Self::Northeast),
            // East and West North Central
            "IL" | "IN" | "MI" | "OH" | "WI" | "IA" | "KS" | "MN" | "MO" | "NE" | "ND" | "SD" => {
                Some(Self::Midwest)
            }
            // South Atlantic, East and West South Central
            "DE" | "FL" | "GA" | "MD" | "NC" | "SC" | "VA" | "DC" | "WV" | "AL" | "KY" | "MS"
            | "TN" | "AR" | "LA" | "OK" | "TX" => Some(Self::South),
            // Mountain and Pacific
            "AZ" | "CO" | "ID" | "MT" | "NV" | "NM" | "UT" | "WY" | "AK" | "CA" | "HI" | "OR"
            | "WA" => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
