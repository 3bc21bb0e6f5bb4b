//! Facet definitions and the per-facet hue table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of facets in a profile
pub const FACET_COUNT: usize = 7;

/// Unknown facet identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown facet: {0:?}")]
pub struct InvalidFacetError(pub String);

/// One of the seven philosophical facets.
///
/// Declaration order is the stacking order of the triangle (apex first) and
/// the order of hue assignment from red to violet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetName {
    Ontology,
    Epistemology,
    Praxeology,
    Axiology,
    Mythology,
    Cosmology,
    Teleology,
}

/// Base hue per facet in CIE LCh degrees, red to violet
const FACET_HUES: [f64; FACET_COUNT] = [
    30.0,  // Ontology - Red
    60.0,  // Epistemology - Orange
    90.0,  // Praxeology - Gold
    140.0, // Axiology - Green
    200.0, // Mythology - Teal
    275.0, // Cosmology - Blue
    320.0, // Teleology - Violet
];

impl FacetName {
    /// All facets, apex to base
    pub const ALL: [FacetName; FACET_COUNT] = [
        FacetName::Ontology,
        FacetName::Epistemology,
        FacetName::Praxeology,
        FacetName::Axiology,
        FacetName::Mythology,
        FacetName::Cosmology,
        FacetName::Teleology,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<FacetName> {
        Self::ALL.get(index).copied()
    }

    pub fn first() -> FacetName {
        Self::ALL[0]
    }

    pub fn last() -> FacetName {
        Self::ALL[FACET_COUNT - 1]
    }

    /// Next facet toward the base, staying on the last one
    pub fn next(self) -> FacetName {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous facet toward the apex, staying on the first one
    pub fn prev(self) -> FacetName {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }

    pub fn label(self) -> &'static str {
        match self {
            FacetName::Ontology => "Ontology",
            FacetName::Epistemology => "Epistemology",
            FacetName::Praxeology => "Praxeology",
            FacetName::Axiology => "Axiology",
            FacetName::Mythology => "Mythology",
            FacetName::Cosmology => "Cosmology",
            FacetName::Teleology => "Teleology",
        }
    }

    /// Short column code for tables
    pub fn code(self) -> &'static str {
        match self {
            FacetName::Ontology => "ONTO",
            FacetName::Epistemology => "EPIS",
            FacetName::Praxeology => "PRAX",
            FacetName::Axiology => "AXIO",
            FacetName::Mythology => "MYTH",
            FacetName::Cosmology => "COSM",
            FacetName::Teleology => "TELE",
        }
    }

    /// Base hue of this facet in degrees
    pub fn hue(self) -> f64 {
        FACET_HUES[self.index()]
    }

    /// The facet that owns the yellow/gold hue region
    pub fn is_gold(self) -> bool {
        self == FacetName::Praxeology
    }
}

/// Base hue of `facet` in CIE LCh degrees
pub fn hue_for(facet: FacetName) -> f64 {
    facet.hue()
}

impl fmt::Display for FacetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacetName {
    type Err = InvalidFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FacetName::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(name) || f.code().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidFacetError(s.to_string()))
    }
}
