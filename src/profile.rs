//! Scores and profiles

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::facet::{FACET_COUNT, FacetName};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A facet score, always within [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub const NEUTRAL: Score = Score(0.5);
    pub const MIN: Score = Score(0.0);
    pub const MAX: Score = Score(1.0);

    /// Clamp a raw value into [0, 1]. NaN becomes neutral.
    pub fn new(value: f64) -> Score {
        if value.is_nan() {
            debug!("NaN score replaced with neutral");
            return Score::NEUTRAL;
        }
        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            debug!(value, clamped, "score clamped");
        }
        Score(clamped)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::NEUTRAL
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A facet paired with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainScore {
    pub facet: FacetName,
    pub score: Score,
}

/// Seven scores, one per facet, in facet order.
///
/// Serialized as a JSON object keyed by lowercase facet name. Missing facets
/// read as neutral and unknown keys are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct Profile {
    scores: [Score; FACET_COUNT],
}

impl Default for Profile {
    fn default() -> Self {
        Profile::neutral()
    }
}

impl Profile {
    /// Every facet at 0.5
    pub fn neutral() -> Profile {
        Profile {
            scores: [Score::NEUTRAL; FACET_COUNT],
        }
    }

    /// Build from raw values in facet order
    pub fn from_scores(values: [f64; FACET_COUNT]) -> Profile {
        Profile {
            scores: values.map(Score::new),
        }
    }

    /// Build from (name, value) pairs. Unknown names are ignored; later
    /// entries for the same facet win.
    pub fn from_pairs<'a, I>(pairs: I) -> Profile
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut profile = Profile::neutral();
        for (name, value) in pairs {
            match name.parse::<FacetName>() {
                Ok(facet) => profile.set(facet, value),
                Err(e) => debug!("ignoring profile entry: {}", e),
            }
        }
        profile
    }

    pub fn from_json(json: &str) -> Result<Profile, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, facet: FacetName) -> Score {
        self.scores[facet.index()]
    }

    pub fn set(&mut self, facet: FacetName, value: f64) {
        self.scores[facet.index()] = Score::new(value);
    }

    /// Scores in facet order (apex to base)
    pub fn iter(&self) -> impl Iterator<Item = DomainScore> + '_ {
        FacetName::ALL.iter().map(|&facet| DomainScore {
            facet,
            score: self.get(facet),
        })
    }

    /// Raw values in facet order
    pub fn values(&self) -> [f64; FACET_COUNT] {
        self.scores.map(Score::value)
    }
}

impl From<BTreeMap<String, f64>> for Profile {
    fn from(map: BTreeMap<String, f64>) -> Self {
        Profile::from_pairs(map.iter().map(|(k, v)| (k.as_str(), *v)))
    }
}

impl From<Profile> for BTreeMap<String, f64> {
    fn from(profile: Profile) -> Self {
        profile
            .iter()
            .map(|ds| (ds.facet.label().to_lowercase(), ds.score.value()))
            .collect()
    }
}
