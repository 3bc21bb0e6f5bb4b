//! Likert answers to normalized facet profiles

use thiserror::Error;

use crate::facet::{FACET_COUNT, FacetName};
use crate::profile::{Profile, Score};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
    #[error("answer {value} to question {index} is outside {min}..={max}")]
    OutOfRange {
        index: usize,
        value: u8,
        min: u8,
        max: u8,
    },
}

/// Likert answer range, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikertScale {
    pub min: u8,
    pub max: u8,
}

impl Default for LikertScale {
    fn default() -> Self {
        LikertScale { min: 1, max: 5 }
    }
}

impl LikertScale {
    /// Map an answer onto [0, 1]
    fn normalize(&self, value: u8) -> f64 {
        if self.max <= self.min {
            return Score::NEUTRAL.value();
        }
        (value - self.min) as f64 / (self.max - self.min) as f64
    }
}

/// One questionnaire item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Question {
    pub facet: FacetName,
    pub weight: f64,
    /// Agreement lowers the facet score
    pub reversed: bool,
}

impl Question {
    pub fn new(facet: FacetName) -> Question {
        Question {
            facet,
            weight: 1.0,
            reversed: false,
        }
    }

    pub fn reversed(facet: FacetName) -> Question {
        Question {
            reversed: true,
            ..Question::new(facet)
        }
    }

    pub fn with_weight(self, weight: f64) -> Question {
        Question { weight, ..self }
    }
}

/// Weighted mean of normalized answers per facet. Facets with no weighted
/// answers stay neutral.
pub fn score_answers(
    questions: &[Question],
    answers: &[u8],
    scale: LikertScale,
) -> Result<Profile, ScoringError> {
    if questions.len() != answers.len() {
        return Err(ScoringError::AnswerCount {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    let mut weighted = [0.0f64; FACET_COUNT];
    let mut weights = [0.0f64; FACET_COUNT];

    for (index, (question, &value)) in questions.iter().zip(answers).enumerate() {
        if value < scale.min || value > scale.max {
            return Err(ScoringError::OutOfRange {
                index,
                value,
                min: scale.min,
                max: scale.max,
            });
        }
        let weight = question.weight.max(0.0);
        let x = scale.normalize(value);
        let x = if question.reversed { 1.0 - x } else { x };

        let i = question.facet.index();
        weighted[i] += weight * x;
        weights[i] += weight;
    }

    let mut profile = Profile::neutral();
    for facet in FacetName::ALL {
        let i = facet.index();
        if weights[i] > 0.0 {
            profile.set(facet, weighted[i] / weights[i]);
        }
    }
    Ok(profile)
}
