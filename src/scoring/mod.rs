//! Scored results produced by the external essay-scoring service.
//!
//! The service grades five competencies on a 0-200 scale and reports a
//! 0-1000 total. Nothing here talks to the service; callers hand over the
//! JSON text it returned.

pub mod parse;

use crate::core::cutoff::Classification;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use parse::parse_scored_result;

pub const COMPETENCY_MAX: f64 = 200.0;
pub const TOTAL_MAX: f64 = 1000.0;
/// Rounding slack allowed between the total and the competency sum.
pub const SUM_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    pub total_score: f64,
    pub competencies: Competencies,
    pub overall_feedback: String,
    pub suggested_action: String,
    #[serde(
        rename = "sisuEstimate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub estimate: Option<AdmissionEstimate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competencies {
    pub c1: Competency,
    pub c2: Competency,
    pub c3: Competency,
    pub c4: Competency,
    pub c5: Competency,
}

impl Competencies {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Competency)> {
        [
            ("C1", &self.c1),
            ("C2", &self.c2),
            ("C3", &self.c3),
            ("C4", &self.c4),
            ("C5", &self.c5),
        ]
        .into_iter()
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, competency)| competency.score).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub score: f64,
    pub label: String,
    pub feedback: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
}

/// Admission verdicts the scoring service adds on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionEstimate {
    pub medicine: String,
    pub law: String,
    pub engineering: String,
}

impl AdmissionEstimate {
    pub fn verdict_for(&self, key: &str) -> Option<Verdict<'_>> {
        let raw = match key {
            "medicine" => &self.medicine,
            "law" => &self.law,
            "engineering" => &self.engineering,
            _ => return None,
        };
        Some(Verdict(raw.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a>(pub &'a str);

impl Verdict<'_> {
    /// Maps the service's Portuguese verdict words; anything else is unknown.
    pub fn classification(self) -> Option<Classification> {
        match self.0.trim().to_lowercase().as_str() {
            "passaria" => Some(Classification::Exceeds),
            "quase" | "quase lá" => Some(Classification::Near),
            "longe" => Some(Classification::Far),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("scored result is empty")]
    Empty,
    #[error("scored result is not valid JSON")]
    Malformed(#[from] serde_json::Error),
    #[error("{field} score {value} is outside 0..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        max: f64,
    },
}

impl ScoredResult {
    pub fn validate(&self) -> Result<(), ScoringError> {
        check_range("total", self.total_score, TOTAL_MAX)?;
        for (key, competency) in self.competencies.iter() {
            check_range(key, competency.score, COMPETENCY_MAX)?;
        }

        if !self.total_matches_competencies() {
            tracing::warn!(
                total = self.total_score,
                competency_sum = self.competencies.sum(),
                "total score differs from the sum of competency scores; using the reported total"
            );
        }

        Ok(())
    }

    /// Whether the reported total agrees with the competency sum within
    /// [`SUM_TOLERANCE`].
    pub fn total_matches_competencies(&self) -> bool {
        (self.competencies.sum() - self.total_score).abs() <= SUM_TOLERANCE
    }
}

fn check_range(field: &str, value: f64, max: f64) -> Result<(), ScoringError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ScoringError::OutOfRange {
            field: field.to_string(),
            value,
            max,
        })
    }
}
