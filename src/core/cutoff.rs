use crate::core::metrics::Tone;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points below a cutoff that still count as reachable.
pub const NEAR_MARGIN: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cutoff {
    pub key: String,
    pub score: f64,
}

impl Cutoff {
    pub fn new(key: impl Into<String>, score: f64) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    Exceeds,
    Near,
    Far,
}

impl Classification {
    pub fn label(self) -> &'static str {
        match self {
            Self::Exceeds => "Would pass",
            Self::Near => "Almost there",
            Self::Far => "Far",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Exceeds => Tone::Success,
            Self::Near => Tone::Warning,
            Self::Far => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub progress_percent: f64,
    pub diff: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutoffComparison {
    pub cutoff_key: String,
    pub cutoff_score: f64,
    pub progress_percent: f64,
    pub diff: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CutoffError {
    #[error("invalid cutoff {cutoff}: cutoff scores must be finite and greater than zero")]
    InvalidCutoff { cutoff: f64 },
}

pub fn classify_against_cutoff(score: f64, cutoff: f64) -> Result<Comparison, CutoffError> {
    classify_against_cutoff_with(score, cutoff, NEAR_MARGIN)
}

/// First match wins: at or above the cutoff, then within `near_margin`
/// points below it, then everything else.
pub fn classify_against_cutoff_with(
    score: f64,
    cutoff: f64,
    near_margin: f64,
) -> Result<Comparison, CutoffError> {
    if !cutoff.is_finite() || cutoff <= 0.0 {
        return Err(CutoffError::InvalidCutoff { cutoff });
    }

    let diff = score - cutoff;
    let ratio = score / cutoff * 100.0;
    let progress_percent = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 100.0)
    };

    let classification = if diff >= 0.0 {
        Classification::Exceeds
    } else if diff >= -near_margin {
        Classification::Near
    } else {
        Classification::Far
    };

    Ok(Comparison {
        progress_percent,
        diff,
        classification,
    })
}

pub fn classify_against_cutoff_table(
    score: f64,
    cutoffs: &[Cutoff],
) -> Result<Vec<CutoffComparison>, CutoffError> {
    classify_against_cutoff_table_with(score, cutoffs, NEAR_MARGIN)
}

/// Output order follows `cutoffs`; the first invalid entry aborts the whole table.
pub fn classify_against_cutoff_table_with(
    score: f64,
    cutoffs: &[Cutoff],
    near_margin: f64,
) -> Result<Vec<CutoffComparison>, CutoffError> {
    cutoffs
        .iter()
        .map(|cutoff| {
            let comparison = classify_against_cutoff_with(score, cutoff.score, near_margin)?;
            tracing::debug!(
                cutoff = %cutoff.key,
                diff = comparison.diff,
                classification = ?comparison.classification,
                "classified score against cutoff"
            );
            Ok(CutoffComparison {
                cutoff_key: cutoff.key.clone(),
                cutoff_score: cutoff.score,
                progress_percent: comparison.progress_percent,
                diff: comparison.diff,
                classification: comparison.classification,
            })
        })
        .collect()
}
