use crate::core::metrics::Tone;
use crate::scoring::{COMPETENCY_MAX, ScoredResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsWork => "Needs work",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Excellent => Tone::Success,
            Self::Good => Tone::Warning,
            Self::NeedsWork => Tone::Danger,
        }
    }
}

pub fn band_for_total(total: f64) -> ScoreBand {
    if total >= 900.0 {
        ScoreBand::Excellent
    } else if total >= 700.0 {
        ScoreBand::Good
    } else {
        ScoreBand::NeedsWork
    }
}

/// One axis of the competency radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetencyPoint {
    pub key: &'static str,
    pub label: String,
    pub score: f64,
    pub full_mark: f64,
    pub percent: f64,
}

pub fn competency_points(result: &ScoredResult) -> Vec<CompetencyPoint> {
    result
        .competencies
        .iter()
        .map(|(key, competency)| CompetencyPoint {
            key,
            label: competency.label.clone(),
            score: competency.score,
            full_mark: COMPETENCY_MAX,
            percent: (competency.score / COMPETENCY_MAX * 100.0).clamp(0.0, 100.0),
        })
        .collect()
}
