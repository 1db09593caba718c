use serde::Serialize;
use thiserror::Error;

/// Below this many words an essay is not sent for scoring.
pub const MINIMUM_WORDS: usize = 150;
/// Word count from which a draft counts as full length.
pub const IDEAL_WORDS: usize = 350;
/// Word count that fills the length bar; deliberately above `IDEAL_WORDS`.
pub const FULL_BAR_WORDS: usize = 500;
/// Typed lines available on the answer sheet.
pub const MAX_LINES: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthThresholds {
    pub minimum_words: usize,
    pub ideal_words: usize,
    pub full_bar_words: usize,
    pub max_lines: usize,
}

impl Default for LengthThresholds {
    fn default() -> Self {
        Self {
            minimum_words: MINIMUM_WORDS,
            ideal_words: IDEAL_WORDS,
            full_bar_words: FULL_BAR_WORDS,
            max_lines: MAX_LINES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub line_count: usize,
}

/// Semantic color of a status, left to the renderer to map onto a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Danger,
    Warning,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProgressStatus {
    Blank,
    BelowMinimum,
    InProgress,
    IdealLength,
}

impl ProgressStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Blank => "Blank",
            Self::BelowMinimum => "Below minimum",
            Self::InProgress => "In progress",
            Self::IdealLength => "Ideal length",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Blank => Tone::Neutral,
            Self::BelowMinimum => Tone::Danger,
            Self::InProgress => Tone::Warning,
            Self::IdealLength => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("essay has {words} words; at least {required} are needed for scoring")]
    TooShort { words: usize, required: usize },
}

/// Unicode white space plus U+FEFF, excluding NEXT LINE (U+0085).
pub fn is_word_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Counts whitespace-separated words and typed lines.
///
/// Lines are `'\n'`-delimited segments of the raw text, so an empty draft
/// still has one line and soft-wrapped lines are not counted.
pub fn compute_metrics(text: &str) -> TextMetrics {
    let word_count = text
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count();
    let line_count = text.matches('\n').count() + 1;

    tracing::trace!(word_count, line_count, "computed text metrics");
    TextMetrics {
        word_count,
        line_count,
    }
}

pub fn classify_progress(word_count: usize) -> ProgressStatus {
    classify_progress_with(word_count, &LengthThresholds::default())
}

pub fn classify_progress_with(word_count: usize, thresholds: &LengthThresholds) -> ProgressStatus {
    if word_count == 0 {
        ProgressStatus::Blank
    } else if word_count < thresholds.minimum_words {
        ProgressStatus::BelowMinimum
    } else if word_count < thresholds.ideal_words {
        ProgressStatus::InProgress
    } else {
        ProgressStatus::IdealLength
    }
}

pub fn length_progress_percent(word_count: usize) -> f64 {
    length_progress_percent_with(word_count, &LengthThresholds::default())
}

pub fn length_progress_percent_with(word_count: usize, thresholds: &LengthThresholds) -> f64 {
    if thresholds.full_bar_words == 0 {
        return 100.0;
    }
    (word_count as f64 / thresholds.full_bar_words as f64 * 100.0).min(100.0)
}

pub fn check_submission(
    metrics: &TextMetrics,
    thresholds: &LengthThresholds,
) -> Result<(), SubmissionError> {
    if metrics.word_count < thresholds.minimum_words {
        return Err(SubmissionError::TooShort {
            words: metrics.word_count,
            required: thresholds.minimum_words,
        });
    }
    Ok(())
}

pub fn exceeds_word_target(metrics: &TextMetrics, thresholds: &LengthThresholds) -> bool {
    metrics.word_count > thresholds.full_bar_words
}

pub fn exceeds_line_limit(metrics: &TextMetrics, thresholds: &LengthThresholds) -> bool {
    metrics.line_count > thresholds.max_lines
}
