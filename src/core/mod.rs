pub mod cutoff;
pub mod metrics;
pub mod report;
pub mod score;

use crate::config::Config;
use crate::core::cutoff::CutoffComparison;
use crate::core::metrics::LengthThresholds;
use crate::core::report::{FinalReport, LengthSection, Notice, ScoreSection, Severity};
use crate::scoring::ScoredResult;
use crate::themes::Theme;
use anyhow::{Context, Result};

pub fn measure_length(text: &str, thresholds: &LengthThresholds) -> LengthSection {
    let metrics = metrics::compute_metrics(text);
    let status = metrics::classify_progress_with(metrics.word_count, thresholds);

    LengthSection {
        metrics,
        status,
        status_label: status.label(),
        progress_percent: metrics::length_progress_percent_with(metrics.word_count, thresholds),
        ready_for_scoring: metrics::check_submission(&metrics, thresholds).is_ok(),
    }
}

pub fn compare_score(score: f64, cfg: &Config) -> Result<Vec<CutoffComparison>> {
    cutoff::classify_against_cutoff_table_with(score, &cfg.cutoffs, cfg.thresholds.near_margin)
        .context("failed to compare score against reference cutoffs")
}

/// Builds the full report for one essay draft and, when available, the
/// result the scoring service returned for it.
pub fn analyze(
    text: &str,
    result: Option<&ScoredResult>,
    theme: Option<&Theme>,
    cfg: &Config,
) -> Result<FinalReport> {
    let thresholds = cfg.thresholds.length();
    let length = measure_length(text, &thresholds);
    let mut notices = length_notices(text, &length, &thresholds);

    let (score, comparisons) = match result {
        Some(result) => {
            let comparisons = compare_score(result.total_score, cfg)?;
            notices.extend(estimate_notices(result, &comparisons));
            let section = ScoreSection {
                total_score: result.total_score,
                band: score::band_for_total(result.total_score),
                competencies: score::competency_points(result),
                overall_feedback: result.overall_feedback.clone(),
                suggested_action: result.suggested_action.clone(),
            };
            (Some(section), comparisons)
        }
        None => (None, Vec::new()),
    };

    let exit = report::evaluate_exit(&notices, cfg);
    tracing::debug!(
        words = length.metrics.word_count,
        status = ?length.status,
        scored = score.is_some(),
        ok = exit.ok,
        "analysis complete"
    );

    Ok(FinalReport {
        theme: theme.map(Theme::summary),
        length,
        score,
        comparisons,
        notices,
        exit,
    })
}

fn length_notices(text: &str, length: &LengthSection, thresholds: &LengthThresholds) -> Vec<Notice> {
    let mut notices = Vec::new();

    if text.trim().is_empty() {
        notices.push(Notice::new(
            Severity::Error,
            "essay is blank",
            "write the essay before asking for a score",
        ));
    } else if let Err(err) = metrics::check_submission(&length.metrics, thresholds) {
        notices.push(Notice::new(
            Severity::Error,
            err.to_string(),
            "keep writing; short essays cannot be scored consistently",
        ));
    }

    if metrics::exceeds_word_target(&length.metrics, thresholds) {
        notices.push(Notice::new(
            Severity::Warning,
            format!(
                "essay has {} words, over the {}-word target",
                length.metrics.word_count, thresholds.full_bar_words
            ),
            "tighten the argument; extra length rarely adds points",
        ));
    }

    if metrics::exceeds_line_limit(&length.metrics, thresholds) {
        notices.push(Notice::new(
            Severity::Warning,
            format!(
                "essay has {} lines, over the {}-line answer sheet",
                length.metrics.line_count, thresholds.max_lines
            ),
            "merge short paragraphs so the text fits the answer sheet",
        ));
    }

    notices
}

/// The scoring service guesses admission verdicts on its own; point out
/// where its guess disagrees with the cutoff table.
fn estimate_notices(result: &ScoredResult, comparisons: &[CutoffComparison]) -> Vec<Notice> {
    let Some(estimate) = &result.estimate else {
        return Vec::new();
    };

    comparisons
        .iter()
        .filter_map(|comparison| {
            let verdict = estimate.verdict_for(&comparison.cutoff_key)?;
            let claimed = verdict.classification()?;
            (claimed != comparison.classification).then(|| {
                Notice::new(
                    Severity::Info,
                    format!(
                        "scoring service estimated {:?} for {}, cutoff table says {:?}",
                        claimed, comparison.cutoff_key, comparison.classification
                    ),
                    "the cutoff table is authoritative; the service estimate is informational",
                )
            })
        })
        .collect()
}
