use crate::config::{Config, FailOn};
use crate::core::cutoff::CutoffComparison;
use crate::core::metrics::{ProgressStatus, TextMetrics, Tone};
use crate::core::score::{CompetencyPoint, ScoreBand};
use crate::themes::ThemeSummary;
use colored::{ColoredString, Colorize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::Error => matches!(self, Self::Error),
            FailOn::Warning => matches!(self, Self::Error | Self::Warning),
        }
    }

    fn colored(self) -> String {
        match self {
            Self::Error => self.as_str().red().bold().to_string(),
            Self::Warning => self.as_str().yellow().bold().to_string(),
            Self::Info => self.as_str().blue().bold().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub hint: String,
}

impl Notice {
    pub fn new(severity: Severity, title: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            hint: hint.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LengthSection {
    #[serde(flatten)]
    pub metrics: TextMetrics,
    pub status: ProgressStatus,
    pub status_label: &'static str,
    pub progress_percent: f64,
    pub ready_for_scoring: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSection {
    pub total_score: f64,
    pub band: ScoreBand,
    pub competencies: Vec<CompetencyPoint>,
    pub overall_feedback: String,
    pub suggested_action: String,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub theme: Option<ThemeSummary>,
    pub length: LengthSection,
    pub score: Option<ScoreSection>,
    pub comparisons: Vec<CutoffComparison>,
    pub notices: Vec<Notice>,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSummary>,
    pub length: LengthSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreSection>,
    pub comparisons: Vec<CutoffComparison>,
    pub notices: Vec<Notice>,
    pub ok: bool,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            theme: report.theme.clone(),
            length: report.length.clone(),
            score: report.score.clone(),
            comparisons: report.comparisons.clone(),
            notices: report.notices.clone(),
            ok: report.exit.ok,
        }
    }
}

pub fn evaluate_exit(notices: &[Notice], cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if cfg.general.fail_on != FailOn::None
        && notices
            .iter()
            .any(|notice| notice.severity.meets_fail_on(cfg.general.fail_on))
    {
        reasons.push(match cfg.general.fail_on {
            FailOn::Warning => "found warning-or-higher notices".to_string(),
            FailOn::Error => "found error notices".to_string(),
            FailOn::None => String::new(),
        });
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Neutral => text.dimmed(),
        Tone::Danger => text.red().bold(),
        Tone::Warning => text.yellow().bold(),
        Tone::Success => text.green().bold(),
    }
}

fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn print_length(length: &LengthSection) {
    println!(
        "Words: {}  Lines: {}  [{}]",
        length.metrics.word_count,
        length.metrics.line_count,
        paint(length.status_label, length.status.tone())
    );
    println!(
        "Length {} {}%",
        bar(length.progress_percent, 25),
        length.progress_percent.floor()
    );
}

pub fn print_comparisons(score: f64, comparisons: &[CutoffComparison]) {
    if comparisons.is_empty() {
        println!("No reference cutoffs configured.");
        return;
    }

    println!("Cutoff comparison for score {score:.1}:");
    for comparison in comparisons {
        let diff = if comparison.diff >= 0.0 {
            format!("surplus +{:.1}", comparison.diff).as_str().green()
        } else {
            format!("deficit {:.1}", comparison.diff).as_str().red()
        };
        println!(
            "  {:<14} target {:>6.1}  {} {:>5.1}%  {}  {}",
            comparison.cutoff_key,
            comparison.cutoff_score,
            bar(comparison.progress_percent, 20),
            comparison.progress_percent,
            diff,
            paint(
                comparison.classification.label(),
                comparison.classification.tone()
            )
        );
    }
}

pub fn print_human(report: &FinalReport) {
    if let Some(theme) = &report.theme {
        println!("Theme: {} ({})", theme.title, theme.year);
        println!();
    }

    print_length(&report.length);

    if let Some(score) = &report.score {
        println!();
        println!(
            "Score: {}/1000 ({})",
            paint(&format!("{:.0}", score.total_score), score.band.tone()),
            score.band.label()
        );
        for point in &score.competencies {
            println!(
                "  {} {:>5.0}/{:.0} {} {}",
                point.key,
                point.score,
                point.full_mark,
                bar(point.percent, 10),
                point.label
            );
        }
        if !score.overall_feedback.is_empty() {
            println!();
            println!("{}", score.overall_feedback);
        }
        if !score.suggested_action.is_empty() {
            println!("-> next: {}", score.suggested_action);
        }
        println!();
        print_comparisons(score.total_score, &report.comparisons);
    }

    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let grouped: Vec<&Notice> = report
            .notices
            .iter()
            .filter(|notice| notice.severity == severity)
            .collect();

        if grouped.is_empty() {
            continue;
        }

        println!();
        println!("{} ({})", severity.colored(), grouped.len());
        for notice in grouped {
            println!("[{}] {}", notice.severity.as_str(), notice.title);
            println!("-> hint: {}", notice.hint);
        }
    }

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notices(severities: &[Severity]) -> Vec<Notice> {
        severities
            .iter()
            .map(|severity| Notice::new(*severity, "title", "hint"))
            .collect()
    }

    #[test]
    fn fail_on_warning_catches_warnings() {
        let cfg = Config::default();
        assert!(!evaluate_exit(&notices(&[Severity::Warning]), &cfg).ok);
        assert!(evaluate_exit(&notices(&[Severity::Info]), &cfg).ok);
    }

    #[test]
    fn fail_on_error_ignores_warnings() {
        let mut cfg = Config::default();
        cfg.general.fail_on = FailOn::Error;
        assert!(evaluate_exit(&notices(&[Severity::Warning]), &cfg).ok);
        let exit = evaluate_exit(&notices(&[Severity::Error]), &cfg);
        assert!(!exit.ok);
        assert_eq!(exit.reason_line(), "found error notices");
    }

    #[test]
    fn fail_on_none_always_passes() {
        let mut cfg = Config::default();
        cfg.general.fail_on = FailOn::None;
        assert!(evaluate_exit(&notices(&[Severity::Error]), &cfg).ok);
    }

    #[test]
    fn bar_is_clamped() {
        assert_eq!(bar(50.0, 4), "[##--]");
        assert_eq!(bar(150.0, 4), "[####]");
        assert_eq!(bar(-3.0, 4), "[----]");
    }
}
