use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCORED_780: &str = r#"```json
{
  "totalScore": 780,
  "competencies": {
    "c1": { "score": 160, "label": "Norma culta", "feedback": "", "strengths": [], "weaknesses": [] },
    "c2": { "score": 160, "label": "Tema", "feedback": "", "strengths": [], "weaknesses": [] },
    "c3": { "score": 140, "label": "Argumentação", "feedback": "", "strengths": [], "weaknesses": [] },
    "c4": { "score": 160, "label": "Coesão", "feedback": "", "strengths": [], "weaknesses": [] },
    "c5": { "score": 160, "label": "Intervenção", "feedback": "", "strengths": [], "weaknesses": [] }
  },
  "overallFeedback": "Texto consistente.",
  "suggestedAction": "Detalhe a proposta de intervenção."
}
```"#;

fn essaygauge(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("essaygauge");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn write_essay(dir: &Path, words: usize) -> String {
    let text: String = (0..words)
        .map(|i| if i % 15 == 14 { "texto.\n" } else { "texto " })
        .collect();
    fs::write(dir.join("essay.txt"), text).unwrap();
    "essay.txt".to_string()
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn check_reports_cutoff_comparison_as_json() {
    let dir = TempDir::new().unwrap();
    let essay = write_essay(dir.path(), 200);
    fs::write(dir.path().join("result.json"), SCORED_780).unwrap();

    let report = json_stdout(essaygauge(dir.path()).args([
        "check",
        "--essay",
        &essay,
        "--result",
        "result.json",
        "--theme",
        "enem-2023",
        "--json",
    ]));

    assert_eq!(report["ok"], true);
    assert_eq!(report["length"]["word_count"], 200);
    assert_eq!(report["length"]["status"], "InProgress");
    assert_eq!(report["score"]["band"], "Good");
    assert_eq!(report["theme"]["id"], "enem-2023");

    let comparisons = report["comparisons"].as_array().unwrap();
    let summary: Vec<(&str, &str)> = comparisons
        .iter()
        .map(|c| {
            (
                c["cutoff_key"].as_str().unwrap(),
                c["classification"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            ("medicine", "Near"),
            ("law", "Exceeds"),
            ("engineering", "Exceeds")
        ]
    );
}

#[test]
fn check_exits_one_for_short_essay() {
    let dir = TempDir::new().unwrap();
    let essay = write_essay(dir.path(), 90);

    essaygauge(dir.path())
        .args(["check", "--essay", &essay])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Below minimum"))
        .stdout(predicate::str::contains("at least 150 are needed"))
        .stdout(predicate::str::contains("exit: FAILED"));
}

#[test]
fn check_reads_essay_from_stdin() {
    let dir = TempDir::new().unwrap();
    let text = vec!["palavra"; 360].join(" ");

    essaygauge(dir.path())
        .args(["check", "--essay", "-"])
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 360"))
        .stdout(predicate::str::contains("Ideal length"));
}

#[test]
fn unknown_theme_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let essay = write_essay(dir.path(), 200);

    essaygauge(dir.path())
        .args(["check", "--essay", &essay, "--theme", "enem-1800"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn malformed_result_is_reported() {
    let dir = TempDir::new().unwrap();
    let essay = write_essay(dir.path(), 200);
    fs::write(dir.path().join("result.json"), "{ not json").unwrap();

    essaygauge(dir.path())
        .args(["check", "--essay", &essay, "--result", "result.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed loading scored result"));
}

#[test]
fn metrics_prints_counts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("draft.txt"), "um dois\ntres").unwrap();

    let metrics = json_stdout(essaygauge(dir.path()).args([
        "metrics",
        "--essay",
        "draft.txt",
        "--json",
    ]));
    assert_eq!(metrics["word_count"], 3);
    assert_eq!(metrics["line_count"], 2);
    assert_eq!(metrics["status"], "BelowMinimum");
    assert_eq!(metrics["ready_for_scoring"], false);
}

#[test]
fn compare_uses_configured_cutoffs() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("essaygauge.toml"),
        "[[cutoffs]]\nkey = \"nursing\"\nscore = 700.0\n",
    )
    .unwrap();

    let comparisons = json_stdout(essaygauge(dir.path()).args([
        "compare", "--score", "680", "--json",
    ]));
    let comparisons = comparisons.as_array().unwrap();
    assert_eq!(comparisons.len(), 1);
    assert_eq!(comparisons[0]["cutoff_key"], "nursing");
    assert_eq!(comparisons[0]["classification"], "Near");
    assert_eq!(comparisons[0]["diff"], -20.0);
}

#[test]
fn compare_rejects_invalid_cutoff_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("essaygauge.toml"),
        "[[cutoffs]]\nkey = \"broken\"\nscore = 0.0\n",
    )
    .unwrap();

    essaygauge(dir.path())
        .args(["compare", "--score", "700"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn compare_rejects_non_finite_score() {
    let dir = TempDir::new().unwrap();

    for raw in ["NaN", "inf"] {
        essaygauge(dir.path())
            .args(["compare", "--score", raw])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("finite"));
    }
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    essaygauge(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));
    let written = fs::read_to_string(dir.path().join("essaygauge.toml")).unwrap();
    assert!(written.contains("medicine"));
    assert!(written.contains("near_margin"));

    essaygauge(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn themes_lists_and_shows_prompts() {
    let dir = TempDir::new().unwrap();

    essaygauge(dir.path())
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("tema-livre"))
        .stdout(predicate::str::contains("enem-2021"));

    essaygauge(dir.path())
        .args(["themes", "enem-2022"])
        .assert()
        .success()
        .stdout(predicate::str::contains("povos tradicionais"))
        .stdout(predicate::str::contains("  - "));
}
