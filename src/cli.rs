use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "essaygauge",
    version,
    about = "Essay length metrics and admission cutoff comparison"
)]
pub struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full report for an essay and, optionally, its scored result
    Check(CheckArgs),
    /// Word and line counts only
    Metrics(MetricsArgs),
    /// Compare a total score against the reference cutoffs
    Compare(CompareArgs),
    /// List the built-in essay prompts, or show one in full
    Themes(ThemesArgs),
    /// Write a default essaygauge.toml
    Init,
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Essay text file, or `-` for stdin
    #[arg(long)]
    pub essay: PathBuf,
    /// JSON returned by the scoring service
    #[arg(long)]
    pub result: Option<PathBuf>,
    /// Prompt id from `essaygauge themes`
    #[arg(long)]
    pub theme: Option<String>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct MetricsArgs {
    #[arg(long)]
    pub essay: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite_score)]
    pub score: f64,
    #[command(flatten)]
    pub output: OutputArgs,
}

fn parse_finite_score(raw: &str) -> Result<f64, String> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if score.is_finite() {
        Ok(score)
    } else {
        Err(format!("score must be a finite number, got `{raw}`"))
    }
}

#[derive(Debug, Args, Clone)]
pub struct ThemesArgs {
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_parser_rejects_non_finite_values() {
        assert_eq!(parse_finite_score("780"), Ok(780.0));
        assert_eq!(parse_finite_score("-12.5"), Ok(-12.5));
        assert!(parse_finite_score("NaN").is_err());
        assert!(parse_finite_score("inf").is_err());
        assert!(parse_finite_score("-infinity").is_err());
        assert!(parse_finite_score("oitocentos").is_err());
    }

    #[test]
    fn compare_command_rejects_nan_score() {
        let parsed = Cli::try_parse_from(["essaygauge", "compare", "--score", "NaN"]);
        assert!(parsed.is_err());
    }
}
