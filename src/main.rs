mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{CheckArgs, Cli, Commands, CompareArgs, MetricsArgs};
use essaygauge::config::{self, LoadedConfig};
use essaygauge::core::{self, report};
use essaygauge::scoring::{self, ScoredResult};
use essaygauge::themes::{self, Theme};
use essaygauge::utils::fs::read_input;
use std::path::Path;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    essaygauge::logging::init(cli.verbose);

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Metrics(args) => run_metrics(args),
        Commands::Compare(args) => run_compare(args),
        Commands::Themes(args) => match args.id.as_deref() {
            Some(id) => show_theme(id),
            None => {
                list_themes();
                Ok(0)
            }
        },
        Commands::Init => {
            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn load(config_path: Option<&Path>) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    config::load_config(config_path, &cwd)
}

fn run_check(args: CheckArgs) -> Result<i32> {
    let loaded = load(args.output.config.as_deref())?;

    let theme = args.theme.as_deref().map(lookup_theme).transpose()?;

    let text = read_input(&args.essay)?;
    let result = args
        .result
        .as_deref()
        .map(load_scored_result)
        .transpose()?;

    let report = core::analyze(&text, result.as_ref(), theme, &loaded.config)?;

    if args.output.json || loaded.config.general.json {
        let json_report = report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn run_metrics(args: MetricsArgs) -> Result<i32> {
    let loaded = load(args.output.config.as_deref())?;
    let text = read_input(&args.essay)?;
    let length = core::measure_length(&text, &loaded.config.thresholds.length());

    if args.output.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&length)?);
    } else {
        report::print_length(&length);
    }
    Ok(0)
}

fn run_compare(args: CompareArgs) -> Result<i32> {
    let loaded = load(args.output.config.as_deref())?;
    let comparisons = core::compare_score(args.score, &loaded.config)?;

    if args.output.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&comparisons)?);
    } else {
        report::print_comparisons(args.score, &comparisons);
    }
    Ok(0)
}

fn load_scored_result(path: &Path) -> Result<ScoredResult> {
    let text = read_input(path)?;
    scoring::parse_scored_result(&text)
        .with_context(|| format!("failed loading scored result {}", path.display()))
}

fn list_themes() {
    let year = themes::current_year();
    for theme in themes::all_themes() {
        println!(
            "{:<12} {:<18} {:<7} {}",
            theme.id,
            theme.year_label(year),
            theme.difficulty,
            theme.title
        );
    }
}

fn lookup_theme(id: &str) -> Result<&'static Theme> {
    match themes::find_theme(id) {
        Some(theme) => Ok(theme),
        None => bail!("unknown theme `{id}` (see `essaygauge themes`)"),
    }
}

fn show_theme(id: &str) -> Result<i32> {
    let theme = lookup_theme(id)?;
    println!("{}", theme.title);
    println!(
        "{} | {} | {}",
        theme.year_label(themes::current_year()),
        theme.axis,
        theme.difficulty
    );
    for text in theme.motivation_texts {
        println!("  - {text}");
    }
    Ok(0)
}
