use crate::core::cutoff::{Cutoff, NEAR_MARGIN};
use crate::core::metrics::LengthThresholds;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "essaygauge.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub thresholds: ThresholdsConfig,
    pub cutoffs: Vec<Cutoff>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            thresholds: ThresholdsConfig::default(),
            cutoffs: default_cutoffs(),
        }
    }
}

/// Average admission cutoffs from the last selection cycle.
pub fn default_cutoffs() -> Vec<Cutoff> {
    vec![
        Cutoff::new("medicine", 798.4),
        Cutoff::new("law", 735.6),
        Cutoff::new("engineering", 712.8),
    ]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub fail_on: FailOn,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    #[default]
    Warning,
    Error,
    None,
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub minimum_words: usize,
    pub ideal_words: usize,
    pub full_bar_words: usize,
    pub max_lines: usize,
    pub near_margin: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        let length = LengthThresholds::default();
        Self {
            minimum_words: length.minimum_words,
            ideal_words: length.ideal_words,
            full_bar_words: length.full_bar_words,
            max_lines: length.max_lines,
            near_margin: NEAR_MARGIN,
        }
    }
}

impl ThresholdsConfig {
    pub fn length(&self) -> LengthThresholds {
        LengthThresholds {
            minimum_words: self.minimum_words,
            ideal_words: self.ideal_words,
            full_bar_words: self.full_bar_words,
            max_lines: self.max_lines,
        }
    }
}

impl Config {
    fn validate(&self) -> Result<()> {
        let thresholds = &self.thresholds;
        if thresholds.minimum_words > thresholds.ideal_words {
            bail!(
                "thresholds.minimum_words ({}) must not exceed thresholds.ideal_words ({})",
                thresholds.minimum_words,
                thresholds.ideal_words
            );
        }
        if thresholds.full_bar_words == 0 {
            bail!("thresholds.full_bar_words must be greater than zero");
        }
        if thresholds.ideal_words > thresholds.full_bar_words {
            bail!(
                "thresholds.ideal_words ({}) must not exceed thresholds.full_bar_words ({})",
                thresholds.ideal_words,
                thresholds.full_bar_words
            );
        }
        if !self.thresholds.near_margin.is_finite() || self.thresholds.near_margin < 0.0 {
            bail!(
                "thresholds.near_margin must be a non-negative number, got {}",
                self.thresholds.near_margin
            );
        }
        for cutoff in &self.cutoffs {
            if !cutoff.score.is_finite() || cutoff.score <= 0.0 {
                bail!(
                    "cutoff {} has score {}; cutoff scores must be greater than zero",
                    cutoff.key,
                    cutoff.score
                );
            }
        }
        Ok(())
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), cutoffs = config.cutoffs.len(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = default_config_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.cutoffs, default_cutoffs());
        assert_eq!(parsed.thresholds.length(), LengthThresholds::default());
        assert_eq!(parsed.thresholds.near_margin, NEAR_MARGIN);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let parsed: Config = toml::from_str("[thresholds]\nminimum_words = 120\n").unwrap();
        assert_eq!(parsed.thresholds.minimum_words, 120);
        assert_eq!(parsed.thresholds.ideal_words, 350);
        assert_eq!(parsed.cutoffs.len(), 3);
        assert_eq!(parsed.general.fail_on, FailOn::Warning);
    }

    #[test]
    fn cutoff_table_replaces_defaults_in_order() {
        let text = r#"
[[cutoffs]]
key = "nursing"
score = 690.0

[[cutoffs]]
key = "medicine"
score = 801.2
"#;
        let parsed: Config = toml::from_str(text).unwrap();
        let keys: Vec<&str> = parsed.cutoffs.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["nursing", "medicine"]);
    }

    #[test]
    fn loads_local_file_or_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = load_config(None, dir.path()).unwrap();
        assert_eq!(loaded.config.cutoffs, default_cutoffs());

        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[general]\njson = true\nfail_on = \"error\"\n",
        )
        .unwrap();
        let loaded = load_config(None, dir.path()).unwrap();
        assert!(loaded.config.general.json);
        assert_eq!(loaded.config.general.fail_on, FailOn::Error);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn rejects_non_positive_cutoff() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[cutoffs]]\nkey = \"law\"\nscore = 0.0\n").unwrap();
        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("greater than zero"));
    }

    #[test]
    fn rejects_zero_full_bar_words() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[thresholds]\nfull_bar_words = 0\n").unwrap();
        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("full_bar_words must be greater than zero"));
    }

    #[test]
    fn rejects_ideal_words_above_full_bar() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[thresholds]\nideal_words = 400\nfull_bar_words = 380\n").unwrap();
        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("must not exceed thresholds.full_bar_words"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        write_default_config(&path).unwrap();
        assert!(write_default_config(&path).is_err());
    }
}
