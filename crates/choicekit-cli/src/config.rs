//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Top-level choicekit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoicekitConfig {
    /// Seed for item shuffling; unseeded when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Directory for saved answer state.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Output format when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: OutputFormat,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("./choicekit-state")
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

impl Default for ChoicekitConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            state_dir: default_state_dir(),
            default_format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `choicekit.toml` in the current directory
/// 2. `~/.config/choicekit/config.toml`
///
/// Environment variable override: `CHOICEKIT_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<ChoicekitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("choicekit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ChoicekitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ChoicekitConfig::default(),
    };

    if let Ok(seed) = std::env::var("CHOICEKIT_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("CHOICEKIT_SEED is not a number: {seed}"))?;
        config.random_seed = Some(seed);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("choicekit"))
}
