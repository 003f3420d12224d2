use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level birthday configuration (`birthday.toml`).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BirthdayConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Per-estimate settings.
    #[serde(default)]
    pub simulation: SimulationToml,

    /// Curve settings.
    #[serde(default)]
    pub sweep: SweepToml,

    /// Worker settings.
    #[serde(default)]
    pub parallel: ParallelToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl BirthdayConfig {
    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

// Signed so that negative values reach the estimator's argument checks.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    #[serde(default = "default_n_trials")]
    pub n_trials: i64,
    #[serde(default = "default_true")]
    pub include_leap_day: bool,
}

impl Default for SimulationToml {
    fn default() -> Self {
        Self {
            n_trials: default_n_trials(),
            include_leap_day: true,
        }
    }
}

fn default_n_trials() -> i64 {
    100_000
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepToml {
    #[serde(default = "default_max_room_size")]
    pub max_room_size: i64,
    #[serde(default = "default_true")]
    pub with_exact: bool,
}

impl Default for SweepToml {
    fn default() -> Self {
        Self {
            max_room_size: default_max_room_size(),
            with_exact: true,
        }
    }
}

fn default_max_room_size() -> i64 {
    100
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ParallelToml {
    /// `None` uses every available core.
    #[serde(default)]
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "csv".to_string()
}
