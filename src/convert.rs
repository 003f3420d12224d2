//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use birthday_estimator::SimulationConfig;
use birthday_sweep::SweepConfig;

use crate::config::*;

/// Output encoding of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds a [`SimulationConfig`] from signed command-line or TOML values.
pub fn build_simulation_config(
    room_size: i64,
    n_trials: i64,
    include_leap_day: bool,
) -> Result<SimulationConfig> {
    let config = SimulationConfig::from_signed(room_size, n_trials)
        .context("invalid simulation parameters")?;
    Ok(config.with_leap_day(include_leap_day))
}

/// Builds a [`SweepConfig`] from the TOML configuration.
///
/// `max_room_size` overrides `[sweep].max_room_size`.
pub fn build_sweep_config(
    config: &BirthdayConfig,
    max_room_size: Option<i64>,
) -> Result<SweepConfig> {
    let max = max_room_size.unwrap_or(config.sweep.max_room_size);
    if max < 1 {
        bail!("max_room_size must be >= 1, got {max}");
    }
    // room size 0 only exercises the trial-count check
    let sim = build_simulation_config(
        0,
        config.simulation.n_trials,
        config.simulation.include_leap_day,
    )?;
    let max = usize::try_from(max).context("max_room_size does not fit in usize")?;
    Ok(SweepConfig::new(max)
        .with_n_trials(sim.n_trials())
        .with_leap_day(sim.include_leap_day())
        .with_exact(config.sweep.with_exact)
        .with_seed(config.seed))
}
