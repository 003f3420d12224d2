//! Monte Carlo estimation entry points.

use rand::Rng;
use tracing::{debug, trace};

use crate::calendar::DayWeightTable;
use crate::config::SimulationConfig;
use crate::error::EstimatorError;
use crate::result::EstimateResult;
use crate::trial::{TrialScratch, run_trial};

/// Estimates the probability that a room shares at least one birthday.
///
/// Builds a fresh [`DayWeightTable`] for the configured calendar, runs
/// `config.n_trials()` independent rooms and counts those with a repeated
/// day.
///
/// # Errors
///
/// Returns [`EstimatorError::NonPositiveTrials`] if `config.n_trials() == 0`.
///
/// # Example
///
/// ```
/// use birthday_estimator::{SimulationConfig, estimate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = SimulationConfig::new(1).with_n_trials(500);
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = estimate(&config, &mut rng).unwrap();
/// assert_eq!(result.probability(), 0.0);
/// ```
pub fn estimate(
    config: &SimulationConfig,
    rng: &mut impl Rng,
) -> Result<EstimateResult, EstimatorError> {
    config.validate()?;

    let table = DayWeightTable::new(config.include_leap_day());
    let mut scratch = TrialScratch::new();
    let room_size = config.room_size();

    let collisions = (0..config.n_trials())
        .filter(|_| run_trial(room_size, &table, rng, &mut scratch))
        .count();

    let result = EstimateResult::new(collisions, config.n_trials());
    debug!(
        room_size,
        n_trials = config.n_trials(),
        n_days = table.n_days(),
        collisions,
        probability = result.probability(),
        "estimate complete"
    );
    Ok(result)
}

/// Convenience form of [`estimate`] that takes signed arguments and returns
/// only the probability.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`EstimatorError::NegativeRoomSize`] | `room_size < 0` |
/// | [`EstimatorError::NonPositiveTrials`] | `n_trials <= 0` |
pub fn estimate_probability(
    room_size: i64,
    n_trials: i64,
    include_leap_day: bool,
    rng: &mut impl Rng,
) -> Result<f64, EstimatorError> {
    let config =
        SimulationConfig::from_signed(room_size, n_trials)?.with_leap_day(include_leap_day);
    trace!(room_size, n_trials, include_leap_day, "estimate_probability");
    estimate(&config, rng).map(|r| r.probability())
}
