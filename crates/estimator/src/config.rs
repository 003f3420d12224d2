//! Configuration for a single birthday-collision estimate.

use crate::error::EstimatorError;

/// Default number of Monte Carlo trials per estimate.
pub const DEFAULT_N_TRIALS: usize = 100_000;

/// Configuration for one call to [`estimate`](crate::estimate).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use birthday_estimator::SimulationConfig;
///
/// let config = SimulationConfig::new(23)
///     .with_n_trials(10_000)
///     .with_leap_day(false);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    room_size: usize,
    n_trials: usize,
    include_leap_day: bool,
}

impl SimulationConfig {
    /// Creates a new configuration for a room of `room_size` people.
    ///
    /// Defaults: `n_trials = 100_000`, `include_leap_day = true`.
    pub fn new(room_size: usize) -> Self {
        Self {
            room_size,
            n_trials: DEFAULT_N_TRIALS,
            include_leap_day: true,
        }
    }

    /// Creates a validated configuration from signed inputs.
    ///
    /// Intended for callers whose input arrives as signed integers (TOML
    /// values, command-line arguments).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`EstimatorError::NegativeRoomSize`] | `room_size < 0` |
    /// | [`EstimatorError::NonPositiveTrials`] | `n_trials <= 0` |
    pub fn from_signed(room_size: i64, n_trials: i64) -> Result<Self, EstimatorError> {
        let room_size =
            usize::try_from(room_size).map_err(|_| EstimatorError::NegativeRoomSize { room_size })?;
        let n_trials = match usize::try_from(n_trials) {
            Ok(n) if n > 0 => n,
            _ => return Err(EstimatorError::NonPositiveTrials { n_trials }),
        };
        Ok(Self::new(room_size).with_n_trials(n_trials))
    }

    /// Sets the number of Monte Carlo trials.
    pub fn with_n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Selects the 366-day leap-weighted calendar (`true`) or the uniform
    /// 365-day calendar (`false`).
    pub fn with_leap_day(mut self, include_leap_day: bool) -> Self {
        self.include_leap_day = include_leap_day;
        self
    }

    /// Returns the number of people in the simulated room.
    pub fn room_size(&self) -> usize {
        self.room_size
    }

    /// Returns the number of trials.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns whether leap-day birthdays are modelled.
    pub fn include_leap_day(&self) -> bool {
        self.include_leap_day
    }

    /// Validates this configuration.
    ///
    /// The room size is unsigned, so only the trial count can be invalid.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.n_trials == 0 {
            return Err(EstimatorError::NonPositiveTrials { n_trials: 0 });
        }
        Ok(())
    }
}
