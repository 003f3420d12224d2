//! Sweep parameters.

use birthday_estimator::DEFAULT_N_TRIALS;

use crate::error::SweepError;

/// Default largest room size of a curve.
pub const DEFAULT_MAX_ROOM_SIZE: usize = 100;

/// Configuration of a probability curve over room sizes `1..=max_room_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    max_room_size: usize,
    n_trials: usize,
    include_leap_day: bool,
    seed: Option<u64>,
    with_exact: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROOM_SIZE)
    }
}

impl SweepConfig {
    /// Creates a sweep up to `max_room_size` with default trials, leap day
    /// included, OS-seeded and closed-form annotation on.
    pub fn new(max_room_size: usize) -> Self {
        Self {
            max_room_size,
            n_trials: DEFAULT_N_TRIALS,
            include_leap_day: true,
            seed: None,
            with_exact: true,
        }
    }

    /// Sets the number of trials per room size.
    pub fn with_n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Sets whether the leap day is part of the calendar.
    pub fn with_leap_day(mut self, include_leap_day: bool) -> Self {
        self.include_leap_day = include_leap_day;
        self
    }

    /// Sets the master seed; `None` draws one from the OS.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether points carry the closed-form probability.
    pub fn with_exact(mut self, with_exact: bool) -> Self {
        self.with_exact = with_exact;
        self
    }

    /// Returns the largest room size.
    pub fn max_room_size(&self) -> usize {
        self.max_room_size
    }

    /// Returns the number of trials per room size.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns whether the leap day is included.
    pub fn include_leap_day(&self) -> bool {
        self.include_leap_day
    }

    /// Returns the master seed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether points carry the closed-form probability.
    pub fn with_exact_enabled(&self) -> bool {
        self.with_exact
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.max_room_size == 0 {
            return Err(SweepError::InvalidConfig {
                reason: "max_room_size must be >= 1".to_string(),
            });
        }
        if self.n_trials == 0 {
            return Err(SweepError::InvalidConfig {
                reason: "n_trials must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}
