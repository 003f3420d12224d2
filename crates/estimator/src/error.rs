//! Error types for the birthday-estimator crate.

/// Error type for all fallible operations in the birthday-estimator crate.
///
/// Every variant is an invalid-argument condition: the call is rejected
/// before any random numbers are drawn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimatorError {
    /// Returned when a signed room size is below zero.
    #[error("invalid argument: room size must be non-negative, got {room_size}")]
    NegativeRoomSize {
        /// The rejected room size.
        room_size: i64,
    },

    /// Returned when the number of trials is zero or negative.
    #[error("invalid argument: number of trials must be positive, got {n_trials}")]
    NonPositiveTrials {
        /// The rejected trial count.
        n_trials: i64,
    },
}

impl EstimatorError {
    /// Returns `true` for argument-validation failures.
    ///
    /// This is currently every variant.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeRoomSize { .. } | Self::NonPositiveTrials { .. }
        )
    }
}
