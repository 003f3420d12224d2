//! Error types for the birthday-sweep crate.

use birthday_estimator::EstimatorError;
use birthday_parallel::ParallelError;

/// Error type for all fallible operations in the birthday-sweep crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SweepError {
    /// Returned when a sweep or split parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the estimator.
    #[error(transparent)]
    Estimator(#[from] EstimatorError),

    /// Wrapped error from the execution backend or combine rule.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// Returned when a curve cannot be rendered as JSON.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl From<serde_json::Error> for SweepError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            reason: e.to_string(),
        }
    }
}
