//! Error types for the birthday-parallel crate.

/// Error type for all fallible operations in the birthday-parallel crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParallelError {
    /// Returned when a worker pool is requested with zero workers.
    #[error("invalid worker count: {n_workers} (must be >= 1)")]
    InvalidWorkerCount {
        /// The rejected worker count.
        n_workers: usize,
    },

    /// Returned when the underlying thread pool cannot be started.
    #[error("failed to start worker pool: {reason}")]
    PoolBuild {
        /// Description of the failure.
        reason: String,
    },

    /// Returned when work is submitted to a backend that has been shut down.
    #[error("backend '{backend}' has been shut down")]
    BackendShutDown {
        /// Name of the backend.
        backend: String,
    },

    /// Returned when row or column binding receives vectors of unequal length.
    #[error("ragged bind: iteration {iteration} has length {got}, expected {expected}")]
    RaggedBind {
        /// 0-based iteration whose result has the wrong length.
        iteration: usize,
        /// Length of the first iteration's result.
        expected: usize,
        /// Length of the offending result.
        got: usize,
    },

    /// Returned when a reduction runs over zero iterations.
    #[error("cannot reduce an empty loop")]
    EmptyReduction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_worker_count() {
        let e = ParallelError::InvalidWorkerCount { n_workers: 0 };
        assert_eq!(e.to_string(), "invalid worker count: 0 (must be >= 1)");
    }

    #[test]
    fn error_pool_build() {
        let e = ParallelError::PoolBuild {
            reason: "out of threads".to_string(),
        };
        assert_eq!(e.to_string(), "failed to start worker pool: out of threads");
    }

    #[test]
    fn error_backend_shut_down() {
        let e = ParallelError::BackendShutDown {
            backend: "local".to_string(),
        };
        assert_eq!(e.to_string(), "backend 'local' has been shut down");
    }

    #[test]
    fn error_ragged_bind() {
        let e = ParallelError::RaggedBind {
            iteration: 3,
            expected: 4,
            got: 2,
        };
        assert_eq!(
            e.to_string(),
            "ragged bind: iteration 3 has length 2, expected 4"
        );
    }

    #[test]
    fn error_empty_reduction() {
        assert_eq!(
            ParallelError::EmptyReduction.to_string(),
            "cannot reduce an empty loop"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ParallelError>();
    }
}
