//! Splitting the trials of one estimate across workers.

use birthday_estimator::{EstimateResult, EstimatorError, SimulationConfig, estimate};
use birthday_parallel::{Combine, ExecutionBackend, Reduce, foreach};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::SweepError;

/// Splits `n_trials` into at most `n_chunks` near-equal positive parts.
///
/// The first `n_trials % k` parts are one larger than the rest.
pub fn chunk_sizes(n_trials: usize, n_chunks: usize) -> Vec<usize> {
    let k = n_chunks.min(n_trials);
    if k == 0 {
        return Vec::new();
    }
    let base = n_trials / k;
    let extra = n_trials % k;
    (0..k).map(|i| base + usize::from(i < extra)).collect()
}

/// Estimates one configuration by running its trials in `n_chunks` pieces
/// on `backend` and pooling the counts.
///
/// The pooled result has exactly `config.n_trials()` trials. With a seed the
/// result depends only on the seed and the chunk count, not on the backend.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SweepError::InvalidConfig`] | `n_chunks == 0` |
/// | [`SweepError::Estimator`] | `config.n_trials() == 0` |
/// | [`SweepError::Parallel`] | the backend is shut down |
pub fn split_estimate<B: ExecutionBackend>(
    config: &SimulationConfig,
    n_chunks: usize,
    seed: Option<u64>,
    backend: &B,
) -> Result<EstimateResult, SweepError> {
    if n_chunks == 0 {
        return Err(SweepError::InvalidConfig {
            reason: "n_chunks must be >= 1".to_string(),
        });
    }
    config.validate()?;

    let sizes = chunk_sizes(config.n_trials(), n_chunks);
    debug!(
        room_size = config.room_size(),
        n_trials = config.n_trials(),
        n_chunks = sizes.len(),
        "splitting estimate"
    );

    let chunks = foreach(sizes)
        .with_seeds(seed)
        .run(backend, |(n, seed)| {
            let chunk = config.with_n_trials(n);
            estimate(&chunk, &mut StdRng::seed_from_u64(seed))
        })?
        .into_iter()
        .collect::<Result<Vec<_>, EstimatorError>>()?;

    Ok(Reduce::new(EstimateResult::merge).combine(chunks)?)
}
