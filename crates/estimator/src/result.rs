//! Output type for birthday-collision estimates.

/// Outcome of a Monte Carlo estimate.
///
/// Holds the raw counts so that estimates computed on separate workers can
/// be pooled with [`merge`](Self::merge).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateResult {
    collisions: usize,
    n_trials: usize,
}

impl EstimateResult {
    /// Creates a new `EstimateResult`.
    ///
    /// # Panics
    ///
    /// Panics if `collisions > n_trials`.
    pub fn new(collisions: usize, n_trials: usize) -> Self {
        assert!(
            collisions <= n_trials,
            "collisions ({collisions}) cannot exceed trials ({n_trials})"
        );
        Self {
            collisions,
            n_trials,
        }
    }

    /// Returns the number of trials with a shared birthday.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Returns the number of trials run.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the estimated collision probability in `[0, 1]`.
    ///
    /// Returns 0.0 for an empty result.
    pub fn probability(&self) -> f64 {
        if self.n_trials == 0 {
            return 0.0;
        }
        self.collisions as f64 / self.n_trials as f64
    }

    /// Binomial standard error `sqrt(p(1-p)/n)` of the estimate.
    pub fn standard_error(&self) -> f64 {
        if self.n_trials == 0 {
            return 0.0;
        }
        let p = self.probability();
        (p * (1.0 - p) / self.n_trials as f64).sqrt()
    }

    /// Pools two estimates of the same room into one.
    pub fn merge(self, other: Self) -> Self {
        Self {
            collisions: self.collisions + other.collisions,
            n_trials: self.n_trials + other.n_trials,
        }
    }
}
