//! The `foreach` loop construct.

use tracing::debug_span;

use crate::backend::ExecutionBackend;
use crate::combine::Combine;
use crate::error::ParallelError;
use crate::seeds::task_seeds;

/// A loop over a materialised sequence of iteration values.
///
/// Build one with [`foreach`], optionally attach per-iteration seeds with
/// [`with_seeds`](Self::with_seeds), then run it on a backend.
#[derive(Debug, Clone)]
pub struct Foreach<T> {
    items: Vec<T>,
}

/// Binds the loop variable to each element of `items`.
///
/// # Example
///
/// ```
/// use birthday_parallel::{Concat, Sequential, foreach};
///
/// let out = foreach(1..=3)
///     .run_combined(&Sequential, Concat, |n: usize| vec![n; n])
///     .unwrap();
/// assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn foreach<I: IntoIterator>(items: I) -> Foreach<I::Item> {
    Foreach {
        items: items.into_iter().collect(),
    }
}

impl<T: Send> Foreach<T> {
    /// Returns the number of iterations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the loop has no iterations.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pairs every iteration value with its own seed from [`task_seeds`].
    pub fn with_seeds(self, seed: Option<u64>) -> Foreach<(T, u64)> {
        let seeds = task_seeds(seed, self.items.len());
        Foreach {
            items: self.items.into_iter().zip(seeds).collect(),
        }
    }

    /// Runs `body` once per iteration and returns the results in order.
    ///
    /// # Errors
    ///
    /// Propagates backend failures such as
    /// [`ParallelError::BackendShutDown`].
    pub fn run<B, R, F>(self, backend: &B, body: F) -> Result<Vec<R>, ParallelError>
    where
        B: ExecutionBackend,
        R: Send,
        F: Fn(T) -> R + Sync + Send,
    {
        let _span = debug_span!(
            "foreach",
            backend = backend.name(),
            workers = backend.workers(),
            n_iterations = self.items.len()
        )
        .entered();
        backend.execute(self.items, body)
    }

    /// Runs `body` once per iteration and combines the ordered results.
    ///
    /// # Errors
    ///
    /// Propagates backend failures and combine-rule failures
    /// ([`ParallelError::RaggedBind`], [`ParallelError::EmptyReduction`]).
    pub fn run_combined<B, R, F, C>(
        self,
        backend: &B,
        combine: C,
        body: F,
    ) -> Result<C::Output, ParallelError>
    where
        B: ExecutionBackend,
        R: Send,
        F: Fn(T) -> R + Sync + Send,
        C: Combine<R>,
    {
        let results = self.run(backend, body)?;
        combine.combine(results)
    }
}
