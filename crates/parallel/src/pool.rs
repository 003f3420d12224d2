//! Fixed-size local worker pool.

use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::backend::ExecutionBackend;
use crate::error::ParallelError;

/// A dedicated pool of local worker threads.
///
/// The pool is independent of rayon's global pool, so its size is exactly
/// the requested worker count. After [`shutdown`](Self::shutdown) the pool
/// reports zero active workers and rejects new work.
///
/// # Example
///
/// ```
/// use birthday_parallel::{ExecutionBackend, LocalPool};
///
/// let mut pool = LocalPool::new(2).unwrap();
/// assert_eq!(pool.active_workers(), 2);
///
/// let squares = pool.execute(vec![1, 2, 3], |x: i32| x * x).unwrap();
/// assert_eq!(squares, vec![1, 4, 9]);
///
/// pool.shutdown();
/// assert_eq!(pool.active_workers(), 0);
/// ```
#[derive(Debug)]
pub struct LocalPool {
    pool: Option<ThreadPool>,
    n_workers: usize,
}

impl LocalPool {
    /// Starts a pool with `n_workers` threads.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ParallelError::InvalidWorkerCount`] | `n_workers == 0` |
    /// | [`ParallelError::PoolBuild`] | the OS refuses to spawn the threads |
    pub fn new(n_workers: usize) -> Result<Self, ParallelError> {
        if n_workers == 0 {
            return Err(ParallelError::InvalidWorkerCount { n_workers });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_workers)
            .thread_name(|i| format!("birthday-worker-{i}"))
            .build()
            .map_err(|e| ParallelError::PoolBuild {
                reason: e.to_string(),
            })?;
        info!(n_workers, "local worker pool started");
        Ok(Self {
            pool: Some(pool),
            n_workers,
        })
    }

    /// Starts a pool with one worker per available CPU.
    pub fn with_available_parallelism() -> Result<Self, ParallelError> {
        let n = std::thread::available_parallelism().map_or(1, |n| n.get());
        Self::new(n)
    }

    /// Returns the number of live worker threads (0 once shut down).
    pub fn active_workers(&self) -> usize {
        self.pool.as_ref().map_or(0, |p| p.current_num_threads())
    }

    /// Returns `true` once [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.pool.is_none()
    }

    /// Stops the pool.
    ///
    /// Threads exit after finishing any work already handed to them.
    /// Calling this more than once is a no-op.
    pub fn shutdown(&mut self) {
        if self.pool.take().is_some() {
            info!(n_workers = self.n_workers, "local worker pool shut down");
        }
    }
}

impl ExecutionBackend for LocalPool {
    fn name(&self) -> &str {
        "local"
    }

    fn workers(&self) -> usize {
        self.n_workers
    }

    fn execute<T, R, F>(&self, items: Vec<T>, body: F) -> Result<Vec<R>, ParallelError>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync + Send,
    {
        let pool = self
            .pool
            .as_ref()
            .ok_or_else(|| ParallelError::BackendShutDown {
                backend: self.name().to_string(),
            })?;
        debug!(
            n_items = items.len(),
            n_workers = self.n_workers,
            "dispatching to local pool"
        );
        Ok(pool.install(|| items.into_par_iter().map(body).collect()))
    }
}

impl Drop for LocalPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
