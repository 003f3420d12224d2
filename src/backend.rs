//! Runtime choice between the sequential backend and a local pool.

use birthday_parallel::{ExecutionBackend, LocalPool, ParallelError, Sequential};

/// Backend picked from the worker count on the command line or in config.
pub enum Backend {
    Sequential(Sequential),
    Pool(LocalPool),
}

impl Backend {
    /// `Some(1)` runs in the calling thread, `Some(n)` starts an `n`-thread
    /// pool, `None` starts one thread per available CPU.
    pub fn from_workers(workers: Option<usize>) -> Result<Self, ParallelError> {
        match workers {
            Some(1) => Ok(Self::Sequential(Sequential)),
            Some(n) => LocalPool::new(n).map(Self::Pool),
            None => LocalPool::with_available_parallelism().map(Self::Pool),
        }
    }

    /// Shuts the pool down, if any.
    pub fn shutdown(&mut self) {
        if let Self::Pool(pool) = self {
            pool.shutdown();
        }
    }
}

impl ExecutionBackend for Backend {
    fn name(&self) -> &str {
        match self {
            Self::Sequential(b) => b.name(),
            Self::Pool(b) => b.name(),
        }
    }

    fn workers(&self) -> usize {
        match self {
            Self::Sequential(b) => b.workers(),
            Self::Pool(b) => b.workers(),
        }
    }

    fn execute<T, R, F>(&self, items: Vec<T>, body: F) -> Result<Vec<R>, ParallelError>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync + Send,
    {
        match self {
            Self::Sequential(b) => b.execute(items, body),
            Self::Pool(b) => b.execute(items, body),
        }
    }
}
