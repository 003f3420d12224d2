//! Execution backends for [`foreach`](crate::foreach) loops.

use crate::error::ParallelError;

/// Something that can run a loop body over a batch of items.
///
/// Implementations must return results in the order of `items`, whatever
/// order the work actually ran in.
pub trait ExecutionBackend {
    /// Short human-readable backend name, used in logs and errors.
    fn name(&self) -> &str;

    /// Number of workers that will share the items.
    fn workers(&self) -> usize;

    /// Runs `body` once per item and returns the results in item order.
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::BackendShutDown`] if the backend can no
    /// longer accept work.
    fn execute<T, R, F>(&self, items: Vec<T>, body: F) -> Result<Vec<R>, ParallelError>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync + Send;
}

/// Runs every iteration in the calling thread.
///
/// Useful as a reference for parallel backends and for debugging a loop
/// body without thread interleaving.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl ExecutionBackend for Sequential {
    fn name(&self) -> &str {
        "sequential"
    }

    fn workers(&self) -> usize {
        1
    }

    fn execute<T, R, F>(&self, items: Vec<T>, body: F) -> Result<Vec<R>, ParallelError>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync + Send,
    {
        Ok(items.into_iter().map(body).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_preserves_order() {
        let out = Sequential
            .execute((0..10).collect(), |i: i32| i * i)
            .unwrap();
        assert_eq!(out, vec![0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
    }

    #[test]
    fn sequential_empty() {
        let out: Vec<i32> = Sequential.execute(Vec::<i32>::new(), |i| i).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn sequential_metadata() {
        assert_eq!(Sequential.name(), "sequential");
        assert_eq!(Sequential.workers(), 1);
    }
}
