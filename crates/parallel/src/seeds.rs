//! Per-iteration seed derivation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Derives `n` seeds, one per loop iteration.
///
/// With `Some(seed)` the output depends only on `seed` and `n`, so a loop
/// that seeds each iteration's generator from it gives the same results on
/// every backend and worker count. With `None` the master generator is
/// seeded from the operating system.
///
/// # Example
///
/// ```
/// use birthday_parallel::task_seeds;
///
/// assert_eq!(task_seeds(Some(7), 4), task_seeds(Some(7), 4));
/// ```
pub fn task_seeds(seed: Option<u64>, n: usize) -> Vec<u64> {
    let mut master = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    (0..n).map(|_| master.random()).collect()
}
