//! # birthday-parallel
//!
//! A small `foreach` loop construct for embarrassingly parallel work: bind a
//! loop variable to every element of an iterable, run the body on a chosen
//! backend, and combine the ordered results.
//!
//! ## Architecture
//!
//! ```text
//! foreach(items)
//!   ├─ .with_seeds(seed)        (seeds.rs: one reproducible seed per iteration)
//!   └─ .run_combined(backend, combine, body)
//!        ├─ backend.execute()   (backend.rs: Sequential, pool.rs: LocalPool)
//!        └─ combine.combine()   (combine.rs: Collect, Concat, RowBind, ColumnBind, Reduce)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use birthday_parallel::{LocalPool, Reduce, foreach};
//!
//! let mut pool = LocalPool::new(2).unwrap();
//! let sum = foreach(1..=10u64)
//!     .run_combined(&pool, Reduce::new(|a: u64, b: u64| a + b), |i| i * i)
//!     .unwrap();
//! assert_eq!(sum, 385);
//! pool.shutdown();
//! ```

mod backend;
mod combine;
mod error;
mod foreach;
mod pool;
mod seeds;

pub use backend::{ExecutionBackend, Sequential};
pub use combine::{Collect, ColumnBind, Combine, Concat, Matrix, Reduce, RowBind};
pub use error::ParallelError;
pub use foreach::{Foreach, foreach};
pub use pool::LocalPool;
pub use seeds::task_seeds;
